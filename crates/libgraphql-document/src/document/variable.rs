use crate::document::PartId;
use crate::types::TypeAnnotation;

/// A `$name: Type = default` variable definition on an operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub(crate) default_value: Option<PartId>,
    pub(crate) is_used: bool,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Variable {
    pub fn default_value(&self) -> Option<PartId> {
        self.default_value
    }

    /// Whether the owning operation references this variable anywhere,
    /// including through fragment spreads. Only meaningful once validation
    /// has run.
    pub fn is_used(&self) -> bool {
        self.is_used
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
