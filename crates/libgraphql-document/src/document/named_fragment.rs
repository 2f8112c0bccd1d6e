use crate::document::PartId;

/// A top-level `fragment Name on Type { ... }` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedFragment {
    pub(crate) directives: Vec<PartId>,
    pub(crate) is_referenced: bool,
    pub(crate) name: String,
    pub(crate) selection_set: Option<PartId>,
    pub(crate) type_condition: String,
}
impl NamedFragment {
    pub fn directives(&self) -> &[PartId] {
        self.directives.as_slice()
    }

    /// Whether any fragment spread in the document targets this fragment.
    /// Only meaningful once validation has run.
    pub fn is_referenced(&self) -> bool {
        self.is_referenced
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> Option<PartId> {
        self.selection_set
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
