use crate::document::PartId;
use crate::types::Parameter;
use crate::types::TypeAnnotation;

/// A `name: value` argument passed to a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct InputArgument<'schema> {
    pub(crate) expected_type: Option<TypeAnnotation>,
    pub(crate) name: String,
    pub(crate) parameter: Option<&'schema Parameter>,
    pub(crate) value: Option<PartId>,
}
impl<'schema> InputArgument<'schema> {
    pub fn expected_type(&self) -> Option<&TypeAnnotation> {
        self.expected_type.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameter(&self) -> Option<&'schema Parameter> {
        self.parameter
    }

    pub fn value(&self) -> Option<PartId> {
        self.value
    }
}
