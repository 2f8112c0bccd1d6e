use crate::document::PartId;
use crate::types::DirectiveDefinition;
use crate::types::DirectiveLocation;

/// An `@name(...)` directive applied somewhere in an executable document.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveInvocation<'schema> {
    pub(crate) arguments: Vec<PartId>,
    pub(crate) definition: Option<&'schema DirectiveDefinition>,
    pub(crate) location: DirectiveLocation,
    pub(crate) name: String,
}
impl<'schema> DirectiveInvocation<'schema> {
    pub fn arguments(&self) -> &[PartId] {
        self.arguments.as_slice()
    }

    pub fn definition(&self) -> Option<&'schema DirectiveDefinition> {
        self.definition
    }

    /// Where in the document this directive was applied.
    pub fn location(&self) -> DirectiveLocation {
        self.location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
