use crate::document::PartId;
use crate::types::Field;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection<'schema> {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: Vec<PartId>,
    pub(crate) directives: Vec<PartId>,
    pub(crate) field: Option<&'schema Field>,
    pub(crate) name: String,
    pub(crate) owner_type_name: Option<String>,
    pub(crate) selection_set: Option<PartId>,
}
impl<'schema> FieldSelection<'schema> {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Argument parts in source order. Duplicate names are preserved here
    /// and reported during validation.
    pub fn arguments(&self) -> &[PartId] {
        self.arguments.as_slice()
    }

    pub fn directives(&self) -> &[PartId] {
        self.directives.as_slice()
    }

    /// The schema field this selection resolved to, if any.
    pub fn field(&self) -> Option<&'schema Field> {
        self.field
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn owner_type_name(&self) -> Option<&str> {
        self.owner_type_name.as_deref()
    }

    /// The key this field's result appears under in a response: its alias
    /// if it has one, otherwise its name.
    pub fn response_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }

    pub fn selection_set(&self) -> Option<PartId> {
        self.selection_set
    }
}
