use crate::loc;
use crate::types::Parameter;
use indexmap::IndexMap;

/// Represents a defined
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
///
/// Input fields share their shape with field and directive arguments, so
/// they are stored as [`Parameter`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) fields: IndexMap<String, Parameter>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn fields(&self) -> &IndexMap<String, Parameter> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
