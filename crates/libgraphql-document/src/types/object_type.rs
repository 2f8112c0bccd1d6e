use crate::loc;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;

/// Represents a defined
/// [object type](https://spec.graphql.org/October2021/#sec-Objects).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);
impl ObjectType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.0.def_location
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.0.fields
    }

    /// Names of the interfaces this type declares that it implements.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names.iter().map(String::as_str).collect()
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }
}
