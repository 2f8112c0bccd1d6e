use crate::loc;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;

/// Represents a defined
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);
impl InterfaceType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.0.def_location
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.0.fields
    }

    /// Names of the interfaces this interface itself implements.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names.iter().map(String::as_str).collect()
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }
}
