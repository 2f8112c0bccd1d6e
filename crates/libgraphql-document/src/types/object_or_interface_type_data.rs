use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

/// Data shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interface_names: Vec<String>,
    pub(crate) name: String,
}
