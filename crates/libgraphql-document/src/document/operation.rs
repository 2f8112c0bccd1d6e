use crate::document::OperationKind;
use crate::document::PartId;
use indexmap::IndexMap;

/// A `query`, `mutation`, or `subscription` definition.
///
/// <https://spec.graphql.org/October2021/#sec-Language.Operations>
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub(crate) directives: Vec<PartId>,
    pub(crate) kind: OperationKind,
    pub(crate) name: Option<String>,
    pub(crate) root_type_name: String,
    pub(crate) selection_set: Option<PartId>,
    pub(crate) variables: IndexMap<String, PartId>,
}
impl Operation {
    pub fn directives(&self) -> &[PartId] {
        self.directives.as_slice()
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name of the schema type that this operation's root selection set
    /// selects from.
    pub fn root_type_name(&self) -> &str {
        self.root_type_name.as_str()
    }

    pub fn selection_set(&self) -> Option<PartId> {
        self.selection_set
    }

    /// Declared variables keyed by name. When a name is declared more than
    /// once, the first declaration wins.
    pub fn variables(&self) -> &IndexMap<String, PartId> {
        &self.variables
    }
}
