use crate::document::PartId;

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub(crate) directives: Vec<PartId>,
    pub(crate) selection_set: Option<PartId>,
    pub(crate) type_condition: Option<String>,
}
impl InlineFragment {
    pub fn directives(&self) -> &[PartId] {
        self.directives.as_slice()
    }

    pub fn selection_set(&self) -> Option<PartId> {
        self.selection_set
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}
