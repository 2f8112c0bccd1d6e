use crate::document::PartId;

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub(crate) directives: Vec<PartId>,
    pub(crate) fragment: Option<PartId>,
    pub(crate) fragment_name: String,
}
impl FragmentSpread {
    pub fn directives(&self) -> &[PartId] {
        self.directives.as_slice()
    }

    /// The [`NamedFragment`](crate::document::NamedFragment) part this
    /// spread targets, or `None` if no fragment with that name exists.
    ///
    /// When several fragments share the name, the first one declared wins.
    pub fn fragment(&self) -> Option<PartId> {
        self.fragment
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }
}
