use crate::document::PartId;

/// A `{ ... }` block of selections made against a single owner type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelectionSet {
    pub(crate) executable_fields: Vec<PartId>,
    pub(crate) owner_type_name: Option<String>,
    pub(crate) selections: Vec<PartId>,
}
impl FieldSelectionSet {
    /// The field selections an executor should run for this set, in order,
    /// with inline fragments and fragment spreads flattened in place.
    ///
    /// Populated once the owning [`Document`](crate::document::Document) has
    /// resolved its fragment spreads. See
    /// [`Document::collect_executable_fields()`](crate::document::Document::collect_executable_fields).
    pub fn executable_fields(&self) -> &[PartId] {
        self.executable_fields.as_slice()
    }

    /// Name of the type that selections in this set are made against, or
    /// `None` when that type could not be determined.
    pub fn owner_type_name(&self) -> Option<&str> {
        self.owner_type_name.as_deref()
    }

    /// Direct children: field selections, inline fragments, and fragment
    /// spreads, in source order.
    pub fn selections(&self) -> &[PartId] {
        self.selections.as_slice()
    }
}
