mod directive_invocation;
#[allow(clippy::module_inception)]
mod document;
mod document_part;
mod field_selection;
mod field_selection_set;
mod fragment_spread;
mod inline_fragment;
mod input_argument;
mod input_value;
mod named_fragment;
mod operation;
mod operation_kind;
mod variable;

pub use directive_invocation::DirectiveInvocation;
pub use document::Document;
pub use document_part::DocumentPart;
pub use document_part::PartData;
pub use document_part::PartId;
pub use document_part::PartKind;
pub use field_selection::FieldSelection;
pub use field_selection_set::FieldSelectionSet;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use input_argument::InputArgument;
pub use input_value::InputValue;
pub use input_value::InputValueKind;
pub use input_value::ScalarValue;
pub use named_fragment::NamedFragment;
pub use operation::Operation;
pub use operation_kind::OperationKind;
pub use variable::Variable;
