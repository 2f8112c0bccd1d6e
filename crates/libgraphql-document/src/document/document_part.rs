use crate::document::DirectiveInvocation;
use crate::document::FieldSelection;
use crate::document::FieldSelectionSet;
use crate::document::FragmentSpread;
use crate::document::InlineFragment;
use crate::document::InputArgument;
use crate::document::InputValue;
use crate::document::NamedFragment;
use crate::document::Operation;
use crate::document::Variable;
use crate::loc;

/// Index of a [`DocumentPart`] within its [`Document`](crate::document::Document).
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct PartId(pub(crate) usize);
impl PartId {
    pub fn index(&self) -> usize {
        self.0
    }
}
impl std::fmt::Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The field-less discriminant of [`PartData`].
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum PartKind {
    Argument,
    Directive,
    Document,
    FieldSelection,
    FragmentSpread,
    InlineFragment,
    InputValue,
    NamedFragment,
    Operation,
    SelectionSet,
    Variable,
}
impl PartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Argument => "Argument",
            Self::Directive => "Directive",
            Self::Document => "Document",
            Self::FieldSelection => "FieldSelection",
            Self::FragmentSpread => "FragmentSpread",
            Self::InlineFragment => "InlineFragment",
            Self::InputValue => "InputValue",
            Self::NamedFragment => "NamedFragment",
            Self::Operation => "Operation",
            Self::SelectionSet => "SelectionSet",
            Self::Variable => "Variable",
        }
    }
}
impl std::fmt::Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PartData<'schema> {
    Argument(InputArgument<'schema>),
    Directive(DirectiveInvocation<'schema>),
    Document,
    FieldSelection(FieldSelection<'schema>),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
    InputValue(InputValue),
    NamedFragment(NamedFragment),
    Operation(Operation),
    SelectionSet(FieldSelectionSet),
    Variable(Variable),
}
impl PartData<'_> {
    pub fn kind(&self) -> PartKind {
        match self {
            Self::Argument(_) => PartKind::Argument,
            Self::Directive(_) => PartKind::Directive,
            Self::Document => PartKind::Document,
            Self::FieldSelection(_) => PartKind::FieldSelection,
            Self::FragmentSpread(_) => PartKind::FragmentSpread,
            Self::InlineFragment(_) => PartKind::InlineFragment,
            Self::InputValue(_) => PartKind::InputValue,
            Self::NamedFragment(_) => PartKind::NamedFragment,
            Self::Operation(_) => PartKind::Operation,
            Self::SelectionSet(_) => PartKind::SelectionSet,
            Self::Variable(_) => PartKind::Variable,
        }
    }

    /// The segment this part contributes to its
    /// [`DocumentPart::path()`]. Object-field values and list items get
    /// their segment from their position instead.
    pub(crate) fn path_segment(&self) -> String {
        match self {
            Self::Argument(arg) => format!("({})", arg.name),
            Self::Directive(directive) => format!("@{}", directive.name),
            Self::Document => String::new(),
            Self::FieldSelection(field) => field.response_name().to_string(),
            Self::FragmentSpread(spread) => format!("...{}", spread.fragment_name),
            Self::InlineFragment(inline) => match &inline.type_condition {
                Some(type_condition) => format!("...on {type_condition}"),
                None => "...".to_string(),
            },
            Self::InputValue(_) => "=".to_string(),
            Self::NamedFragment(fragment) => format!("fragment {}", fragment.name),
            Self::Operation(op) => match &op.name {
                Some(name) => format!("{} {name}", op.kind),
                None => op.kind.to_string(),
            },
            Self::SelectionSet(_) => "{}".to_string(),
            Self::Variable(var) => format!("${}", var.name),
        }
    }
}

macro_rules! part_data_accessors {
    ($($variant:ident($data_ty:ty) => $as_fn:ident, $unwrap_fn:ident;)*) => {
        impl<'schema> DocumentPart<'schema> {
            $(
                pub fn $as_fn(&self) -> Option<&$data_ty> {
                    if let PartData::$variant(data) = &self.data {
                        Some(data)
                    } else {
                        None
                    }
                }

                /// Panics if this part is not of the expected variant. Rule
                /// steps are only ever registered against a single part kind,
                /// so a mismatch here is a bug in rule registration.
                pub fn $unwrap_fn(&self) -> &$data_ty {
                    match &self.data {
                        PartData::$variant(data) => data,
                        other => panic!(
                            "Expected part {} to be {}, but found {}",
                            self.id,
                            stringify!($variant),
                            other.kind(),
                        ),
                    }
                }
            )*
        }
    };
}

macro_rules! part_data_mut_accessors {
    ($($variant:ident($data_ty:ty) => $unwrap_mut_fn:ident;)*) => {
        impl<'schema> DocumentPart<'schema> {
            $(
                pub(crate) fn $unwrap_mut_fn(&mut self) -> &mut $data_ty {
                    let id = self.id;
                    match &mut self.data {
                        PartData::$variant(data) => data,
                        other => panic!(
                            "Expected part {} to be {}, but found {}",
                            id,
                            stringify!($variant),
                            other.kind(),
                        ),
                    }
                }
            )*
        }
    };
}

/// One node of the [`Document`](crate::document::Document) part tree.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentPart<'schema> {
    pub(crate) children: Vec<PartId>,
    pub(crate) data: PartData<'schema>,
    pub(crate) id: PartId,
    pub(crate) location: loc::SourceLocation,
    pub(crate) parent: Option<PartId>,
    pub(crate) path: String,
}
impl<'schema> DocumentPart<'schema> {
    /// All parts directly beneath this one, in the order they were added.
    pub fn children(&self) -> &[PartId] {
        self.children.as_slice()
    }

    pub fn data(&self) -> &PartData<'schema> {
        &self.data
    }

    pub fn id(&self) -> PartId {
        self.id
    }

    pub fn kind(&self) -> PartKind {
        self.data.kind()
    }

    pub fn location(&self) -> &loc::SourceLocation {
        &self.location
    }

    /// `None` only for the root [`PartKind::Document`] part.
    pub fn parent(&self) -> Option<PartId> {
        self.parent
    }

    /// A human-readable path from the root to this part. Unique within a
    /// document; repeated siblings get a `[n]` suffix.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }
}

part_data_accessors! {
    Argument(InputArgument<'schema>) => as_argument, unwrap_argument;
    Directive(DirectiveInvocation<'schema>) => as_directive, unwrap_directive;
    FieldSelection(FieldSelection<'schema>) => as_field_selection, unwrap_field_selection;
    FragmentSpread(FragmentSpread) => as_fragment_spread, unwrap_fragment_spread;
    InlineFragment(InlineFragment) => as_inline_fragment, unwrap_inline_fragment;
    InputValue(InputValue) => as_input_value, unwrap_input_value;
    NamedFragment(NamedFragment) => as_named_fragment, unwrap_named_fragment;
    Operation(Operation) => as_operation, unwrap_operation;
    SelectionSet(FieldSelectionSet) => as_selection_set, unwrap_selection_set;
    Variable(Variable) => as_variable, unwrap_variable;
}

part_data_mut_accessors! {
    InputValue(InputValue) => unwrap_input_value_mut;
    NamedFragment(NamedFragment) => unwrap_named_fragment_mut;
    SelectionSet(FieldSelectionSet) => unwrap_selection_set_mut;
    Variable(Variable) => unwrap_variable_mut;
}
