use crate::document::OperationKind;
use crate::document::ScalarValue;
use crate::types::TypeAnnotation;

/// What a [`SyntaxNode`](crate::syntax::SyntaxNode) represents, along with
/// the data the construction pipeline needs from it.
#[derive(Clone, Debug, PartialEq)]
pub enum SyntaxNodeKind {
    Argument {
        name: String,
    },
    Directive {
        name: String,
    },
    Document,
    EnumValue {
        value: String,
    },
    Field {
        alias: Option<String>,
        name: String,
    },
    FragmentDefinition {
        name: String,
        type_condition: String,
    },
    FragmentSpread {
        fragment_name: String,
    },
    InlineFragment {
        type_condition: Option<String>,
    },
    ListValue,
    NullValue,
    /// One `name: value` entry of an object literal. Its only child is the
    /// value.
    ObjectField {
        name: String,
    },
    ObjectValue,
    Operation {
        kind: OperationKind,
        name: Option<String>,
    },
    ScalarValue(ScalarValue),
    SelectionSet,
    /// A schema (type-system) definition or extension found in a document
    /// that should only contain executable definitions.
    TypeSystemDefinition {
        description: String,
    },
    VariableDefinition {
        name: String,
        type_annotation: TypeAnnotation,
    },
    VariableValue {
        name: String,
    },
}
impl SyntaxNodeKind {
    pub fn tag(&self) -> SyntaxNodeTag {
        match self {
            Self::Argument { .. } => SyntaxNodeTag::Argument,
            Self::Directive { .. } => SyntaxNodeTag::Directive,
            Self::Document => SyntaxNodeTag::Document,
            Self::EnumValue { .. } => SyntaxNodeTag::EnumValue,
            Self::Field { .. } => SyntaxNodeTag::Field,
            Self::FragmentDefinition { .. } => SyntaxNodeTag::FragmentDefinition,
            Self::FragmentSpread { .. } => SyntaxNodeTag::FragmentSpread,
            Self::InlineFragment { .. } => SyntaxNodeTag::InlineFragment,
            Self::ListValue => SyntaxNodeTag::ListValue,
            Self::NullValue => SyntaxNodeTag::NullValue,
            Self::ObjectField { .. } => SyntaxNodeTag::ObjectField,
            Self::ObjectValue => SyntaxNodeTag::ObjectValue,
            Self::Operation { .. } => SyntaxNodeTag::Operation,
            Self::ScalarValue(_) => SyntaxNodeTag::ScalarValue,
            Self::SelectionSet => SyntaxNodeTag::SelectionSet,
            Self::TypeSystemDefinition { .. } => SyntaxNodeTag::TypeSystemDefinition,
            Self::VariableDefinition { .. } => SyntaxNodeTag::VariableDefinition,
            Self::VariableValue { .. } => SyntaxNodeTag::VariableValue,
        }
    }
}

/// The field-less discriminant of [`SyntaxNodeKind`]. Construction rule
/// packages are registered against these.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SyntaxNodeTag {
    Argument,
    Directive,
    Document,
    EnumValue,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    ListValue,
    NullValue,
    ObjectField,
    ObjectValue,
    Operation,
    ScalarValue,
    SelectionSet,
    TypeSystemDefinition,
    VariableDefinition,
    VariableValue,
}
impl SyntaxNodeTag {
    /// Whether this tag is one of the input value literal kinds.
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            Self::EnumValue
                | Self::ListValue
                | Self::NullValue
                | Self::ObjectValue
                | Self::ScalarValue
                | Self::VariableValue
        )
    }
}
