use thiserror::Error;

/// Why a literal input value could not be coerced to the type expected at
/// its position.
///
/// <https://spec.graphql.org/October2021/#sec-Input-Values>
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValueCoercionError {
    #[error("Enum value `{value}` is not a member of enum `{enum_name}`")]
    EnumValueNotDefined {
        enum_name: String,
        value: String,
    },

    #[error("Int value {value} does not fit in a 32-bit signed integer")]
    IntOutOfRange {
        value: i64,
    },

    #[error("Expected a value of type `{expected_type}`, but found null")]
    NullForNonNullType {
        expected_type: String,
    },

    #[error("Expected a value of type `{expected_type}`, but found {found}")]
    UnexpectedValueKind {
        expected_type: String,
        found: &'static str,
    },

    #[error("Variable `${name}` cannot be used inside a constant value")]
    VariableInConstantValue {
        name: String,
    },
}
