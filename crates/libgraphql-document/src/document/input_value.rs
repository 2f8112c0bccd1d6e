use crate::document::PartId;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub enum ScalarValue {
    Boolean(bool),
    Float(f64),
    Int(i64),
    String(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputValueKind {
    /// An input object literal, with fields in source order.
    ///
    /// `graphql-parser` collects object literals into a map, so a field
    /// written more than once keeps only its last value and cannot be
    /// reported as a duplicate.
    Complex(IndexMap<String, PartId>),
    Enum(String),
    List(Vec<PartId>),
    Null,
    Scalar(ScalarValue),
    VariableReference {
        name: String,
        variable: Option<PartId>,
    },
}

/// A literal or variable reference in argument, default-value, list-item,
/// or object-field position.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValue {
    pub(crate) expected_type: Option<TypeAnnotation>,
    pub(crate) kind: InputValueKind,
}
impl InputValue {
    /// The type this value must be coercible to, if it could be determined
    /// from the schema.
    pub fn expected_type(&self) -> Option<&TypeAnnotation> {
        self.expected_type.as_ref()
    }

    pub fn kind(&self) -> &InputValueKind {
        &self.kind
    }

    /// For variable references: the referenced variable's name.
    pub fn variable_name(&self) -> Option<&str> {
        match &self.kind {
            InputValueKind::VariableReference { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }
}
