use crate::construction::ConstructionContext;
use crate::document::InputValueKind;
use crate::document::PartKind;
use crate::document::ScalarValue;
use crate::messages::GraphQLMessage;
use crate::messages::ValueCoercionError;
use crate::rules::ConstructionStep;
use crate::rules::RuleReference;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;

type Result<T> = std::result::Result<T, ValueCoercionError>;

/// Checks each literal against the type expected at its position.
///
/// List and object literals are only checked for their outer shape here;
/// their items and fields are checked when their own nodes are visited.
/// Variable references are checked against their declared types during
/// validation, except that they may not appear at all inside a variable's
/// default value.
///
/// <https://spec.graphql.org/October2021/#sec-Values-of-Correct-Type>
#[derive(Debug)]
pub struct ValuesOfCorrectType;
impl ValuesOfCorrectType {
    fn check_literal(
        schema: &Schema,
        kind: &InputValueKind,
        expected_type: &TypeAnnotation,
    ) -> Result<()> {
        if let InputValueKind::Null = kind {
            return if expected_type.nullable() {
                Ok(())
            } else {
                Err(ValueCoercionError::NullForNonNullType {
                    expected_type: expected_type.to_string(),
                })
            };
        }

        if let Some(item_type) = expected_type.list_item_type() {
            return match kind {
                InputValueKind::List(_) => Ok(()),
                // A lone item is coerced to a one-item list.
                _ => Self::check_literal(schema, kind, item_type),
            };
        }

        let Some(named_type) = expected_type.innermost_type(schema) else {
            return Ok(());
        };

        let unexpected = || Err(ValueCoercionError::UnexpectedValueKind {
            expected_type: expected_type.to_string(),
            found: Self::describe(kind),
        });

        match (named_type, kind) {
            (_, InputValueKind::VariableReference { .. }) => Ok(()),

            (GraphQLType::Int, InputValueKind::Scalar(ScalarValue::Int(value))) => {
                if i32::try_from(*value).is_ok() {
                    Ok(())
                } else {
                    Err(ValueCoercionError::IntOutOfRange { value: *value })
                }
            },

            (GraphQLType::Float, InputValueKind::Scalar(ScalarValue::Int(_)))
            | (GraphQLType::Float, InputValueKind::Scalar(ScalarValue::Float(_)))
            | (GraphQLType::String, InputValueKind::Scalar(ScalarValue::String(_)))
            | (GraphQLType::Bool, InputValueKind::Scalar(ScalarValue::Boolean(_)))
            | (GraphQLType::ID, InputValueKind::Scalar(ScalarValue::Int(_)))
            | (GraphQLType::ID, InputValueKind::Scalar(ScalarValue::String(_)))
            | (GraphQLType::Scalar(_), _)
            | (GraphQLType::InputObject(_), InputValueKind::Complex(_)) => Ok(()),

            (GraphQLType::Enum(enum_type), InputValueKind::Enum(value)) => {
                if enum_type.values().contains_key(value.as_str()) {
                    Ok(())
                } else {
                    Err(ValueCoercionError::EnumValueNotDefined {
                        enum_name: enum_type.name().to_string(),
                        value: value.to_string(),
                    })
                }
            },

            // Output types in input position are reported against the
            // variable or argument definition, not each value.
            (GraphQLType::Interface(_), _)
            | (GraphQLType::Object(_), _)
            | (GraphQLType::Union(_), _) => Ok(()),

            _ => unexpected(),
        }
    }

    fn describe(kind: &InputValueKind) -> &'static str {
        match kind {
            InputValueKind::Complex(_) => "an object",
            InputValueKind::Enum(_) => "an enum value",
            InputValueKind::List(_) => "a list",
            InputValueKind::Null => "null",
            InputValueKind::Scalar(ScalarValue::Boolean(_)) => "a boolean",
            InputValueKind::Scalar(ScalarValue::Float(_)) => "a float",
            InputValueKind::Scalar(ScalarValue::Int(_)) => "an int",
            InputValueKind::Scalar(ScalarValue::String(_)) => "a string",
            InputValueKind::VariableReference { .. } => "a variable",
        }
    }
}
impl ConstructionStep for ValuesOfCorrectType {
    fn name(&self) -> &'static str {
        "values-of-correct-type"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let value_id = ctx.active_part();
        let value = ctx.document().part(value_id).unwrap_input_value();

        let result = match (value.kind(), value.expected_type()) {
            (InputValueKind::VariableReference { name, .. }, _)
                if ctx.find_ancestor_part(PartKind::Variable).is_some() =>
                Err(ValueCoercionError::VariableInConstantValue {
                    name: name.to_string(),
                }),
            (kind, Some(expected_type)) =>
                Self::check_literal(ctx.schema(), kind, expected_type),
            (_, None) => Ok(()),
        };

        let Err(err) = result else {
            return false;
        };
        ctx.add_message(
            GraphQLMessage::critical(
                &RuleReference::VALUES_OF_CORRECT_TYPE,
                format!("Invalid value: {err}"),
                ctx.location(),
            ).with_error(err),
        );
        true
    }
}
