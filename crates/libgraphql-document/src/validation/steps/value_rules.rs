use crate::document::InputValueKind;
use crate::messages::GraphQLMessage;
use crate::rules::RuleReference;
use crate::rules::ValidationStep;
use crate::types::InputObjectType;
use crate::validation::ValidationContext;

/// The input object type a complex value is expected to be, if known.
fn expected_input_object<'schema>(
    ctx: &ValidationContext<'schema, '_>,
) -> Option<&'schema InputObjectType> {
    ctx.part().unwrap_input_value()
        .expected_type()?
        .as_named_annotation()?
        .graphql_type(ctx.schema())?
        .as_input_object()
}

/// <https://spec.graphql.org/October2021/#sec-Input-Object-Field-Names>
#[derive(Debug)]
pub struct InputObjectFieldNames;
impl ValidationStep for InputObjectFieldNames {
    fn name(&self) -> &'static str {
        "input-object-field-names"
    }

    fn should_execute(&self, ctx: &ValidationContext<'_, '_>) -> bool {
        matches!(ctx.part().unwrap_input_value().kind(), InputValueKind::Complex(_))
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let Some(input_obj) = expected_input_object(ctx) else {
            return;
        };
        let value_part = ctx.part();
        let InputValueKind::Complex(fields) = value_part.unwrap_input_value().kind() else {
            return;
        };

        let messages: Vec<_> =
            fields.iter()
                .filter(|(name, _)| !input_obj.fields().contains_key(name.as_str()))
                .map(|(name, field_id)| GraphQLMessage::critical(
                    &RuleReference::INPUT_OBJECT_FIELDS_EXIST,
                    format!(
                        "Field `{name}` is not defined by input object type `{}`",
                        input_obj.name(),
                    ),
                    ctx.document().part(*field_id).location().to_owned(),
                ))
                .collect();

        for message in messages {
            ctx.add_message(message);
        }
    }
}

/// A required field that is given an explicit `null` is reported by
/// [`ValuesOfCorrectType`](crate::construction::steps::ValuesOfCorrectType)
/// instead.
///
/// <https://spec.graphql.org/October2021/#sec-Input-Object-Required-Fields>
#[derive(Debug)]
pub struct InputObjectRequiredFields;
impl ValidationStep for InputObjectRequiredFields {
    fn name(&self) -> &'static str {
        "input-object-required-fields"
    }

    fn should_execute(&self, ctx: &ValidationContext<'_, '_>) -> bool {
        matches!(ctx.part().unwrap_input_value().kind(), InputValueKind::Complex(_))
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let Some(input_obj) = expected_input_object(ctx) else {
            return;
        };
        let value_part = ctx.part();
        let InputValueKind::Complex(fields) = value_part.unwrap_input_value().kind() else {
            return;
        };

        let messages: Vec<_> =
            input_obj.fields().values()
                .filter(|param| param.is_required())
                .filter(|param| !fields.contains_key(param.name()))
                .map(|param| GraphQLMessage::critical(
                    &RuleReference::INPUT_OBJECT_REQUIRED_FIELDS_PRESENT,
                    format!(
                        "Input object `{}` is missing required field `{}` of type `{}`",
                        input_obj.name(),
                        param.name(),
                        param.type_annotation(),
                    ),
                    value_part.location().to_owned(),
                ))
                .collect();

        for message in messages {
            ctx.add_message(message);
        }
    }
}
