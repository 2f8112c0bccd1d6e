use crate::document::Document;
use crate::document::InputValueKind;
use crate::document::PartData;
use crate::document::PartId;
use crate::document::ScalarValue;
use crate::messages::GraphQLMessage;
use crate::rules::RuleReference;
use crate::rules::ValidationStep;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::validation::ValidationContext;
use indexmap::IndexMap;

/// Renders an input value part back to GraphQL syntax, for comparing
/// arguments.
fn render_value(doc: &Document<'_>, value_id: Option<PartId>) -> String {
    let Some(value) = value_id.and_then(|id| doc.part(id).as_input_value()) else {
        return String::new();
    };
    match value.kind() {
        InputValueKind::Complex(fields) => format!(
            "{{{}}}",
            fields.iter()
                .map(|(name, id)| format!("{name}: {}", render_value(doc, Some(*id))))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        InputValueKind::Enum(value) => value.to_string(),
        InputValueKind::List(items) => format!(
            "[{}]",
            items.iter()
                .map(|id| render_value(doc, Some(*id)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        InputValueKind::Null => "null".to_string(),
        InputValueKind::Scalar(ScalarValue::Boolean(value)) => value.to_string(),
        InputValueKind::Scalar(ScalarValue::Float(value)) => value.to_string(),
        InputValueKind::Scalar(ScalarValue::Int(value)) => value.to_string(),
        InputValueKind::Scalar(ScalarValue::String(value)) => format!("{value:?}"),
        InputValueKind::VariableReference { name, .. } => format!("${name}"),
    }
}

/// Field selections that share a response name within one selection set
/// must select the same field with the same arguments, unless they are made
/// against two different object types.
///
/// Only the (flattened) fields of each selection set are compared. Sub-
/// selections are compared when their own selection sets are visited.
///
/// <https://spec.graphql.org/October2021/#sec-Field-Selection-Merging>
#[derive(Debug)]
pub struct FieldSelectionMerging;
impl FieldSelectionMerging {
    fn argument_signature(doc: &Document<'_>, field_id: PartId) -> Vec<(String, String)> {
        let mut signature: Vec<_> =
            doc.part(field_id).unwrap_field_selection().arguments().iter()
                .map(|arg_id| {
                    let arg = doc.part(*arg_id).unwrap_argument();
                    (arg.name().to_string(), render_value(doc, arg.value()))
                })
                .collect();
        signature.sort();
        signature
    }

    fn conflict(
        schema: &Schema,
        doc: &Document<'_>,
        field_a_id: PartId,
        field_b_id: PartId,
    ) -> Option<String> {
        let field_a = doc.part(field_a_id).unwrap_field_selection();
        let field_b = doc.part(field_b_id).unwrap_field_selection();

        let is_object = |type_name: Option<&str>| {
            type_name
                .and_then(|name| schema.lookup_type(name))
                .is_some_and(|type_| matches!(type_, GraphQLType::Object(_)))
        };
        let parents_may_overlap =
            field_a.owner_type_name() == field_b.owner_type_name()
                || !is_object(field_a.owner_type_name())
                || !is_object(field_b.owner_type_name());
        if !parents_may_overlap {
            return None;
        }

        if field_a.name() != field_b.name() {
            return Some(format!(
                "`{}` and `{}` are different fields",
                field_a.name(),
                field_b.name(),
            ));
        }
        if Self::argument_signature(doc, field_a_id) != Self::argument_signature(doc, field_b_id) {
            return Some("they have differing arguments".to_string());
        }
        None
    }
}
impl ValidationStep for FieldSelectionMerging {
    fn name(&self) -> &'static str {
        "field-selection-merging"
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let doc = ctx.document();
        let schema = ctx.schema();
        let set_part = ctx.part();

        let mut by_response_name: IndexMap<&str, Vec<PartId>> = IndexMap::new();
        for field_id in doc.executable_fields(set_part.id()) {
            let response_name = doc.part(*field_id).unwrap_field_selection().response_name();
            by_response_name.entry(response_name).or_default().push(*field_id);
        }

        let mut messages = vec![];
        for (response_name, field_ids) in by_response_name {
            // Each field is compared against every field before it.
            let conflict =
                field_ids.iter()
                    .enumerate()
                    .find_map(|(idx, field_id)| {
                        field_ids[..idx].iter().find_map(|earlier_id| {
                            Self::conflict(schema, doc, *earlier_id, *field_id)
                                .map(|reason| (*field_id, reason))
                        })
                    });
            if let Some((other_id, reason)) = conflict {
                messages.push((
                    format!("5.3.2|{}|{response_name}", set_part.path()),
                    GraphQLMessage::critical(
                        &RuleReference::FIELD_SELECTION_MERGING,
                        format!(
                            "Fields with response name `{response_name}` conflict \
                            because {reason}; use different aliases on the fields \
                            to fetch both",
                        ),
                        doc.part(other_id).location().to_owned(),
                    ),
                ));
            }
        }

        for (key, message) in messages {
            ctx.report_once(key, message);
        }
    }
}

/// Registered against both field selections and directives.
///
/// A required argument that is passed an explicit `null` is reported by
/// [`ValuesOfCorrectType`](crate::construction::steps::ValuesOfCorrectType)
/// instead.
///
/// <https://spec.graphql.org/October2021/#sec-Required-Arguments>
#[derive(Debug)]
pub struct RequiredArguments;
impl ValidationStep for RequiredArguments {
    fn name(&self) -> &'static str {
        "required-arguments"
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let doc = ctx.document();
        let part = ctx.part();
        let (parameters, arg_ids, owner_label) = match part.data() {
            PartData::FieldSelection(field_selection) => {
                let Some(field) = field_selection.field() else {
                    return;
                };
                (
                    field.parameters(),
                    field_selection.arguments(),
                    format!("Field `{}`", field_selection.name()),
                )
            },

            PartData::Directive(directive) => {
                let Some(definition) = directive.definition() else {
                    return;
                };
                (
                    definition.parameters(),
                    directive.arguments(),
                    format!("Directive `@{}`", directive.name()),
                )
            },

            other => panic!(
                "RequiredArguments registered against {} part {}",
                other.kind(),
                part.id(),
            ),
        };

        let messages: Vec<_> =
            parameters.values()
                .filter(|param| param.is_required())
                .filter(|param| {
                    !arg_ids.iter().any(|arg_id| {
                        doc.part(*arg_id).unwrap_argument().name() == param.name()
                    })
                })
                .map(|param| GraphQLMessage::critical(
                    &RuleReference::REQUIRED_ARGUMENTS,
                    format!(
                        "{owner_label} argument `{}` of type `{}` is required, but \
                        it was not provided",
                        param.name(),
                        param.type_annotation(),
                    ),
                    part.location().to_owned(),
                ))
                .collect();

        for message in messages {
            ctx.add_message(message);
        }
    }
}
