use crate::document::Document;
use crate::document::InputValueKind;
use crate::document::PartData;
use crate::document::PartId;
use crate::messages::GraphQLMessage;
use crate::rules::RuleReference;
use crate::rules::ValidationStep;
use crate::schema::Schema;
use crate::validation::steps::variable_usages::operation_variable_usages;
use crate::validation::ValidationContext;

fn operation_label(doc: &Document<'_>, op_id: PartId) -> String {
    let op = doc.part(op_id).unwrap_operation();
    match op.name() {
        Some(name) => format!("operation `{name}`"),
        None => format!("the anonymous {}", op.kind()),
    }
}

/// Marks every declared variable that the operation references (directly or
/// through fragments) as used, and points each reference written directly
/// in the operation back at its variable.
///
/// Registered ahead of the other operation steps so that the flags are set
/// before any [`Variable`](crate::document::Variable) part is validated.
#[derive(Debug)]
pub struct CollectVariableUsages;
impl ValidationStep for CollectVariableUsages {
    fn name(&self) -> &'static str {
        "collect-variable-usages"
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let op_id = ctx.current();
        let usages = operation_variable_usages(ctx.document(), op_id);
        let variables = ctx.part().unwrap_operation().variables().to_owned();

        let doc = ctx.document_mut();
        for usage in usages {
            let Some(var_id) = variables.get(usage.name.as_str()).copied() else {
                continue;
            };
            doc.part_mut(var_id).unwrap_variable_mut().is_used = true;
            if usage.lexical {
                let value = doc.part_mut(usage.value_id).unwrap_input_value_mut();
                if let InputValueKind::VariableReference { variable, .. } = &mut value.kind {
                    *variable = Some(var_id);
                }
            }
        }
    }
}

/// <https://spec.graphql.org/October2021/#sec-All-Variable-Uses-Defined>
#[derive(Debug)]
pub struct AllVariableUsesDefined;
impl ValidationStep for AllVariableUsesDefined {
    fn name(&self) -> &'static str {
        "all-variable-uses-defined"
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let doc = ctx.document();
        let op_id = ctx.current();
        let op_part = doc.part(op_id);
        let variables = op_part.unwrap_operation().variables();

        let messages: Vec<_> =
            operation_variable_usages(doc, op_id).into_iter()
                .filter(|usage| !variables.contains_key(usage.name.as_str()))
                .map(|usage| (
                    format!("5.8.3|{}|{}", op_part.path(), usage.name),
                    GraphQLMessage::critical(
                        &RuleReference::VARIABLE_DECLARED,
                        format!(
                            "Variable `${}` is not defined by {}",
                            usage.name,
                            operation_label(doc, op_id),
                        ),
                        doc.part(usage.value_id).location().to_owned(),
                    ),
                ))
                .collect();

        for (key, message) in messages {
            ctx.report_once(key, message);
        }
    }
}

/// <https://spec.graphql.org/October2021/#sec-All-Variable-Usages-are-Allowed>
#[derive(Debug)]
pub struct AllVariableUsagesAllowed;
impl AllVariableUsagesAllowed {
    /// Whether the argument or input object field that `value_id` is passed
    /// to declares a default value.
    fn location_has_default(schema: &Schema, doc: &Document<'_>, value_id: PartId) -> bool {
        let Some(parent_id) = doc.part(value_id).parent() else {
            return false;
        };
        match doc.part(parent_id).data() {
            PartData::Argument(arg) =>
                arg.parameter().is_some_and(|param| param.has_default_value()),

            PartData::InputValue(parent_value) => {
                let InputValueKind::Complex(fields) = parent_value.kind() else {
                    return false;
                };
                let Some((field_name, _)) =
                    fields.iter().find(|(_, field_id)| **field_id == value_id)
                else {
                    return false;
                };
                parent_value.expected_type()
                    .and_then(|annot| annot.as_named_annotation())
                    .and_then(|named| named.graphql_type(schema))
                    .and_then(|type_| type_.as_input_object())
                    .and_then(|input_obj| input_obj.fields().get(field_name))
                    .is_some_and(|param| param.has_default_value())
            },

            _ => false,
        }
    }
}
impl ValidationStep for AllVariableUsagesAllowed {
    fn name(&self) -> &'static str {
        "all-variable-usages-allowed"
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let doc = ctx.document();
        let schema = ctx.schema();
        let op_id = ctx.current();
        let op_part = doc.part(op_id);
        let variables = op_part.unwrap_operation().variables();

        let mut messages = vec![];
        for usage in operation_variable_usages(doc, op_id) {
            let Some(var_id) = variables.get(usage.name.as_str()) else {
                continue;
            };
            let value_part = doc.part(usage.value_id);
            let Some(location_type) = value_part.unwrap_input_value().expected_type() else {
                continue;
            };
            let variable = doc.part(*var_id).unwrap_variable();
            let variable_type = variable.type_annotation();

            let mut effective_location_type = location_type.to_owned();
            if !location_type.nullable() && variable_type.nullable() {
                let has_non_null_default =
                    variable.default_value()
                        .is_some_and(|default_id| {
                            !matches!(doc.part(default_id).unwrap_input_value().kind(), InputValueKind::Null)
                        });
                if !has_non_null_default
                    && !Self::location_has_default(schema, doc, usage.value_id) {
                    messages.push((usage, location_type.to_string()));
                    continue;
                }
                effective_location_type = location_type.with_nullable(true);
            }

            if !variable_type.is_compatible_with_usage(&effective_location_type) {
                messages.push((usage, location_type.to_string()));
            }
        }

        let messages: Vec<_> =
            messages.into_iter()
                .map(|(usage, location_type)| {
                    let value_part = doc.part(usage.value_id);
                    let var_type = doc.part(variables[usage.name.as_str()])
                        .unwrap_variable()
                        .type_annotation()
                        .to_string();
                    (
                        format!("5.8.5|{}|{}", op_part.path(), value_part.path()),
                        GraphQLMessage::critical(
                            &RuleReference::VARIABLE_TYPE_COMPATIBLE,
                            format!(
                                "Variable `${}` of type `{var_type}` cannot be used \
                                where `{location_type}` is expected",
                                usage.name,
                            ),
                            value_part.location().to_owned(),
                        ),
                    )
                })
                .collect();

        for (key, message) in messages {
            ctx.report_once(key, message);
        }
    }
}

/// Only the first declaration of each name is checked; later duplicates are
/// reported by [`VariableUniqueness`](crate::construction::steps::VariableUniqueness).
///
/// <https://spec.graphql.org/October2021/#sec-All-Variables-Used>
#[derive(Debug)]
pub struct AllVariablesUsed;
impl ValidationStep for AllVariablesUsed {
    fn name(&self) -> &'static str {
        "all-variables-used"
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let var_part = ctx.part();
        let var = var_part.unwrap_variable();
        if var.is_used() {
            return;
        }
        let Some(op_id) = var_part.parent() else {
            return;
        };
        let doc = ctx.document();
        if doc.part(op_id).as_operation()
            .and_then(|op| op.variables().get(var.name()))
            != Some(&var_part.id()) {
            return;
        }

        let message = GraphQLMessage::critical(
            &RuleReference::VARIABLE_USED,
            format!(
                "Variable `${}` is never used in {}",
                var.name(),
                operation_label(doc, op_id),
            ),
            var_part.location().to_owned(),
        );
        ctx.add_message(message);
    }
}
