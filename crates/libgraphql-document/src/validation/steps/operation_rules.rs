use crate::document::OperationKind;
use crate::messages::GraphQLMessage;
use crate::rules::RuleReference;
use crate::rules::ValidationStep;
use crate::validation::ValidationContext;
use indexmap::IndexSet;

/// <https://spec.graphql.org/October2021/#sec-Operation-Name-Uniqueness>
#[derive(Debug)]
pub struct OperationNameUniqueness;
impl ValidationStep for OperationNameUniqueness {
    fn name(&self) -> &'static str {
        "operation-name-uniqueness"
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let doc = ctx.document();
        let duplicates: Vec<_> =
            doc.all_operations().iter()
                .filter_map(|op_id| {
                    let op_part = doc.part(*op_id);
                    let name = op_part.unwrap_operation().name()?;
                    let first_id = doc.operations().get(name)?;
                    (first_id != op_id).then(|| (
                        op_part.path().to_string(),
                        GraphQLMessage::critical(
                            &RuleReference::OPERATION_NAME_UNIQUENESS,
                            format!("There can be only one operation named `{name}`"),
                            op_part.location().to_owned(),
                        ),
                    ))
                })
                .collect();

        for (op_path, message) in duplicates {
            ctx.report_once(format!("5.2.1.1|{op_path}|"), message);
        }
    }
}

/// An anonymous operation must be the only operation in its document.
///
/// <https://spec.graphql.org/October2021/#sec-Lone-Anonymous-Operation>
#[derive(Debug)]
pub struct LoneAnonymousOperation;
impl ValidationStep for LoneAnonymousOperation {
    fn name(&self) -> &'static str {
        "lone-anonymous-operation"
    }

    fn should_execute(&self, ctx: &ValidationContext<'_, '_>) -> bool {
        ctx.document().all_operations().len() > 1
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let doc = ctx.document();
        let op_count = doc.all_operations().len();
        let messages: Vec<_> =
            doc.all_operations().iter()
                .map(|op_id| doc.part(*op_id))
                .filter(|op_part| op_part.unwrap_operation().name().is_none())
                .map(|op_part| (
                    op_part.path().to_string(),
                    GraphQLMessage::critical(
                        &RuleReference::LONE_ANONYMOUS_OPERATION,
                        format!(
                            "This anonymous operation must be the only operation \
                            in the document, but the document defines {op_count}",
                        ),
                        op_part.location().to_owned(),
                    ),
                ))
                .collect();

        for (op_path, message) in messages {
            ctx.report_once(format!("5.2.2.1|{op_path}|"), message);
        }
    }
}

/// A subscription must select exactly one root field, and that field must
/// not be an introspection field.
///
/// <https://spec.graphql.org/October2021/#sec-Single-root-field>
#[derive(Debug)]
pub struct SubscriptionSingleRootField;
impl ValidationStep for SubscriptionSingleRootField {
    fn name(&self) -> &'static str {
        "subscription-single-root-field"
    }

    fn should_execute(&self, ctx: &ValidationContext<'_, '_>) -> bool {
        ctx.part().unwrap_operation().kind() == OperationKind::Subscription
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let doc = ctx.document();
        let op_part = ctx.part();
        let op = op_part.unwrap_operation();
        let Some(set_id) = op.selection_set() else {
            return;
        };
        let op_label = op.name().unwrap_or("(anonymous)").to_string();

        let response_names: IndexSet<&str> =
            doc.executable_fields(set_id).iter()
                .map(|field_id| doc.part(*field_id).unwrap_field_selection().response_name())
                .collect();
        let introspection_field =
            doc.executable_fields(set_id).iter()
                .map(|field_id| doc.part(*field_id).unwrap_field_selection().name())
                .find(|name| name.starts_with("__"));

        let message =
            if response_names.len() != 1 {
                format!(
                    "Subscription `{op_label}` must select exactly one root field, \
                    but selects {}",
                    response_names.len(),
                )
            } else if let Some(field_name) = introspection_field {
                format!(
                    "Subscription `{op_label}` must not select the introspection \
                    field `{field_name}` as its root field",
                )
            } else {
                return;
            };

        let message = GraphQLMessage::critical(
            &RuleReference::SUBSCRIPTION_SINGLE_ROOT_FIELD,
            message,
            op_part.location().to_owned(),
        );
        ctx.add_message(message);
    }
}
