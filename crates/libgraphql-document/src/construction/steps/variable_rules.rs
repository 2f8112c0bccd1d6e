use crate::construction::ConstructionContext;
use crate::document::PartKind;
use crate::messages::GraphQLMessage;
use crate::rules::ConstructionStep;
use crate::rules::RuleReference;

/// <https://spec.graphql.org/October2021/#sec-Variable-Uniqueness>
#[derive(Debug)]
pub struct VariableUniqueness;
impl ConstructionStep for VariableUniqueness {
    fn name(&self) -> &'static str {
        "variable-uniqueness"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let var_id = ctx.active_part();
        let Some(op_id) = ctx.find_ancestor_part(PartKind::Operation) else {
            return false;
        };
        let var_name = ctx.document().part(var_id).unwrap_variable().name().to_string();
        let first_decl =
            ctx.document().part(op_id).unwrap_operation()
                .variables()
                .get(var_name.as_str())
                .copied();
        if first_decl == Some(var_id) {
            return false;
        }

        ctx.add_message(GraphQLMessage::critical(
            &RuleReference::VARIABLE_UNIQUE,
            format!("There can be only one variable named `${var_name}`"),
            ctx.location(),
        ));
        true
    }
}

/// <https://spec.graphql.org/October2021/#sec-Variables-Are-Input-Types>
#[derive(Debug)]
pub struct VariablesAreInputTypes;
impl ConstructionStep for VariablesAreInputTypes {
    fn name(&self) -> &'static str {
        "variables-are-input-types"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let var = ctx.document().part(ctx.active_part()).unwrap_variable();
        let type_name = var.type_annotation().innermost_type_name();
        let message = match ctx.schema().lookup_type(type_name) {
            Some(type_) if type_.is_input_type() => return false,
            Some(type_) => format!(
                "Variable `${}` cannot be of non-input type `{}` (kind {})",
                var.name(),
                var.type_annotation(),
                type_.type_kind(),
            ),
            None => format!(
                "Variable `${}` is declared with unknown type `{type_name}`",
                var.name(),
            ),
        };

        ctx.add_message(GraphQLMessage::critical(
            &RuleReference::VARIABLE_INPUT_TYPE,
            message,
            ctx.location(),
        ));
        true
    }
}
