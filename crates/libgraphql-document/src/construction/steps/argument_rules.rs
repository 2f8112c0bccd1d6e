use crate::construction::ConstructionContext;
use crate::document::PartData;
use crate::messages::GraphQLMessage;
use crate::rules::ConstructionStep;
use crate::rules::RuleReference;

/// Every argument must be defined by the field or directive it is passed
/// to. Arguments passed to an unresolved field or directive are not
/// reported here.
///
/// <https://spec.graphql.org/October2021/#sec-Argument-Names>
#[derive(Debug)]
pub struct ArgumentNames;
impl ConstructionStep for ArgumentNames {
    fn name(&self) -> &'static str {
        "argument-names"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let doc = ctx.document();
        let arg_part = doc.part(ctx.active_part());
        let arg = arg_part.unwrap_argument();
        if arg.parameter().is_some() {
            return false;
        }
        let Some(owner_id) = arg_part.parent() else {
            return false;
        };

        let message = match doc.part(owner_id).data() {
            PartData::FieldSelection(field_selection) => {
                let Some(field) = field_selection.field() else {
                    return false;
                };
                format!(
                    "Unknown argument `{}` on field `{}.{}`",
                    arg.name(),
                    field_selection.owner_type_name().unwrap_or_default(),
                    field.name(),
                )
            },

            PartData::Directive(directive) => {
                if directive.definition().is_none() {
                    return false;
                }
                format!(
                    "Unknown argument `{}` on directive `@{}`",
                    arg.name(),
                    directive.name(),
                )
            },

            _ => return false,
        };

        ctx.add_message(GraphQLMessage::critical(
            &RuleReference::ARGUMENT_DEFINED,
            message,
            ctx.location(),
        ));
        true
    }
}
