use crate::document::PartData;
use crate::messages::GraphQLMessage;
use crate::rules::RuleReference;
use crate::rules::ValidationStep;
use crate::validation::ValidationContext;

/// Reports each duplicated argument name once per field or directive,
/// however many times it is repeated.
///
/// <https://spec.graphql.org/October2021/#sec-Argument-Uniqueness>
#[derive(Debug)]
pub struct ArgumentUniqueness;
impl ValidationStep for ArgumentUniqueness {
    fn name(&self) -> &'static str {
        "argument-uniqueness"
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let doc = ctx.document();
        let arg_part = ctx.part();
        let arg_name = arg_part.unwrap_argument().name();
        let Some(owner_id) = arg_part.parent() else {
            return;
        };
        let owner_part = doc.part(owner_id);
        let sibling_ids = match owner_part.data() {
            PartData::Directive(directive) => directive.arguments(),
            PartData::FieldSelection(field) => field.arguments(),
            _ => return,
        };

        let occurrences =
            sibling_ids.iter()
                .filter(|id| doc.part(**id).unwrap_argument().name() == arg_name)
                .count();
        if occurrences < 2 {
            return;
        }

        let key = format!("5.4.2|{}|{arg_name}", owner_part.path());
        let message = GraphQLMessage::critical(
            &RuleReference::ARGUMENT_UNIQUE,
            format!("There can be only one argument named `{arg_name}` (found {occurrences})"),
            arg_part.location().to_owned(),
        );
        ctx.report_once(key, message);
    }
}
