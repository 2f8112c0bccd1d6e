use crate::document::PartKind;
use crate::messages::GraphQLMessage;
use crate::rules::RuleReference;
use crate::rules::ValidationStep;
use crate::validation::ValidationContext;

/// A non-repeatable directive may appear at most once on any one
/// operation, field, or fragment.
///
/// <https://spec.graphql.org/October2021/#sec-Directives-Are-Unique-Per-Location>
#[derive(Debug)]
pub struct DirectivesAreUniquePerLocation;
impl ValidationStep for DirectivesAreUniquePerLocation {
    fn name(&self) -> &'static str {
        "directives-are-unique-per-location"
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let doc = ctx.document();
        let directive_part = ctx.part();
        let directive = directive_part.unwrap_directive();
        if directive.definition().is_none_or(|def| def.is_repeatable()) {
            return;
        }
        let Some(owner_id) = directive_part.parent() else {
            return;
        };
        let owner_part = doc.part(owner_id);

        let occurrences =
            owner_part.children().iter()
                .map(|id| doc.part(*id))
                .filter(|part| part.kind() == PartKind::Directive)
                .filter(|part| part.unwrap_directive().name() == directive.name())
                .count();
        if occurrences < 2 {
            return;
        }

        let key = format!("5.7.3|{}|{}", owner_part.path(), directive.name());
        let message = GraphQLMessage::critical(
            &RuleReference::DIRECTIVE_UNIQUE,
            format!(
                "The directive `@{}` can only be used once at this location",
                directive.name(),
            ),
            directive_part.location().to_owned(),
        );
        ctx.report_once(key, message);
    }
}
