use crate::construction::ConstructionContext;
use crate::messages::GraphQLMessage;
use crate::rules::ConstructionStep;
use crate::rules::RuleReference;

/// <https://spec.graphql.org/October2021/#sec-Directives-Are-Defined>
#[derive(Debug)]
pub struct DirectivesAreDefined;
impl ConstructionStep for DirectivesAreDefined {
    fn name(&self) -> &'static str {
        "directives-are-defined"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let directive = ctx.document().part(ctx.active_part()).unwrap_directive();
        if directive.definition().is_some() {
            return false;
        }

        let message = format!("Unknown directive `@{}`", directive.name());
        ctx.add_message(GraphQLMessage::critical(
            &RuleReference::DIRECTIVE_DEFINED,
            message,
            ctx.location(),
        ));
        true
    }
}

/// <https://spec.graphql.org/October2021/#sec-Directives-Are-In-Valid-Locations>
#[derive(Debug)]
pub struct DirectivesAreInValidLocations;
impl ConstructionStep for DirectivesAreInValidLocations {
    fn name(&self) -> &'static str {
        "directives-are-in-valid-locations"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let directive = ctx.document().part(ctx.active_part()).unwrap_directive();
        let Some(definition) = directive.definition() else {
            return false;
        };
        if definition.locations().contains(&directive.location()) {
            return false;
        }

        let message = format!(
            "Directive `@{}` may not be used on {}",
            directive.name(),
            directive.location(),
        );
        ctx.add_message(GraphQLMessage::critical(
            &RuleReference::DIRECTIVE_LOCATION,
            message,
            ctx.location(),
        ));
        true
    }
}
