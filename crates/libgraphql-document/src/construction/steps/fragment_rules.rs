use crate::construction::ConstructionContext;
use crate::messages::GraphQLMessage;
use crate::rules::ConstructionStep;
use crate::rules::RuleReference;
use crate::syntax::SyntaxNodeKind;

fn type_condition<'run>(kind: &'run SyntaxNodeKind) -> Option<&'run str> {
    match kind {
        SyntaxNodeKind::FragmentDefinition { type_condition, .. } =>
            Some(type_condition.as_str()),
        SyntaxNodeKind::InlineFragment { type_condition } =>
            type_condition.as_deref(),
        _ => None,
    }
}

/// The type condition of a named or inline fragment must name a type
/// defined in the schema.
///
/// <https://spec.graphql.org/October2021/#sec-Fragment-Spread-Type-Existence>
#[derive(Debug)]
pub struct FragmentTypeExists;
impl ConstructionStep for FragmentTypeExists {
    fn name(&self) -> &'static str {
        "fragment-type-exists"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let Some(type_name) = type_condition(ctx.node_kind()) else {
            return false;
        };
        if ctx.schema().lookup_type(type_name).is_some() {
            return false;
        }

        ctx.add_message(GraphQLMessage::critical(
            &RuleReference::FRAGMENT_TYPE_EXISTS,
            format!("Fragment type condition names unknown type `{type_name}`"),
            ctx.location(),
        ));
        true
    }
}

/// <https://spec.graphql.org/October2021/#sec-Fragments-On-Composite-Types>
#[derive(Debug)]
pub struct FragmentOnCompositeType;
impl ConstructionStep for FragmentOnCompositeType {
    fn name(&self) -> &'static str {
        "fragment-on-composite-type"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let Some(type_name) = type_condition(ctx.node_kind()) else {
            return false;
        };
        let Some(type_) = ctx.schema().lookup_type(type_name) else {
            return false;
        };
        if type_.is_composite_type() {
            return false;
        }

        ctx.add_message(GraphQLMessage::critical(
            &RuleReference::FRAGMENT_ON_COMPOSITE_TYPE,
            format!(
                "Fragments can only be declared on object, interface, or union \
                types, but `{type_name}` has kind {}",
                type_.type_kind(),
            ),
            ctx.location(),
        ));
        true
    }
}
