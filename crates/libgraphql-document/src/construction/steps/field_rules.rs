use crate::construction::ConstructionContext;
use crate::messages::GraphQLMessage;
use crate::rules::ConstructionStep;
use crate::rules::RuleReference;
use crate::syntax::SyntaxNodeTag;

/// A field selection must name a field defined on the type it is selected
/// from. Selections made against an unknown type are not reported here.
///
/// <https://spec.graphql.org/October2021/#sec-Field-Selections>
#[derive(Debug)]
pub struct FieldSelectionsOnTypes;
impl ConstructionStep for FieldSelectionsOnTypes {
    fn name(&self) -> &'static str {
        "field-selections-on-types"
    }

    fn should_execute(&self, ctx: &ConstructionContext<'_, '_>) -> bool {
        let field = ctx.document().part(ctx.active_part()).unwrap_field_selection();
        field.field().is_none() && field.owner_type_name().is_some()
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let field = ctx.document().part(ctx.active_part()).unwrap_field_selection();
        let message = format!(
            "Cannot query field `{}` on type `{}`",
            field.name(),
            field.owner_type_name().unwrap_or_default(),
        );
        ctx.add_message(GraphQLMessage::critical(
            &RuleReference::FIELD_SELECTIONS_ON_TYPES,
            message,
            ctx.location(),
        ));
        true
    }
}

/// Leaf-typed fields must not have a selection set; composite-typed fields
/// must.
///
/// <https://spec.graphql.org/October2021/#sec-Leaf-Field-Selections>
#[derive(Debug)]
pub struct LeafFieldSelections;
impl ConstructionStep for LeafFieldSelections {
    fn name(&self) -> &'static str {
        "leaf-field-selections"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let field_selection = ctx.document().part(ctx.active_part()).unwrap_field_selection();
        let Some(field) = field_selection.field() else {
            return false;
        };
        let Some(field_type) = field.type_annotation().innermost_type(ctx.schema()) else {
            return false;
        };
        let has_selection_set =
            ctx.syntax_children()
                .any(|child| child.tag() == SyntaxNodeTag::SelectionSet);

        let message =
            if field_type.is_leaf_type() && has_selection_set {
                format!(
                    "Field `{}` of type `{}` is a leaf and must not have a selection set",
                    field_selection.name(),
                    field.type_annotation(),
                )
            } else if field_type.is_composite_type() && !has_selection_set {
                format!(
                    "Field `{}` of type `{}` must have a selection of subfields",
                    field_selection.name(),
                    field.type_annotation(),
                )
            } else {
                return false;
            };

        ctx.add_message(GraphQLMessage::critical(
            &RuleReference::LEAF_FIELD_SELECTIONS,
            message,
            ctx.location(),
        ));
        true
    }
}
