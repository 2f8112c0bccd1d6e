use crate::construction::ConstructionContext;
use crate::messages::GraphQLMessage;
use crate::rules::ConstructionStep;
use crate::rules::RuleReference;
use crate::syntax::SyntaxNodeKind;

/// Executable documents may only contain operations and fragments.
///
/// <https://spec.graphql.org/October2021/#sec-Executable-Definitions>
#[derive(Debug)]
pub struct ExecutableDefinitions;
impl ConstructionStep for ExecutableDefinitions {
    fn name(&self) -> &'static str {
        "executable-definitions"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let SyntaxNodeKind::TypeSystemDefinition { description } = ctx.node_kind() else {
            return false;
        };
        ctx.add_message(GraphQLMessage::critical(
            &RuleReference::TOP_LEVEL_DEFINITIONS,
            format!(
                "`{description}` is a type-system definition, but executable \
                documents may only contain operations and fragments",
            ),
            ctx.location(),
        ));
        true
    }

    fn should_allow_children(&self, _ctx: &ConstructionContext<'_, '_>) -> bool {
        false
    }
}

/// The schema must define a root type for the kind of each operation.
#[derive(Debug)]
pub struct OperationTypeExists;
impl OperationTypeExists {
    fn has_root_type(ctx: &ConstructionContext<'_, '_>) -> bool {
        match ctx.node_kind() {
            SyntaxNodeKind::Operation { kind, .. } =>
                ctx.schema().root_operation_type(*kind).is_some(),
            _ => true,
        }
    }
}
impl ConstructionStep for OperationTypeExists {
    fn name(&self) -> &'static str {
        "operation-type-exists"
    }

    fn should_execute(&self, ctx: &ConstructionContext<'_, '_>) -> bool {
        !Self::has_root_type(ctx)
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let SyntaxNodeKind::Operation { kind, name } = ctx.node_kind() else {
            return false;
        };
        let op_label = match name {
            Some(name) => format!("{kind} `{name}`"),
            None => format!("anonymous {kind}"),
        };
        ctx.add_message(GraphQLMessage::critical(
            &RuleReference::OPERATION_TYPE_EXISTS,
            format!("The schema does not define a {kind} root type, so {op_label} cannot be executed"),
            ctx.location(),
        ));
        true
    }

    fn should_allow_children(&self, ctx: &ConstructionContext<'_, '_>) -> bool {
        Self::has_root_type(ctx)
    }
}
