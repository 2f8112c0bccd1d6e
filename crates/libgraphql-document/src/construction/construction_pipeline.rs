use crate::construction::ConstructionContext;
use crate::document::Document;
use crate::messages::MessageCollection;
use crate::rules::RulePackageRegistry;
use crate::schema::Schema;
use crate::syntax::SyntaxNodeId;
use crate::syntax::SyntaxTree;

/// Walks a [`SyntaxTree`] depth-first (pre-order) and runs each node's
/// construction package against a shared [`ConstructionContext`].
#[derive(Debug)]
pub struct ConstructionPipeline<'reg> {
    registry: &'reg RulePackageRegistry,
}
impl<'reg> ConstructionPipeline<'reg> {
    pub fn new(registry: &'reg RulePackageRegistry) -> Self {
        Self { registry }
    }

    pub fn run<'schema>(
        &self,
        schema: &'schema Schema,
        syntax_tree: &SyntaxTree,
        document: &mut Document<'schema>,
        messages: &mut MessageCollection,
    ) {
        let mut ctx = ConstructionContext::new(schema, syntax_tree, document, messages);
        self.visit(&mut ctx, syntax_tree, syntax_tree.root());
    }

    fn visit(
        &self,
        ctx: &mut ConstructionContext<'_, '_>,
        syntax_tree: &SyntaxTree,
        node_id: SyntaxNodeId,
    ) {
        let saved_part = ctx.active_part;
        let saved_selection_set = ctx.active_selection_set;
        ctx.active_node = node_id;

        let node = syntax_tree.node(node_id);
        let steps = self.registry.construction_steps(node.tag());
        for step in steps {
            if step.should_execute(ctx) {
                let changed = step.execute(ctx);
                log::trace!(
                    "construction step `{}` on {:?} node {}: {}",
                    step.name(),
                    node.tag(),
                    node_id.index(),
                    if changed { "applied" } else { "no-op" },
                );
            }
        }

        // Every step is asked, even after one has already vetoed.
        let allow_children = steps.iter().fold(true, |allow, step| {
            step.should_allow_children(ctx) && allow
        });

        if allow_children {
            for child_id in node.children() {
                self.visit(ctx, syntax_tree, *child_id);
            }
        } else {
            log::debug!(
                "Skipping {} child node(s) of {:?} node {}",
                node.children().len(),
                node.tag(),
                node_id.index(),
            );
        }

        ctx.active_node = node_id;
        ctx.active_part = saved_part;
        ctx.active_selection_set = saved_selection_set;
    }
}
