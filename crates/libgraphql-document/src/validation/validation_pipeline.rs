use crate::document::Document;
use crate::document::PartId;
use crate::messages::MessageCollection;
use crate::rules::RulePackageRegistry;
use crate::rules::ValidationStage;
use crate::schema::Schema;
use crate::validation::ValidationContext;
use std::collections::HashSet;

/// Walks a [`Document`]'s part tree and runs each part's validation package.
///
/// [`ValidationStage::BeforeChildren`] steps run as a part is entered,
/// [`ValidationStage::AfterChildren`] steps once all of its descendants have
/// been visited.
#[derive(Debug)]
pub struct ValidationPipeline<'reg> {
    registry: &'reg RulePackageRegistry,
}
impl<'reg> ValidationPipeline<'reg> {
    pub fn new(registry: &'reg RulePackageRegistry) -> Self {
        Self { registry }
    }

    /// `global_keys` backs [`ValidationContext::record_once()`]. Pass a fresh
    /// set for every document.
    pub fn run<'schema>(
        &self,
        schema: &'schema Schema,
        document: &mut Document<'schema>,
        global_keys: &mut HashSet<String>,
        messages: &mut MessageCollection,
    ) {
        let root = document.root();
        let mut ctx = ValidationContext::new(schema, document, global_keys, messages);
        self.visit(&mut ctx, root);
    }

    fn run_stage(
        &self,
        ctx: &mut ValidationContext<'_, '_>,
        stage: ValidationStage,
    ) {
        let kind = ctx.part().kind();
        for step in self.registry.validation_steps(kind) {
            if step.stage() != stage || !step.should_execute(ctx) {
                continue;
            }
            log::trace!(
                "validation step `{}` ({stage:?}) on {} part {}",
                step.name(),
                kind,
                ctx.current(),
            );
            step.execute(ctx);
        }
    }

    fn visit(&self, ctx: &mut ValidationContext<'_, '_>, part_id: PartId) {
        ctx.current = part_id;
        self.run_stage(ctx, ValidationStage::BeforeChildren);

        let child_count = ctx.part().children().len();
        for idx in 0..child_count {
            let child_id = ctx.document().part(part_id).children()[idx];
            self.visit(ctx, child_id);
        }

        ctx.current = part_id;
        self.run_stage(ctx, ValidationStage::AfterChildren);
    }
}
