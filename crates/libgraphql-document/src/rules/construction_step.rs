use crate::construction::ConstructionContext;

/// One step of a construction rule package.
///
/// Steps are stateless and shared between every run (and every thread)
/// that uses the [`RulePackageRegistry`](crate::rules::RulePackageRegistry)
/// they are registered in. Anything a step needs to remember must be
/// written into the document or the message collection.
pub trait ConstructionStep: std::fmt::Debug + Send + Sync {
    /// A short, stable, kebab-case name. Used for logging and for removing
    /// steps from a registry.
    fn name(&self) -> &'static str;

    fn should_execute(&self, _ctx: &ConstructionContext<'_, '_>) -> bool {
        true
    }

    /// Returns whether the step did anything. The result is only logged;
    /// it never stops the remaining steps from running.
    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool;

    /// Evaluated for every step once all of a node's steps have run. If any
    /// step returns `false`, none of the node's children are visited.
    fn should_allow_children(&self, _ctx: &ConstructionContext<'_, '_>) -> bool {
        true
    }
}
