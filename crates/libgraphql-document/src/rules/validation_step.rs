use crate::validation::ValidationContext;

/// When a [`ValidationStep`] runs relative to the children of the part it is
/// registered against.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValidationStage {
    /// Before any child part is visited.
    BeforeChildren,

    /// After every descendant part has been visited.
    AfterChildren,
}

/// One step of a validation rule package.
pub trait ValidationStep: std::fmt::Debug + Send + Sync {
    /// A short, stable, kebab-case name. Used for logging and for removing
    /// steps from a registry.
    fn name(&self) -> &'static str;

    fn stage(&self) -> ValidationStage {
        ValidationStage::BeforeChildren
    }

    fn should_execute(&self, _ctx: &ValidationContext<'_, '_>) -> bool {
        true
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>);
}
