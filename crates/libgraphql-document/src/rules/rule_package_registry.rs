use crate::construction;
use crate::document::PartKind;
use crate::rules::ConstructionStep;
use crate::rules::ValidationStep;
use crate::syntax::SyntaxNodeTag;
use crate::validation;
use std::collections::HashMap;
use std::sync::LazyLock;

static SHARED_REGISTRY: LazyLock<RulePackageRegistry> =
    LazyLock::new(|| RulePackageRegistry::builder().build());

/// Ordered rule steps, keyed by what they apply to.
///
/// A registry is read-only once built and can be shared by any number of
/// concurrent document builds.
#[derive(Debug, Default)]
pub struct RulePackageRegistry {
    construction_packages: HashMap<SyntaxNodeTag, Vec<Box<dyn ConstructionStep>>>,
    validation_packages: HashMap<PartKind, Vec<Box<dyn ValidationStep>>>,
}
impl RulePackageRegistry {
    /// A [`RulePackageRegistryBuilder`] pre-populated with the standard rule
    /// packages.
    pub fn builder() -> RulePackageRegistryBuilder {
        RulePackageRegistryBuilder::standard()
    }

    /// The construction package for syntax nodes tagged `tag`. Empty if no
    /// steps were registered for it.
    pub fn construction_steps(&self, tag: SyntaxNodeTag) -> &[Box<dyn ConstructionStep>] {
        self.construction_packages.get(&tag)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The process-wide registry holding the standard rule packages. Built on
    /// first use.
    pub fn shared() -> &'static RulePackageRegistry {
        &SHARED_REGISTRY
    }

    /// The validation package for parts of kind `kind`. Empty if no steps
    /// were registered for it.
    pub fn validation_steps(&self, kind: PartKind) -> &[Box<dyn ValidationStep>] {
        self.validation_packages.get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Builds a custom [`RulePackageRegistry`], usually by starting from the
/// standard packages and adding or removing individual steps.
///
/// Added steps run after the steps already in their package.
#[derive(Debug, Default)]
pub struct RulePackageRegistryBuilder {
    registry: RulePackageRegistry,
}
impl RulePackageRegistryBuilder {
    pub fn add_construction_step(
        mut self,
        tag: SyntaxNodeTag,
        step: impl ConstructionStep + 'static,
    ) -> Self {
        self.registry.construction_packages
            .entry(tag)
            .or_default()
            .push(Box::new(step));
        self
    }

    pub fn add_validation_step(
        mut self,
        kind: PartKind,
        step: impl ValidationStep + 'static,
    ) -> Self {
        self.registry.validation_packages
            .entry(kind)
            .or_default()
            .push(Box::new(step));
        self
    }

    pub fn build(self) -> RulePackageRegistry {
        log::debug!(
            "Built rule package registry with {} construction and {} validation step(s)",
            self.registry.construction_packages.values().map(Vec::len).sum::<usize>(),
            self.registry.validation_packages.values().map(Vec::len).sum::<usize>(),
        );
        self.registry
    }

    /// A builder with no steps registered at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Removes every construction step named `name` from the package for
    /// `tag`.
    pub fn remove_construction_step(mut self, tag: SyntaxNodeTag, name: &str) -> Self {
        if let Some(steps) = self.registry.construction_packages.get_mut(&tag) {
            steps.retain(|step| step.name() != name);
        }
        self
    }

    /// Removes every validation step named `name` from the package for
    /// `kind`.
    pub fn remove_validation_step(mut self, kind: PartKind, name: &str) -> Self {
        if let Some(steps) = self.registry.validation_packages.get_mut(&kind) {
            steps.retain(|step| step.name() != name);
        }
        self
    }

    pub fn standard() -> Self {
        let mut registry = RulePackageRegistry::default();
        for (tag, steps) in construction::standard_packages() {
            registry.construction_packages.insert(tag, steps);
        }
        for (kind, steps) in validation::standard_packages() {
            registry.validation_packages.insert(kind, steps);
        }
        Self { registry }
    }
}
