//! Rule steps and the registry that groups them into packages.

mod construction_step;
mod rule_package_registry;
mod rule_reference;
mod validation_step;

pub use construction_step::ConstructionStep;
pub use rule_package_registry::RulePackageRegistry;
pub use rule_package_registry::RulePackageRegistryBuilder;
pub use rule_reference::RuleReference;
pub use validation_step::ValidationStage;
pub use validation_step::ValidationStep;

#[cfg(test)]
mod tests;
