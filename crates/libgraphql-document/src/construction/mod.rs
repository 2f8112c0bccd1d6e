//! The first pass: turning syntax nodes into document parts.

mod construction_context;
mod construction_pipeline;
pub mod steps;

pub use construction_context::ConstructionContext;
pub use construction_pipeline::ConstructionPipeline;
pub(crate) use steps::standard_packages;

#[cfg(test)]
mod tests;
