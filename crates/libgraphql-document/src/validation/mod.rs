//! The second pass: checking rules that span more than one part.

pub mod steps;
mod validation_context;
mod validation_pipeline;

pub(crate) use steps::standard_packages;
pub use validation_context::ValidationContext;
pub use validation_pipeline::ValidationPipeline;

#[cfg(test)]
mod tests;
