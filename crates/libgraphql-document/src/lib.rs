//! Turns an executable GraphQL document into a validated, typed document
//! model that an execution engine can walk.
//!
//! Work happens in two passes over two different trees:
//!
//! 1. The [construction pipeline](construction::ConstructionPipeline) walks
//!    the [syntax tree](syntax::SyntaxTree) and appends
//!    [document parts](document::DocumentPart) to a [`document::Document`].
//! 2. The [validation pipeline](validation::ValidationPipeline) walks the
//!    finished part tree and checks the cross-cutting rules from
//!    [section 5 of the GraphQL spec](https://spec.graphql.org/October2021/#sec-Validation).
//!
//! Both passes look up their ordered rule steps in a shared, read-only
//! [`rules::RulePackageRegistry`]. Every user-facing problem becomes a
//! [`messages::GraphQLMessage`]; nothing in either pass fails for bad input.
//!
//! ```
//! use libgraphql_document::DocumentBuilder;
//! use libgraphql_document::schema::SchemaBuilder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = SchemaBuilder::new()
//!     .load_str(None, "type Query { hello(name: String): String }")?
//!     .build()?;
//!
//! let built = DocumentBuilder::new(&schema)
//!     .build_from_str(r#"{ hello(name: "world") }"#, None)?;
//!
//! assert!(built.messages.is_success());
//! assert_eq!(built.document.max_depth(), 1);
//! # Ok(())
//! # }
//! ```

pub mod ast;
pub mod construction;
pub mod document;
mod document_builder;
mod file_reader;
pub mod loc;
pub mod messages;
mod named_ref;
pub mod rules;
pub mod schema;
pub mod syntax;
pub mod types;
pub mod validation;

pub use document_builder::BuiltDocument;
pub use document_builder::DocumentBuildError;
pub use document_builder::DocumentBuilder;
pub use file_reader::ReadContentError;

#[cfg(test)]
mod test;
#[cfg(test)]
mod test_utils;
