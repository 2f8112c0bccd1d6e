use crate::ast;
use crate::construction::ConstructionPipeline;
use crate::document::Document;
use crate::file_reader;
use crate::messages::MessageCollection;
use crate::rules::RulePackageRegistry;
use crate::schema::Schema;
use crate::syntax::SyntaxTree;
use crate::validation::ValidationPipeline;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentBuildError>;

/// The outcome of building one executable document: the document model plus
/// every message produced while building it.
///
/// The document is always returned, even when
/// [`messages`](BuiltDocument::messages) contains critical messages; parts
/// that could not be resolved against the schema carry `None` handles.
#[derive(Clone, Debug, PartialEq)]
pub struct BuiltDocument<'schema> {
    pub document: Document<'schema>,
    pub messages: MessageCollection,
}

/// Runs the construction and validation pipelines for executable documents
/// against a single [`Schema`].
///
/// A builder holds only shared references and can be used for any number of
/// documents, including from several threads at once.
#[derive(Clone, Copy, Debug)]
pub struct DocumentBuilder<'schema, 'reg> {
    registry: &'reg RulePackageRegistry,
    schema: &'schema Schema,
}
impl<'schema> DocumentBuilder<'schema, 'static> {
    /// A builder that uses the standard rule packages
    /// ([`RulePackageRegistry::shared()`]).
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            registry: RulePackageRegistry::shared(),
            schema,
        }
    }
}
impl<'schema, 'reg> DocumentBuilder<'schema, 'reg> {
    pub fn build(&self, syntax_tree: &SyntaxTree) -> BuiltDocument<'schema> {
        let mut document = Document::new();
        let mut messages = MessageCollection::new();

        ConstructionPipeline::new(self.registry).run(
            self.schema,
            syntax_tree,
            &mut document,
            &mut messages,
        );
        log::debug!(
            "Constructed {} document part(s) from {} syntax node(s)",
            document.parts().count(),
            syntax_tree.nodes().count(),
        );

        document.link_fragment_spreads();

        let mut global_keys = HashSet::new();
        ValidationPipeline::new(self.registry).run(
            self.schema,
            &mut document,
            &mut global_keys,
            &mut messages,
        );

        document.finalize();
        log::debug!(
            "Built document with {} operation(s), {} fragment(s), and {} message(s)",
            document.all_operations().len(),
            document.all_named_fragments().len(),
            messages.len(),
        );

        BuiltDocument {
            document,
            messages,
        }
    }

    pub fn build_from_ast(
        &self,
        ast_doc: &ast::operation::Document,
        source: &str,
        file_path: Option<&Path>,
    ) -> BuiltDocument<'schema> {
        self.build(&SyntaxTree::from_ast(ast_doc, source, file_path))
    }

    pub fn build_from_file(
        &self,
        file_path: impl AsRef<Path>,
    ) -> Result<BuiltDocument<'schema>> {
        let file_path = file_path.as_ref();
        let file_content = file_reader::read_content(file_path)
            .map_err(|err| DocumentBuildError::DocumentFileReadError(
                Box::new(err),
            ))?;
        self.build_from_str(file_content, Some(file_path))
    }

    /// Parses and builds `content`. Only a syntax error is reported as an
    /// `Err`; every other problem is a message in the returned
    /// [`BuiltDocument`].
    pub fn build_from_str(
        &self,
        content: impl AsRef<str>,
        file_path: Option<&Path>,
    ) -> Result<BuiltDocument<'schema>> {
        let syntax_tree = SyntaxTree::parse(content.as_ref(), file_path)?;
        Ok(self.build(&syntax_tree))
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }

    /// Use `registry` instead of the standard rule packages.
    pub fn with_registry<'r>(self, registry: &'r RulePackageRegistry) -> DocumentBuilder<'schema, 'r> {
        DocumentBuilder {
            registry,
            schema: self.schema,
        }
    }
}

#[derive(Debug, Error)]
pub enum DocumentBuildError {
    #[error("Failure while trying to read an executable document file from disk: {0}")]
    DocumentFileReadError(Box<file_reader::ReadContentError>),

    #[error("Error parsing executable document: {0}")]
    ParseError(Arc<ast::operation::ParseError>),
}
impl std::convert::From<ast::operation::ParseError> for DocumentBuildError {
    fn from(value: ast::operation::ParseError) -> Self {
        Self::ParseError(Arc::new(value))
    }
}
