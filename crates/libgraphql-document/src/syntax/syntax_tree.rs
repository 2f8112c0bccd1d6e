use crate::ast;
use crate::loc;
use crate::syntax::ast_lowering::AstLowering;
use crate::syntax::source_scanner;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxNodeId;
use crate::syntax::SyntaxNodeKind;
use smallvec::SmallVec;
use std::ops::Range;
use std::path::Path;

/// An arena of [`SyntaxNode`]s rooted at a single
/// [`SyntaxNodeKind::Document`] node.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
}
impl SyntaxTree {
    /// Appends a node beneath `parent`. Children are visited in the order
    /// they are added.
    pub fn add_node(
        &mut self,
        parent: SyntaxNodeId,
        kind: SyntaxNodeKind,
        location: loc::SourceLocation,
    ) -> SyntaxNodeId {
        let id = SyntaxNodeId(self.nodes.len());
        self.nodes[parent.0].children.push(id);
        self.nodes.push(SyntaxNode {
            children: SmallVec::new(),
            id,
            kind,
            location,
            parent: Some(parent),
        });
        id
    }

    /// Lowers an already-parsed executable document. `source` must be the
    /// text `ast_doc` was parsed from; it is used to compute byte offsets.
    pub fn from_ast(
        ast_doc: &ast::operation::Document,
        source: &str,
        file_path: Option<&Path>,
    ) -> Self {
        let line_index = loc::LineIndex::new(source);
        let mut lowering = AstLowering::new(file_path, &line_index);
        for def in &ast_doc.definitions {
            lowering.lower_definition(def);
        }
        lowering.into_tree()
    }

    pub fn new() -> Self {
        Self {
            nodes: vec![SyntaxNode {
                children: SmallVec::new(),
                id: SyntaxNodeId(0),
                kind: SyntaxNodeKind::Document,
                location: loc::SourceLocation::Unknown,
                parent: None,
            }],
        }
    }

    pub fn node(&self, id: SyntaxNodeId) -> &SyntaxNode {
        &self.nodes[id.0]
    }

    pub fn nodes(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.nodes.iter()
    }

    /// Parses `content` as an executable document.
    ///
    /// A document that also contains type-system definitions does not parse
    /// as an executable document, but is still lowered: it is split into its
    /// top-level definitions, executable ones are lowered as usual, and each
    /// type-system definition becomes a
    /// [`SyntaxNodeKind::TypeSystemDefinition`] node so that it can be
    /// reported as misplaced rather than as a syntax error.
    pub fn parse(
        content: &str,
        file_path: Option<&Path>,
    ) -> Result<Self, ast::operation::ParseError> {
        let query_err = match ast::operation::parse(content) {
            Ok(ast_doc) => return Ok(Self::from_ast(&ast_doc, content, file_path)),
            Err(query_err) => query_err,
        };

        let line_index = loc::LineIndex::new(content);
        let mut lowering = AstLowering::new(file_path, &line_index);
        let mut num_type_system_defs = 0;
        for range in source_scanner::split_definitions(content) {
            let segment = Self::positioned_segment(content, &line_index, range);
            if let Ok(ast_doc) = ast::operation::parse(&segment) {
                for def in &ast_doc.definitions {
                    lowering.lower_definition(def);
                }
            } else if let Ok(schema_doc) = ast::schema::parse(&segment) {
                num_type_system_defs += schema_doc.definitions.len();
                for def in &schema_doc.definitions {
                    lowering.lower_type_system_definition(def);
                }
            } else {
                return Err(query_err);
            }
        }

        // Only executable definitions: keep the whole-document parse error.
        if num_type_system_defs == 0 {
            return Err(query_err);
        }
        log::debug!(
            "Document contains {num_type_system_defs} type-system definition(s); \
            lowered them for reporting",
        );
        Ok(lowering.into_tree())
    }

    /// `content[range]`, padded so that it parses at the same line and
    /// column it has within `content`.
    fn positioned_segment(
        content: &str,
        line_index: &loc::LineIndex<'_>,
        range: Range<usize>,
    ) -> String {
        let pos = line_index.pos(range.start);
        let line_start = content[..range.start].rfind('\n').map_or(0, |idx| idx + 1);

        let mut segment = "\n".repeat(pos.line.saturating_sub(1));
        segment.extend(
            content[line_start..range.start].chars()
                .map(|ch| if ch == '\t' { '\t' } else { ' ' }),
        );
        segment.push_str(&content[range]);
        segment
    }

    pub fn root(&self) -> SyntaxNodeId {
        SyntaxNodeId(0)
    }
}
impl std::default::Default for SyntaxTree {
    fn default() -> Self {
        Self::new()
    }
}
