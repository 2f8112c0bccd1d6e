//! A uniform, immutable syntax tree for executable documents.
//!
//! `graphql-parser` hands back a deeply-typed AST. The construction pipeline
//! instead wants every node to look alike so that it can look up rule
//! packages by a single [`SyntaxNodeTag`], so the AST is lowered into an
//! arena of [`SyntaxNode`]s first.

mod ast_lowering;
mod source_scanner;
mod syntax_node;
mod syntax_node_kind;
mod syntax_tree;

pub use syntax_node::SyntaxNode;
pub use syntax_node::SyntaxNodeId;
pub use syntax_node_kind::SyntaxNodeKind;
pub use syntax_node_kind::SyntaxNodeTag;
pub use syntax_tree::SyntaxTree;
