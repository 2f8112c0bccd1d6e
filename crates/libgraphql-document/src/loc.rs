use crate::ast;
use std::path::Path;
use std::path::PathBuf;

/// A position within a GraphQL source text.
///
/// Similar to [`graphql_parser::Pos`], but also carries the byte offset of
/// the position and (optionally) the file the source was loaded from.
#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct FilePosition {
    pub byte_offset: usize,
    pub col: usize,
    pub file: Option<Box<PathBuf>>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(
        file: Option<&Path>,
        pos: &ast::AstPos,
        line_index: &LineIndex<'_>,
    ) -> Self {
        Self {
            byte_offset: line_index.byte_offset(pos),
            col: pos.column,
            file: file.map(|f| Box::new(f.to_path_buf())),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "{}:{}", self.line, self.col),
        }
    }
}

/// Where some syntax, type, or document part came from.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum SourceLocation {
    /// Defined implicitly by GraphQL itself (built-in scalars, `@skip`,
    /// `__typename`, ...).
    GraphQLBuiltIn,

    /// A position within an executable document.
    ExecutableDocument(FilePosition),

    /// A position within a schema document.
    Schema(FilePosition),

    /// Constructed programmatically with no source text behind it.
    Unknown,
}
impl SourceLocation {
    pub fn file_position(&self) -> Option<&FilePosition> {
        match self {
            Self::ExecutableDocument(pos) | Self::Schema(pos) => Some(pos),
            Self::GraphQLBuiltIn | Self::Unknown => None,
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExecutableDocument(pos) | Self::Schema(pos) => write!(f, "{pos}"),
            Self::GraphQLBuiltIn => write!(f, "<graphql built-in>"),
            Self::Unknown => write!(f, "<unknown>"),
        }
    }
}

/// Maps `graphql-parser`'s 1-based line/column positions back to byte
/// offsets within the source text, and back again.
///
/// Columns count chars, except that a tab advances the column by 8 (as
/// `graphql-parser` counts them).
#[derive(Debug)]
pub(crate) struct LineIndex<'src> {
    line_starts: Vec<usize>,
    source: &'src str,
}
impl<'src> LineIndex<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source.char_indices()
                .filter(|(_, ch)| *ch == '\n')
                .map(|(idx, _)| idx + 1),
        );
        Self {
            line_starts,
            source,
        }
    }

    pub(crate) fn byte_offset(&self, pos: &ast::AstPos) -> usize {
        let Some(line_start) =
            pos.line.checked_sub(1).and_then(|idx| self.line_starts.get(idx))
        else {
            return self.source.len();
        };

        let mut col = 1;
        let mut offset = *line_start;
        for ch in self.source[*line_start..].chars() {
            if col >= pos.column || ch == '\n' {
                break;
            }
            col += column_width(ch);
            offset += ch.len_utf8();
        }
        offset
    }

    /// The line/column position of `byte_offset`.
    pub(crate) fn pos(&self, byte_offset: usize) -> ast::AstPos {
        let byte_offset = byte_offset.min(self.source.len());
        let line_idx =
            self.line_starts.partition_point(|start| *start <= byte_offset)
                .saturating_sub(1);
        let line_start = self.line_starts[line_idx];
        let column =
            1 + self.source[line_start..].char_indices()
                .take_while(|(idx, _)| line_start + idx < byte_offset)
                .map(|(_, ch)| column_width(ch))
                .sum::<usize>();
        ast::AstPos {
            line: line_idx + 1,
            column,
        }
    }

    pub(crate) fn source(&self) -> &'src str {
        self.source
    }
}

fn column_width(ch: char) -> usize {
    if ch == '\t' { 8 } else { 1 }
}
