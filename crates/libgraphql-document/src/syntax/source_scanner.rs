//! A coarse GraphQL tokenizer over the raw source text.
//!
//! `graphql-parser` keeps no positions for argument values and refuses a
//! document that mixes executable and type-system definitions. Both gaps are
//! filled by scanning the source directly: only token boundaries and bracket
//! nesting are needed, never a full parse.

use std::iter::Peekable;
use std::ops::Range;

/// Names that begin a top-level definition.
const DEFINITION_KEYWORDS: &[&str] = &[
    "directive",
    "enum",
    "extend",
    "fragment",
    "input",
    "interface",
    "mutation",
    "query",
    "scalar",
    "schema",
    "subscription",
    "type",
    "union",
];

/// Names after which a top-level definition always continues.
const CONTINUING_NAMES: &[&str] = &[
    "directive",
    "enum",
    "extend",
    "fragment",
    "implements",
    "input",
    "interface",
    "mutation",
    "on",
    "query",
    "repeatable",
    "scalar",
    "schema",
    "subscription",
    "type",
    "union",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum ScanTokenKind {
    Name,
    Number,
    Punctuator(char),
    Spread,
    String,
    Unknown,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct ScanToken<'src> {
    pub(super) byte_offset: usize,
    pub(super) kind: ScanTokenKind,
    pub(super) text: &'src str,
}
impl ScanToken<'_> {
    fn closes(&self) -> bool {
        matches!(self.kind, ScanTokenKind::Punctuator('}' | ')' | ']'))
    }

    fn is(&self, punctuator: char) -> bool {
        self.kind == ScanTokenKind::Punctuator(punctuator)
    }

    fn opens(&self) -> bool {
        matches!(self.kind, ScanTokenKind::Punctuator('{' | '(' | '['))
    }
}

/// Yields [`ScanToken`]s, skipping whitespace, commas, and comments.
pub(super) struct SourceScanner<'src> {
    curr_byte_offset: usize,
    source: &'src str,
}
impl<'src> SourceScanner<'src> {
    pub(super) fn new(source: &'src str) -> Self {
        Self::starting_at(source, 0)
    }

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn skip_ignored(&mut self) {
        loop {
            let remaining = self.remaining();
            let Some(ch) = remaining.chars().next() else {
                return;
            };
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' =>
                    self.curr_byte_offset += ch.len_utf8(),
                '#' => {
                    self.curr_byte_offset +=
                        remaining.find(['\n', '\r']).unwrap_or(remaining.len());
                },
                _ => return,
            }
        }
    }

    /// Byte length of the string literal at the start of `remaining`.
    fn string_len(remaining: &str) -> usize {
        if let Some(body) = remaining.strip_prefix("\"\"\"") {
            let mut idx = 0;
            while idx < body.len() {
                if body[idx..].starts_with("\\\"\"\"") {
                    idx += 4;
                } else if body[idx..].starts_with("\"\"\"") {
                    return 3 + idx + 3;
                } else {
                    idx += body[idx..].chars().next().map_or(1, char::len_utf8);
                }
            }
            return remaining.len();
        }

        let mut chars = remaining.char_indices().skip(1);
        while let Some((idx, ch)) = chars.next() {
            match ch {
                '"' => return idx + 1,
                '\\' => { chars.next(); },
                '\n' | '\r' => return idx,
                _ => (),
            }
        }
        remaining.len()
    }

    pub(super) fn starting_at(source: &'src str, byte_offset: usize) -> Self {
        Self {
            curr_byte_offset: byte_offset.min(source.len()),
            source,
        }
    }
}
impl<'src> Iterator for SourceScanner<'src> {
    type Item = ScanToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_ignored();
        let remaining = self.remaining();
        let ch = remaining.chars().next()?;

        let (kind, len) = match ch {
            '"' => (ScanTokenKind::String, Self::string_len(remaining)),
            '.' if remaining.starts_with("...") => (ScanTokenKind::Spread, 3),
            '-' | '0'..='9' => (
                ScanTokenKind::Number,
                remaining.find(|ch: char| {
                    !(ch.is_ascii_alphanumeric() || matches!(ch, '-' | '+' | '.' | '_'))
                }).unwrap_or(remaining.len()),
            ),
            ch if ch == '_' || ch.is_ascii_alphabetic() => (
                ScanTokenKind::Name,
                remaining.find(|ch: char| !(ch == '_' || ch.is_ascii_alphanumeric()))
                    .unwrap_or(remaining.len()),
            ),
            '{' | '}' | '(' | ')' | '[' | ']' | ':' | '=' | '@' | '$' | '!' | '|' | '&' =>
                (ScanTokenKind::Punctuator(ch), 1),
            _ => (ScanTokenKind::Unknown, ch.len_utf8()),
        };

        let token = ScanToken {
            byte_offset: self.curr_byte_offset,
            kind,
            text: &remaining[..len],
        };
        self.curr_byte_offset += len;
        Some(token)
    }
}

/// Byte ranges of each top-level definition in `source`, in order.
///
/// Boundaries are found from tokens alone: a definition keyword, a
/// description string, or a second `{ ... }` body at nesting depth 0 starts
/// a new definition.
pub(super) fn split_definitions(source: &str) -> Vec<Range<usize>> {
    let mut starts = vec![];
    let mut depth = 0usize;
    let mut prev: Option<ScanToken<'_>> = None;
    let mut has_body = false;
    let mut after_description = false;

    for token in SourceScanner::new(source) {
        if depth == 0 {
            let continues_definition = prev.is_some_and(|prev| match prev.kind {
                ScanTokenKind::Name => CONTINUING_NAMES.contains(&prev.text),
                ScanTokenKind::Punctuator(ch) => matches!(ch, ':' | '=' | '|' | '&' | '@' | '$'),
                _ => false,
            });
            let starts_definition = match token.kind {
                _ if prev.is_none() => true,
                ScanTokenKind::Name if DEFINITION_KEYWORDS.contains(&token.text) =>
                    !continues_definition && !after_description,
                ScanTokenKind::Punctuator('{') => has_body,
                ScanTokenKind::String => !continues_definition,
                _ => false,
            };

            if starts_definition {
                starts.push(token.byte_offset);
                has_body = false;
                after_description = token.kind == ScanTokenKind::String;
            } else if token.kind == ScanTokenKind::Name {
                after_description = false;
            }
        }

        if token.opens() {
            depth += 1;
        } else if token.closes() {
            depth = depth.saturating_sub(1);
            if depth == 0 && token.is('}') {
                has_body = true;
            }
        }
        if depth == 0 || (depth == 1 && token.opens()) {
            prev = Some(token);
        }
    }

    starts.iter()
        .enumerate()
        .map(|(idx, start)| *start..starts.get(idx + 1).copied().unwrap_or(source.len()))
        .collect()
}

/// Where one `name: value` pair starts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct NamedValueOffsets {
    pub(super) name: usize,
    pub(super) value: usize,
}

/// Collects every `name: value` pair directly inside the bracket group that
/// the scanner is positioned in (depth 1), stopping at its closing bracket.
fn named_values<'src>(
    tokens: &mut Peekable<impl Iterator<Item = ScanToken<'src>>>,
) -> Vec<NamedValueOffsets> {
    let mut pairs = vec![];
    let mut depth = 1usize;
    while let Some(token) = tokens.next() {
        if token.opens() {
            depth += 1;
        } else if token.closes() {
            depth -= 1;
            if depth == 0 {
                break;
            }
        } else if depth == 1
            && token.kind == ScanTokenKind::Name
            && tokens.peek().is_some_and(|next| next.is(':')) {
            tokens.next();
            if let Some(value) = tokens.peek() {
                pairs.push(NamedValueOffsets {
                    name: token.byte_offset,
                    value: value.byte_offset,
                });
            }
        }
    }
    pairs
}

/// Offsets of each argument in the `( ... )` list of the field or directive
/// that starts at `owner_offset`. Empty when the owner has no argument list.
pub(super) fn argument_offsets(source: &str, owner_offset: usize) -> Vec<NamedValueOffsets> {
    let mut tokens = SourceScanner::starting_at(source, owner_offset).peekable();
    if tokens.next_if(|token| token.is('@')).is_some() {
        tokens.next();
    }
    // Field: `name`, or `alias: name`.
    while let Some(token) = tokens.next() {
        match token.kind {
            ScanTokenKind::Punctuator('(') => return named_values(&mut tokens),
            ScanTokenKind::Name | ScanTokenKind::Punctuator(':') => continue,
            _ => return vec![],
        }
    }
    vec![]
}

/// Offset of the default value of the variable definition that starts at
/// `variable_offset` (the `$`).
pub(super) fn default_value_offset(source: &str, variable_offset: usize) -> Option<usize> {
    let mut tokens = SourceScanner::starting_at(source, variable_offset);
    tokens.next().filter(|token| token.is('$'))?;
    let mut depth = 0usize;
    while let Some(token) = tokens.next() {
        if token.opens() {
            depth += 1;
        } else if token.closes() {
            if depth == 0 {
                return None;
            }
            depth -= 1;
        } else if depth == 0 {
            match token.kind {
                ScanTokenKind::Punctuator('=') => return tokens.next().map(|t| t.byte_offset),
                ScanTokenKind::Punctuator('$' | '@') => return None,
                _ => (),
            }
        }
    }
    None
}

/// Offsets of the items of the list literal at `value_offset`.
pub(super) fn list_item_offsets(source: &str, value_offset: usize) -> Vec<usize> {
    let mut tokens = SourceScanner::starting_at(source, value_offset);
    if !tokens.next().is_some_and(|token| token.is('[')) {
        return vec![];
    }

    let mut items = vec![];
    let mut depth = 1usize;
    let mut after_dollar = false;
    for token in tokens {
        if depth == 1 && !token.closes() && !after_dollar {
            items.push(token.byte_offset);
        }
        after_dollar = depth == 1 && token.is('$');
        if token.opens() {
            depth += 1;
        } else if token.closes() {
            depth -= 1;
            if depth == 0 {
                break;
            }
        }
    }
    items
}

/// Offsets of the fields of the object literal at `value_offset`.
pub(super) fn object_field_offsets(source: &str, value_offset: usize) -> Vec<(&str, NamedValueOffsets)> {
    let mut tokens = SourceScanner::starting_at(source, value_offset).peekable();
    if !tokens.next().is_some_and(|token| token.is('{')) {
        return vec![];
    }
    named_values(&mut tokens).into_iter()
        .map(|offsets| {
            let name =
                SourceScanner::starting_at(source, offsets.name)
                    .next()
                    .map_or("", |token| token.text);
            (name, offsets)
        })
        .collect()
}
