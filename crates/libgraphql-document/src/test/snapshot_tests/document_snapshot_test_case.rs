use crate::messages::MessageCollection;
use crate::test::snapshot_tests::ExpectedMessagePattern;
use std::path::Path;
use std::path::PathBuf;

/// A single executable document fixture (valid or invalid)
#[derive(Debug, Clone)]
pub struct DocumentSnapshotTestCase {
    pub path: PathBuf,
    pub expected_messages: Vec<ExpectedMessagePattern>,
}

impl DocumentSnapshotTestCase {
    /// Parses EXPECTED_CODE and EXPECTED_MESSAGE_CONTAINS comments from a
    /// GraphQL file.
    ///
    /// Supports two syntaxes:
    /// - `# EXPECTED_CODE: 5.3.1` - Matches a message's rule code exactly
    /// - `# EXPECTED_MESSAGE_CONTAINS: text` - Matches substring in message text
    pub fn parse_expected_messages(path: &Path) -> Vec<ExpectedMessagePattern> {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Vec::new();
        };

        content
            .lines()
            .filter_map(|line| {
                let trimmed = line.trim_start();

                if let Some(code) = trimmed.strip_prefix("# EXPECTED_CODE:") {
                    Some(ExpectedMessagePattern::Code(code.trim().to_string()))
                } else {
                    trimmed.strip_prefix("# EXPECTED_MESSAGE_CONTAINS:").map(|contains_pattern| {
                        ExpectedMessagePattern::Contains(contains_pattern.trim().to_string())
                    })
                }
            })
            .collect()
    }

    /// The expected patterns that no message in `messages` matches.
    ///
    /// When no patterns are specified, the document only has to fail
    /// (produce at least one critical message).
    pub fn unmatched_patterns<'a>(
        &'a self,
        messages: &MessageCollection,
    ) -> Vec<&'a ExpectedMessagePattern> {
        self.expected_messages
            .iter()
            .filter(|pattern| !messages.iter().any(|msg| pattern.matches(msg)))
            .collect()
    }
}
