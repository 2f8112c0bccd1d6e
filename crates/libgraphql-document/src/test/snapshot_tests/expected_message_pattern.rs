use crate::messages::GraphQLMessage;

/// Pattern for matching expected messages in snapshot tests.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpectedMessagePattern {
    /// Exact rule code match (e.g., `# EXPECTED_CODE: 5.3.1`)
    Code(String),
    /// Substring match (e.g., `# EXPECTED_MESSAGE_CONTAINS: Cannot query field`)
    Contains(String),
}

impl ExpectedMessagePattern {
    /// Case-sensitive.
    pub fn matches(&self, message: &GraphQLMessage) -> bool {
        match self {
            ExpectedMessagePattern::Code(code) => message.code() == code,
            ExpectedMessagePattern::Contains(substring) => message.message().contains(substring),
        }
    }
}

impl std::fmt::Display for ExpectedMessagePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpectedMessagePattern::Code(code) => {
                write!(f, "CODE: {code}")
            }
            ExpectedMessagePattern::Contains(substring) => {
                write!(f, "MESSAGE_CONTAINS: {substring}")
            }
        }
    }
}
