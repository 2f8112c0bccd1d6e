use crate::loc;
use crate::messages::MessageSeverity;
use crate::messages::ValueCoercionError;
use crate::rules::RuleReference;

/// A single problem (or note) found while building a document.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLMessage {
    pub(crate) code: &'static str,
    pub(crate) error: Option<ValueCoercionError>,
    pub(crate) location: loc::SourceLocation,
    pub(crate) message: String,
    pub(crate) severity: MessageSeverity,
    pub(crate) url: &'static str,
}
impl GraphQLMessage {
    /// The stable identifier of the rule that produced this message. This
    /// is the number of the GraphQL spec section that defines the rule
    /// (e.g. `"5.4.2"`).
    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn critical(
        rule: &RuleReference,
        message: impl Into<String>,
        location: loc::SourceLocation,
    ) -> Self {
        Self::new(MessageSeverity::Critical, rule, message, location)
    }

    pub fn error(&self) -> Option<&ValueCoercionError> {
        self.error.as_ref()
    }

    pub fn location(&self) -> &loc::SourceLocation {
        &self.location
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn new(
        severity: MessageSeverity,
        rule: &RuleReference,
        message: impl Into<String>,
        location: loc::SourceLocation,
    ) -> Self {
        Self {
            code: rule.code,
            error: None,
            location,
            message: message.into(),
            severity,
            url: rule.url,
        }
    }

    pub fn severity(&self) -> MessageSeverity {
        self.severity
    }

    /// Link to the GraphQL spec section describing the violated rule.
    pub fn url(&self) -> &'static str {
        self.url
    }

    pub fn with_error(mut self, error: ValueCoercionError) -> Self {
        self.error = Some(error);
        self
    }
}
impl std::fmt::Display for GraphQLMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;
        if let Some(error) = &self.error {
            write!(f, " ({error})")?;
        }
        if self.location.file_position().is_some() {
            write!(f, " at {}", self.location)?;
        }
        Ok(())
    }
}
