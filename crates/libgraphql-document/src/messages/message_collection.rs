use crate::messages::GraphQLMessage;
use crate::messages::MessageSeverity;

/// The ordered messages produced while building a single document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageCollection {
    messages: Vec<GraphQLMessage>,
}
impl MessageCollection {
    pub fn add(&mut self, message: GraphQLMessage) {
        log::trace!("Recording message: {message}");
        self.messages.push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// `true` when no message is [`MessageSeverity::Critical`].
    pub fn is_success(&self) -> bool {
        self.severity() != Some(MessageSeverity::Critical)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GraphQLMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// The highest severity among all messages, or `None` if there are no
    /// messages at all.
    pub fn severity(&self) -> Option<MessageSeverity> {
        self.messages.iter().map(|msg| msg.severity).max()
    }

    pub fn with_code<'a>(
        &'a self,
        code: &'a str,
    ) -> impl Iterator<Item = &'a GraphQLMessage> + 'a {
        self.messages.iter().filter(move |msg| msg.code == code)
    }
}
impl<'a> IntoIterator for &'a MessageCollection {
    type Item = &'a GraphQLMessage;
    type IntoIter = std::slice::Iter<'a, GraphQLMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
impl IntoIterator for MessageCollection {
    type Item = GraphQLMessage;
    type IntoIter = std::vec::IntoIter<GraphQLMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}
