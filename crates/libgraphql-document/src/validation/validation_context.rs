use crate::document::Document;
use crate::document::DocumentPart;
use crate::document::PartId;
use crate::document::PartKind;
use crate::messages::GraphQLMessage;
use crate::messages::MessageCollection;
use crate::schema::Schema;
use std::collections::HashSet;

/// Mutable state threaded through a single validation run.
#[derive(Debug)]
pub struct ValidationContext<'schema, 'run> {
    pub(super) current: PartId,
    document: &'run mut Document<'schema>,
    global_keys: &'run mut HashSet<String>,
    messages: &'run mut MessageCollection,
    schema: &'schema Schema,
}
impl<'schema, 'run> ValidationContext<'schema, 'run> {
    pub fn add_message(&mut self, message: GraphQLMessage) {
        self.messages.add(message);
    }

    /// Whether any strict ancestor of the current part is of the given kind.
    pub fn contains(&self, kind: PartKind) -> bool {
        self.find_ancestor(kind).is_some()
    }

    pub fn current(&self) -> PartId {
        self.current
    }

    pub fn document(&self) -> &Document<'schema> {
        &*self.document
    }

    pub fn document_mut(&mut self) -> &mut Document<'schema> {
        &mut *self.document
    }

    /// The nearest strict ancestor of the current part with the given kind.
    pub fn find_ancestor(&self, kind: PartKind) -> Option<PartId> {
        let mut current = self.part().parent();
        while let Some(part_id) = current {
            let part = self.document.part(part_id);
            if part.kind() == kind {
                return Some(part_id);
            }
            current = part.parent();
        }
        None
    }

    pub(super) fn new(
        schema: &'schema Schema,
        document: &'run mut Document<'schema>,
        global_keys: &'run mut HashSet<String>,
        messages: &'run mut MessageCollection,
    ) -> Self {
        let root = document.root();
        Self {
            current: root,
            document,
            global_keys,
            messages,
            schema,
        }
    }

    pub fn part(&self) -> &DocumentPart<'schema> {
        self.document.part(self.current)
    }

    /// Returns `true` the first time it is called with a given key during
    /// this run, and `false` every time after.
    ///
    /// Rules that could otherwise report the same problem from more than one
    /// part use this with a `"<rule code>|<owner path>|<name>"` key.
    pub fn record_once(&mut self, key: String) -> bool {
        self.global_keys.insert(key)
    }

    /// Adds `message` only if `key` has not been recorded yet.
    pub fn report_once(&mut self, key: String, message: GraphQLMessage) -> bool {
        if !self.record_once(key) {
            return false;
        }
        self.add_message(message);
        true
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }
}
