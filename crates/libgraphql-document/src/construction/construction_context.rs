use crate::document::Document;
use crate::document::FieldSelectionSet;
use crate::document::InputValue;
use crate::document::PartData;
use crate::document::PartId;
use crate::document::PartKind;
use crate::loc;
use crate::messages::GraphQLMessage;
use crate::messages::MessageCollection;
use crate::schema::Schema;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxNodeId;
use crate::syntax::SyntaxNodeKind;
use crate::syntax::SyntaxTree;

/// Mutable state threaded through a single construction run.
///
/// The "active part" is the most specific document part created so far for
/// the syntax node being visited or one of its ancestors. New parts are
/// always added beneath it.
#[derive(Debug)]
pub struct ConstructionContext<'schema, 'run> {
    pub(super) active_node: SyntaxNodeId,
    pub(super) active_part: PartId,
    pub(super) active_selection_set: Option<PartId>,
    document: &'run mut Document<'schema>,
    messages: &'run mut MessageCollection,
    schema: &'schema Schema,
    syntax_tree: &'run SyntaxTree,
}
impl<'schema, 'run> ConstructionContext<'schema, 'run> {
    pub fn active_part(&self) -> PartId {
        self.active_part
    }

    /// The innermost selection set opened so far, if any.
    pub fn active_selection_set(&self) -> Option<&FieldSelectionSet> {
        self.active_selection_set
            .map(|set_id| self.document.part(set_id).unwrap_selection_set())
    }

    pub fn add_message(&mut self, message: GraphQLMessage) {
        self.messages.add(message);
    }

    /// Adds an input value as a field of the active (complex) input value.
    /// The new value becomes the active part.
    pub fn add_object_field_value(&mut self, field_name: &str, value: InputValue) -> PartId {
        let id = self.document.add_object_field_value(
            self.active_part,
            field_name,
            self.location(),
            value,
        );
        self.active_part = id;
        id
    }

    /// Adds a part beneath the active part, located at the active syntax
    /// node. The new part becomes the active part.
    pub fn add_part(&mut self, data: PartData<'schema>) -> PartId {
        let id = self.document.add_part(self.active_part, self.location(), data);
        self.active_part = id;
        id
    }

    /// Adds a selection set part beneath the active part and opens it as the
    /// scope that field selections are resolved against.
    pub fn begin_selection_set(&mut self, owner_type_name: Option<String>) -> PartId {
        let id = self.add_part(PartData::SelectionSet(FieldSelectionSet {
            executable_fields: vec![],
            owner_type_name,
            selections: vec![],
        }));
        self.active_selection_set = Some(id);
        id
    }

    pub fn document(&self) -> &Document<'schema> {
        &*self.document
    }

    /// The nearest part of the given kind, starting at (and including) the
    /// active part.
    pub fn find_ancestor_part(&self, kind: PartKind) -> Option<PartId> {
        let mut current = Some(self.active_part);
        while let Some(part_id) = current {
            let part = self.document.part(part_id);
            if part.kind() == kind {
                return Some(part_id);
            }
            current = part.parent();
        }
        None
    }

    pub fn location(&self) -> loc::SourceLocation {
        self.node().location().to_owned()
    }

    pub(super) fn new(
        schema: &'schema Schema,
        syntax_tree: &'run SyntaxTree,
        document: &'run mut Document<'schema>,
        messages: &'run mut MessageCollection,
    ) -> Self {
        let root_part = document.root();
        Self {
            active_node: syntax_tree.root(),
            active_part: root_part,
            active_selection_set: None,
            document,
            messages,
            schema,
            syntax_tree,
        }
    }

    pub fn node(&self) -> &'run SyntaxNode {
        self.syntax_tree.node(self.active_node)
    }

    pub fn node_kind(&self) -> &'run SyntaxNodeKind {
        self.node().kind()
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }

    pub fn syntax_children(&self) -> impl Iterator<Item = &'run SyntaxNode> + use<'run, 'schema> {
        let tree = self.syntax_tree;
        self.node().children().iter().map(move |id| tree.node(*id))
    }

    pub fn syntax_parent_kind(&self) -> Option<&'run SyntaxNodeKind> {
        self.node().parent().map(|id| self.syntax_tree.node(id).kind())
    }
}
