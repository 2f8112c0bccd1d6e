use crate::ast;
use crate::document::OperationKind;
use crate::document::ScalarValue;
use crate::loc;
use crate::syntax::source_scanner;
use crate::syntax::SyntaxNodeId;
use crate::syntax::SyntaxNodeKind;
use crate::syntax::SyntaxTree;
use crate::types::TypeAnnotation;
use std::collections::HashSet;
use std::path::Path;

/// Walks a `graphql-parser` AST and appends the equivalent
/// [`SyntaxNode`](crate::syntax::SyntaxNode)s to a fresh [`SyntaxTree`].
pub(super) struct AstLowering<'a, 'src> {
    file_path: Option<&'a Path>,
    line_index: &'a loc::LineIndex<'src>,
    tree: SyntaxTree,
}
impl<'a, 'src> AstLowering<'a, 'src> {
    pub(super) fn into_tree(self) -> SyntaxTree {
        self.tree
    }

    fn location(&self, pos: &ast::AstPos) -> loc::SourceLocation {
        loc::SourceLocation::ExecutableDocument(loc::FilePosition::from_pos(
            self.file_path,
            pos,
            self.line_index,
        ))
    }

    fn location_at(&self, byte_offset: usize) -> loc::SourceLocation {
        self.location(&self.line_index.pos(byte_offset))
    }

    /// `graphql-parser` keeps no positions for arguments or values, so they
    /// are found by scanning the source from the owner's position. Falls
    /// back to the owner's location when the scan disagrees with the AST.
    fn lower_arguments(
        &mut self,
        parent: SyntaxNodeId,
        location: &loc::SourceLocation,
        arguments: &[(String, ast::operation::Value)],
    ) {
        if arguments.is_empty() {
            return;
        }
        let offsets =
            location.file_position()
                .map(|pos| source_scanner::argument_offsets(
                    self.line_index.source(),
                    pos.byte_offset,
                ))
                .filter(|offsets| offsets.len() == arguments.len());

        for (idx, (name, value)) in arguments.iter().enumerate() {
            let offsets = offsets.as_ref().map(|offsets| offsets[idx]);
            let arg_location =
                offsets.map_or_else(|| location.to_owned(), |offsets| self.location_at(offsets.name));
            let arg_id = self.tree.add_node(
                parent,
                SyntaxNodeKind::Argument { name: name.to_string() },
                arg_location.to_owned(),
            );
            self.lower_value(
                arg_id,
                &arg_location,
                offsets.map(|offsets| offsets.value),
                value,
            );
        }
    }

    pub(super) fn lower_definition(&mut self, def: &ast::operation::Definition) {
        use ast::operation::Definition;
        use ast::operation::OperationDefinition;
        let root = self.tree.root();
        match def {
            Definition::Fragment(frag_def) => {
                let ast::operation::TypeCondition::On(type_condition) =
                    &frag_def.type_condition;
                let location = self.location(&frag_def.position);
                let frag_id = self.tree.add_node(
                    root,
                    SyntaxNodeKind::FragmentDefinition {
                        name: frag_def.name.to_string(),
                        type_condition: type_condition.to_string(),
                    },
                    location,
                );
                self.lower_directives(frag_id, &frag_def.directives);
                self.lower_selection_set(frag_id, &frag_def.selection_set);
            },

            Definition::Operation(OperationDefinition::SelectionSet(selection_set)) => {
                let op_id = self.tree.add_node(
                    root,
                    SyntaxNodeKind::Operation {
                        kind: OperationKind::Query,
                        name: None,
                    },
                    self.location(&selection_set.span.0),
                );
                self.lower_selection_set(op_id, selection_set);
            },

            Definition::Operation(OperationDefinition::Query(query)) =>
                self.lower_operation(
                    OperationKind::Query,
                    &query.position,
                    query.name.as_ref(),
                    &query.variable_definitions,
                    &query.directives,
                    &query.selection_set,
                ),

            Definition::Operation(OperationDefinition::Mutation(mutation)) =>
                self.lower_operation(
                    OperationKind::Mutation,
                    &mutation.position,
                    mutation.name.as_ref(),
                    &mutation.variable_definitions,
                    &mutation.directives,
                    &mutation.selection_set,
                ),

            Definition::Operation(OperationDefinition::Subscription(subscription)) =>
                self.lower_operation(
                    OperationKind::Subscription,
                    &subscription.position,
                    subscription.name.as_ref(),
                    &subscription.variable_definitions,
                    &subscription.directives,
                    &subscription.selection_set,
                ),
        }
    }

    fn lower_directives(
        &mut self,
        parent: SyntaxNodeId,
        directives: &[ast::operation::Directive],
    ) {
        for directive in directives {
            let location = self.location(&directive.position);
            let directive_id = self.tree.add_node(
                parent,
                SyntaxNodeKind::Directive { name: directive.name.to_string() },
                location.to_owned(),
            );
            self.lower_arguments(directive_id, &location, &directive.arguments);
        }
    }

    fn lower_operation(
        &mut self,
        kind: OperationKind,
        position: &ast::AstPos,
        name: Option<&String>,
        variable_definitions: &[ast::operation::VariableDefinition],
        directives: &[ast::operation::Directive],
        selection_set: &ast::operation::SelectionSet,
    ) {
        let root = self.tree.root();
        let op_id = self.tree.add_node(
            root,
            SyntaxNodeKind::Operation {
                kind,
                name: name.map(|name| name.to_string()),
            },
            self.location(position),
        );

        for var_def in variable_definitions {
            let location = self.location(&var_def.position);
            let var_id = self.tree.add_node(
                op_id,
                SyntaxNodeKind::VariableDefinition {
                    name: var_def.name.to_string(),
                    type_annotation: TypeAnnotation::from_ast_type(
                        &location,
                        &var_def.var_type,
                    ),
                },
                location.to_owned(),
            );
            if let Some(default_value) = &var_def.default_value {
                let value_offset =
                    location.file_position().and_then(|pos| {
                        source_scanner::default_value_offset(
                            self.line_index.source(),
                            pos.byte_offset,
                        )
                    });
                self.lower_value(var_id, &location, value_offset, default_value);
            }
        }

        self.lower_directives(op_id, directives);
        self.lower_selection_set(op_id, selection_set);
    }

    fn lower_selection_set(
        &mut self,
        parent: SyntaxNodeId,
        selection_set: &ast::operation::SelectionSet,
    ) {
        use ast::operation::Selection;

        if selection_set.items.is_empty() {
            return;
        }

        let set_id = self.tree.add_node(
            parent,
            SyntaxNodeKind::SelectionSet,
            self.location(&selection_set.span.0),
        );

        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) => {
                    let location = self.location(&field.position);
                    let field_id = self.tree.add_node(
                        set_id,
                        SyntaxNodeKind::Field {
                            alias: field.alias.to_owned(),
                            name: field.name.to_string(),
                        },
                        location.to_owned(),
                    );
                    self.lower_arguments(field_id, &location, &field.arguments);
                    self.lower_directives(field_id, &field.directives);
                    self.lower_selection_set(field_id, &field.selection_set);
                },

                Selection::FragmentSpread(spread) => {
                    let spread_id = self.tree.add_node(
                        set_id,
                        SyntaxNodeKind::FragmentSpread {
                            fragment_name: spread.fragment_name.to_string(),
                        },
                        self.location(&spread.position),
                    );
                    self.lower_directives(spread_id, &spread.directives);
                },

                Selection::InlineFragment(inline) => {
                    let type_condition =
                        inline.type_condition.as_ref().map(|cond| {
                            let ast::operation::TypeCondition::On(name) = cond;
                            name.to_string()
                        });
                    let inline_id = self.tree.add_node(
                        set_id,
                        SyntaxNodeKind::InlineFragment { type_condition },
                        self.location(&inline.position),
                    );
                    self.lower_directives(inline_id, &inline.directives);
                    self.lower_selection_set(inline_id, &inline.selection_set);
                },
            }
        }
    }

    pub(super) fn lower_type_system_definition(&mut self, def: &ast::schema::Definition) {
        use ast::schema::Definition;
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;

        let (position, description) = match def {
            Definition::DirectiveDefinition(d) =>
                (d.position, format!("directive @{}", d.name)),
            Definition::SchemaDefinition(d) =>
                (d.position, "schema".to_string()),
            Definition::TypeDefinition(TypeDefinition::Enum(d)) =>
                (d.position, format!("enum {}", d.name)),
            Definition::TypeDefinition(TypeDefinition::InputObject(d)) =>
                (d.position, format!("input {}", d.name)),
            Definition::TypeDefinition(TypeDefinition::Interface(d)) =>
                (d.position, format!("interface {}", d.name)),
            Definition::TypeDefinition(TypeDefinition::Object(d)) =>
                (d.position, format!("type {}", d.name)),
            Definition::TypeDefinition(TypeDefinition::Scalar(d)) =>
                (d.position, format!("scalar {}", d.name)),
            Definition::TypeDefinition(TypeDefinition::Union(d)) =>
                (d.position, format!("union {}", d.name)),
            Definition::TypeExtension(TypeExtension::Enum(d)) =>
                (d.position, format!("extend enum {}", d.name)),
            Definition::TypeExtension(TypeExtension::InputObject(d)) =>
                (d.position, format!("extend input {}", d.name)),
            Definition::TypeExtension(TypeExtension::Interface(d)) =>
                (d.position, format!("extend interface {}", d.name)),
            Definition::TypeExtension(TypeExtension::Object(d)) =>
                (d.position, format!("extend type {}", d.name)),
            Definition::TypeExtension(TypeExtension::Scalar(d)) =>
                (d.position, format!("extend scalar {}", d.name)),
            Definition::TypeExtension(TypeExtension::Union(d)) =>
                (d.position, format!("extend union {}", d.name)),
        };

        let root = self.tree.root();
        self.tree.add_node(
            root,
            SyntaxNodeKind::TypeSystemDefinition { description },
            self.location(&position),
        );
    }

    /// `value_offset` is where `value` starts in the source, when known.
    /// Otherwise the value (and everything nested in it) is placed at
    /// `fallback_location`.
    fn lower_value(
        &mut self,
        parent: SyntaxNodeId,
        fallback_location: &loc::SourceLocation,
        value_offset: Option<usize>,
        value: &ast::operation::Value,
    ) {
        use ast::operation::Value;
        let kind = match value {
            Value::Boolean(value) => SyntaxNodeKind::ScalarValue(ScalarValue::Boolean(*value)),
            Value::Enum(value) => SyntaxNodeKind::EnumValue { value: value.to_string() },
            Value::Float(value) => SyntaxNodeKind::ScalarValue(ScalarValue::Float(*value)),
            // graphql-parser rejects int literals that overflow an i64.
            Value::Int(number) => SyntaxNodeKind::ScalarValue(ScalarValue::Int(
                number.as_i64().unwrap_or(i64::MAX),
            )),
            Value::List(_) => SyntaxNodeKind::ListValue,
            Value::Null => SyntaxNodeKind::NullValue,
            Value::Object(_) => SyntaxNodeKind::ObjectValue,
            Value::String(value) => SyntaxNodeKind::ScalarValue(ScalarValue::String(value.to_string())),
            Value::Variable(name) => SyntaxNodeKind::VariableValue { name: name.to_string() },
        };

        let location =
            value_offset.map_or_else(|| fallback_location.to_owned(), |offset| self.location_at(offset));
        let value_id = self.tree.add_node(parent, kind, location.to_owned());
        let source = self.line_index.source();
        match value {
            Value::List(items) => {
                let item_offsets =
                    value_offset
                        .map(|offset| source_scanner::list_item_offsets(source, offset))
                        .filter(|offsets| offsets.len() == items.len());
                for (idx, item) in items.iter().enumerate() {
                    let item_offset = item_offsets.as_ref().map(|offsets| offsets[idx]);
                    self.lower_value(value_id, &location, item_offset, item);
                }
            },

            Value::Object(fields) => {
                let field_offsets =
                    value_offset
                        .map(|offset| source_scanner::object_field_offsets(source, offset))
                        .unwrap_or_default();

                // Source order first, then anything the scan missed.
                let mut lowered = HashSet::new();
                let ordered =
                    field_offsets.into_iter()
                        .filter_map(|(name, offsets)| {
                            let (name, field_value) = fields.get_key_value(name)?;
                            Some((name, field_value, Some(offsets)))
                        })
                        .chain(fields.iter().map(|(name, field_value)| (name, field_value, None)))
                        .filter(|(name, _, _)| lowered.insert(name.to_string()))
                        .collect::<Vec<_>>();

                for (name, field_value, offsets) in ordered {
                    let field_location =
                        offsets.map_or_else(|| location.to_owned(), |offsets| self.location_at(offsets.name));
                    let field_id = self.tree.add_node(
                        value_id,
                        SyntaxNodeKind::ObjectField { name: name.to_string() },
                        field_location.to_owned(),
                    );
                    self.lower_value(
                        field_id,
                        &field_location,
                        offsets.map(|offsets| offsets.value),
                        field_value,
                    );
                }
            },

            _ => (),
        }
    }

    pub(super) fn new(
        file_path: Option<&'a Path>,
        line_index: &'a loc::LineIndex<'src>,
    ) -> Self {
        Self {
            file_path,
            line_index,
            tree: SyntaxTree::new(),
        }
    }
}
