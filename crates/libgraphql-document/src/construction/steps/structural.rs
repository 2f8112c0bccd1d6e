//! Steps that append document parts. Each is registered first in its
//! package so that the rule steps after it can inspect the new part.

use crate::construction::ConstructionContext;
use crate::document::DirectiveInvocation;
use crate::document::FieldSelection;
use crate::document::FragmentSpread;
use crate::document::InlineFragment;
use crate::document::InputArgument;
use crate::document::InputValue;
use crate::document::InputValueKind;
use crate::document::NamedFragment;
use crate::document::Operation;
use crate::document::OperationKind;
use crate::document::PartData;
use crate::document::Variable;
use crate::rules::ConstructionStep;
use crate::syntax::SyntaxNodeKind;
use crate::types::DirectiveLocation;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

#[derive(Debug)]
pub struct CreateOperation;
impl ConstructionStep for CreateOperation {
    fn name(&self) -> &'static str {
        "create-operation"
    }

    fn should_execute(&self, ctx: &ConstructionContext<'_, '_>) -> bool {
        let SyntaxNodeKind::Operation { kind, .. } = ctx.node_kind() else {
            return false;
        };
        ctx.schema().root_operation_type(*kind).is_some()
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let SyntaxNodeKind::Operation { kind, name } = ctx.node_kind() else {
            return false;
        };
        let Some(root_type) = ctx.schema().root_operation_type(*kind) else {
            return false;
        };
        ctx.add_part(PartData::Operation(Operation {
            directives: vec![],
            kind: *kind,
            name: name.to_owned(),
            root_type_name: root_type.name().to_string(),
            selection_set: None,
            variables: IndexMap::new(),
        }));
        true
    }
}

#[derive(Debug)]
pub struct CreateVariable;
impl ConstructionStep for CreateVariable {
    fn name(&self) -> &'static str {
        "create-variable"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let SyntaxNodeKind::VariableDefinition { name, type_annotation } = ctx.node_kind() else {
            return false;
        };
        ctx.add_part(PartData::Variable(Variable {
            default_value: None,
            is_used: false,
            name: name.to_string(),
            type_annotation: type_annotation.to_owned(),
        }));
        true
    }
}

/// Opens a selection set scope whose owner type is taken from the part that
/// owns the selection set. Selections beneath an unknown or non-composite
/// type get no owner type.
#[derive(Debug)]
pub struct OpenSelectionSet;
impl ConstructionStep for OpenSelectionSet {
    fn name(&self) -> &'static str {
        "open-selection-set"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let schema = ctx.schema();
        let owner_type_name = match ctx.document().part(ctx.active_part()).data() {
            PartData::Operation(op) => Some(op.root_type_name().to_string()),

            PartData::FieldSelection(field) =>
                field.field()
                    .map(|field| field.type_annotation().innermost_type_name().to_string()),

            PartData::NamedFragment(fragment) =>
                Some(fragment.type_condition().to_string()),

            PartData::InlineFragment(inline) => match inline.type_condition() {
                Some(type_condition) => Some(type_condition.to_string()),
                None => ctx.active_selection_set()
                    .and_then(|set| set.owner_type_name())
                    .map(|name| name.to_string()),
            },

            _ => None,
        }.filter(|type_name| {
            schema.lookup_type(type_name).is_some_and(|type_| type_.is_composite_type())
        });

        ctx.begin_selection_set(owner_type_name);
        true
    }
}

#[derive(Debug)]
pub struct CreateFieldSelection;
impl ConstructionStep for CreateFieldSelection {
    fn name(&self) -> &'static str {
        "create-field-selection"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let SyntaxNodeKind::Field { alias, name } = ctx.node_kind() else {
            return false;
        };
        let owner_type_name =
            ctx.active_selection_set()
                .and_then(|set| set.owner_type_name())
                .map(|name| name.to_string());
        let field =
            owner_type_name.as_deref()
                .and_then(|owner| ctx.schema().lookup_field(owner, name));

        ctx.add_part(PartData::FieldSelection(FieldSelection {
            alias: alias.to_owned(),
            arguments: vec![],
            directives: vec![],
            field,
            name: name.to_string(),
            owner_type_name,
            selection_set: None,
        }));
        true
    }
}

#[derive(Debug)]
pub struct CreateNamedFragment;
impl ConstructionStep for CreateNamedFragment {
    fn name(&self) -> &'static str {
        "create-named-fragment"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let SyntaxNodeKind::FragmentDefinition { name, type_condition } = ctx.node_kind() else {
            return false;
        };
        ctx.add_part(PartData::NamedFragment(NamedFragment {
            directives: vec![],
            is_referenced: false,
            name: name.to_string(),
            selection_set: None,
            type_condition: type_condition.to_string(),
        }));
        true
    }
}

#[derive(Debug)]
pub struct CreateInlineFragment;
impl ConstructionStep for CreateInlineFragment {
    fn name(&self) -> &'static str {
        "create-inline-fragment"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let SyntaxNodeKind::InlineFragment { type_condition } = ctx.node_kind() else {
            return false;
        };
        ctx.add_part(PartData::InlineFragment(InlineFragment {
            directives: vec![],
            selection_set: None,
            type_condition: type_condition.to_owned(),
        }));
        true
    }
}

/// Target fragments are linked once the whole document has been
/// constructed, since a spread may appear before the fragment it names.
#[derive(Debug)]
pub struct CreateFragmentSpread;
impl ConstructionStep for CreateFragmentSpread {
    fn name(&self) -> &'static str {
        "create-fragment-spread"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let SyntaxNodeKind::FragmentSpread { fragment_name } = ctx.node_kind() else {
            return false;
        };
        ctx.add_part(PartData::FragmentSpread(FragmentSpread {
            directives: vec![],
            fragment: None,
            fragment_name: fragment_name.to_string(),
        }));
        true
    }
}

#[derive(Debug)]
pub struct CreateInputArgument;
impl ConstructionStep for CreateInputArgument {
    fn name(&self) -> &'static str {
        "create-input-argument"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let SyntaxNodeKind::Argument { name } = ctx.node_kind() else {
            return false;
        };
        let parameter = match ctx.document().part(ctx.active_part()).data() {
            PartData::FieldSelection(field) =>
                field.field().and_then(|field| field.parameters().get(name)),
            PartData::Directive(directive) =>
                directive.definition().and_then(|def| def.parameters().get(name)),
            _ => None,
        };
        ctx.add_part(PartData::Argument(InputArgument {
            expected_type: parameter.map(|param| param.type_annotation().to_owned()),
            name: name.to_string(),
            parameter,
            value: None,
        }));
        true
    }
}

#[derive(Debug)]
pub struct CreateDirective;
impl CreateDirective {
    fn directive_location(data: &PartData<'_>) -> Option<DirectiveLocation> {
        Some(match data {
            PartData::FieldSelection(_) => DirectiveLocation::Field,
            PartData::FragmentSpread(_) => DirectiveLocation::FragmentSpread,
            PartData::InlineFragment(_) => DirectiveLocation::InlineFragment,
            PartData::NamedFragment(_) => DirectiveLocation::FragmentDefinition,
            PartData::Operation(op) => match op.kind() {
                OperationKind::Mutation => DirectiveLocation::Mutation,
                OperationKind::Query => DirectiveLocation::Query,
                OperationKind::Subscription => DirectiveLocation::Subscription,
            },
            PartData::Variable(_) => DirectiveLocation::VariableDefinition,
            _ => return None,
        })
    }
}
impl ConstructionStep for CreateDirective {
    fn name(&self) -> &'static str {
        "create-directive"
    }

    fn should_execute(&self, ctx: &ConstructionContext<'_, '_>) -> bool {
        Self::directive_location(ctx.document().part(ctx.active_part()).data()).is_some()
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let SyntaxNodeKind::Directive { name } = ctx.node_kind() else {
            return false;
        };
        let Some(location) =
            Self::directive_location(ctx.document().part(ctx.active_part()).data())
        else {
            return false;
        };
        ctx.add_part(PartData::Directive(DirectiveInvocation {
            arguments: vec![],
            definition: ctx.schema().directive(name),
            location,
            name: name.to_string(),
        }));
        true
    }
}

/// Registered against every input value syntax kind.
#[derive(Debug)]
pub struct CreateInputValue;
impl CreateInputValue {
    /// The type the value at the active syntax node is expected to have,
    /// derived from the part it is being added beneath.
    fn expected_type(ctx: &ConstructionContext<'_, '_>) -> Option<TypeAnnotation> {
        match ctx.document().part(ctx.active_part()).data() {
            PartData::Argument(arg) => arg.expected_type().cloned(),

            PartData::Variable(var) => Some(var.type_annotation().to_owned()),

            PartData::InputValue(parent_value) => {
                let parent_type = parent_value.expected_type()?;
                match parent_value.kind() {
                    InputValueKind::List(_) => parent_type.list_item_type().cloned(),
                    InputValueKind::Complex(_) => {
                        let Some(SyntaxNodeKind::ObjectField { name }) = ctx.syntax_parent_kind() else {
                            return None;
                        };
                        parent_type.as_named_annotation()?
                            .graphql_type(ctx.schema())?
                            .as_input_object()?
                            .fields()
                            .get(name)
                            .map(|param| param.type_annotation().to_owned())
                    },
                    _ => None,
                }
            },

            _ => None,
        }
    }
}
impl ConstructionStep for CreateInputValue {
    fn name(&self) -> &'static str {
        "create-input-value"
    }

    fn execute(&self, ctx: &mut ConstructionContext<'_, '_>) -> bool {
        let kind = match ctx.node_kind() {
            SyntaxNodeKind::EnumValue { value } => InputValueKind::Enum(value.to_string()),
            SyntaxNodeKind::ListValue => InputValueKind::List(vec![]),
            SyntaxNodeKind::NullValue => InputValueKind::Null,
            SyntaxNodeKind::ObjectValue => InputValueKind::Complex(IndexMap::new()),
            SyntaxNodeKind::ScalarValue(scalar) => InputValueKind::Scalar(scalar.to_owned()),
            SyntaxNodeKind::VariableValue { name } => InputValueKind::VariableReference {
                name: name.to_string(),
                variable: None,
            },
            _ => return false,
        };
        let value = InputValue {
            expected_type: Self::expected_type(ctx),
            kind,
        };

        if let Some(SyntaxNodeKind::ObjectField { name }) = ctx.syntax_parent_kind() {
            ctx.add_object_field_value(name, value);
        } else {
            ctx.add_part(PartData::InputValue(value));
        }
        true
    }
}
