use crate::document::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::DirectiveDefinition;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

/// The read-only type catalog that executable documents are validated
/// against.
///
/// A [`Schema`] is never mutated after [`SchemaBuilder::build()`], so one
/// instance can be shared by any number of concurrent document builds.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, DirectiveDefinition>,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) typename_field: Field,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// All directives known to this [`Schema`], including the implicitly
    /// defined built-ins like `@skip`.
    pub fn all_directives(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directive_defs
    }

    /// All types known to this [`Schema`], including the built-in scalars.
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn directive(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directive_defs.get(name)
    }

    /// Look up a selectable field named `field_name` on the composite type
    /// named `type_name`.
    ///
    /// The `__typename` meta-field resolves on every composite type,
    /// including unions (which have no other selectable fields).
    pub fn lookup_field(&self, type_name: &str, field_name: &str) -> Option<&Field> {
        let type_ = self.types.get(type_name)?;
        if field_name == "__typename" && type_.is_composite_type() {
            return Some(&self.typename_field);
        }
        type_.fields()?.get(field_name)
    }

    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.as_ref().map(|named_ref| {
            named_ref.deref(self)
                .expect("type is present in schema")
        })
    }

    /// Names of the object types that a value of the composite type
    /// `type_name` could be at runtime.
    ///
    /// <https://spec.graphql.org/October2021/#GetPossibleTypes()>
    pub fn possible_type_names(&self, type_name: &str) -> Vec<&str> {
        match self.types.get(type_name) {
            Some(GraphQLType::Object(obj)) => vec![obj.name()],
            Some(GraphQLType::Interface(iface)) => {
                self.types.values()
                    .filter_map(|t| t.as_object())
                    .filter(|obj| obj.interface_names().contains(&iface.name()))
                    .map(|obj| obj.name())
                    .collect()
            },
            Some(GraphQLType::Union(union_t)) => union_t.member_type_names(),
            _ => vec![],
        }
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// A schema may name some other object type as its query root
    /// (`schema { query: Root }`), so prefer this over looking up a type
    /// named `"Query"`.
    pub fn query_type(&self) -> &GraphQLType {
        self.query_type.deref(self)
            .expect("type is present in schema")
    }

    /// The root type for operations of the given kind, if the schema defines
    /// one.
    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&GraphQLType> {
        match kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => Some(self.query_type()),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.as_ref().map(|named_ref| {
            named_ref.deref(self)
                .expect("type is present in schema")
        })
    }
}
