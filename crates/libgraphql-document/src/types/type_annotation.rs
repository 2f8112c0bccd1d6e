use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ListTypeAnnotation;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;

/// The nullability/list-wrapping signature of a type usage site: the
/// declared type of a [`Field`](crate::types::Field),
/// [`Parameter`](crate::types::Parameter), or operation variable.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub(crate) fn from_ast_type(
        location: &loc::SourceLocation,
        ast_type: &ast::operation::Type,
    ) -> Self {
        Self::from_ast_type_impl(location, ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        location: &loc::SourceLocation,
        ast_type: &ast::operation::Type,
        nullable: bool,
    ) -> Self {
        match ast_type {
            ast::operation::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner_type_ref: Box::new(Self::from_ast_type_impl(
                        location,
                        inner,
                        true,
                    )),
                    nullable,
                    ref_location: location.to_owned(),
                }),

            ast::operation::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    type_ref: NamedGraphQLTypeRef::new(
                        name,
                        location.to_owned(),
                    ),
                }),

            ast::operation::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(location, inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(ListTypeAnnotation { inner_type_ref, .. })
                => inner_type_ref.innermost_named_type_annotation(),
            Self::Named(named_annot)
                => named_annot,
        }
    }

    /// Name of the type at the core of all list wrappers.
    pub fn innermost_type_name(&self) -> &str {
        self.innermost_named_type_annotation().graphql_type_name()
    }

    /// Resolve the inner-most named type against the `schema`. `None` when
    /// the named type is not defined there.
    pub fn innermost_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        schema.lookup_type(self.innermost_type_name())
    }

    /// Check if two type annotations are definitionally equal: same list
    /// structure, same nullability at every level, and same inner-most type
    /// name. Source locations are ignored.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(self_list), Self::List(other_list))
                => self_list.is_equivalent_to(other_list),
            (Self::Named(self_named), Self::Named(other_named))
                => self_named.is_equivalent_to(other_named),
            _ => false,
        }
    }

    /// Whether a variable declared with this type may be passed to a
    /// location expecting `location_type`.
    ///
    /// <https://spec.graphql.org/October2021/#AreTypesCompatible()>
    pub fn is_compatible_with_usage(&self, location_type: &Self) -> bool {
        Self::are_types_compatible(
            self,
            self.nullable(),
            location_type,
            location_type.nullable(),
        )
    }

    fn are_types_compatible(
        variable_type: &Self,
        variable_nullable: bool,
        location_type: &Self,
        location_nullable: bool,
    ) -> bool {
        if !location_nullable {
            if variable_nullable {
                return false;
            }
            return Self::are_types_compatible(
                variable_type,
                true,
                location_type,
                true,
            );
        }

        if !variable_nullable {
            return Self::are_types_compatible(
                variable_type,
                true,
                location_type,
                location_nullable,
            );
        }

        match (variable_type, location_type) {
            (Self::List(variable_list), Self::List(location_list)) => {
                let variable_item = variable_list.inner_type_annotation();
                let location_item = location_list.inner_type_annotation();
                Self::are_types_compatible(
                    variable_item,
                    variable_item.nullable(),
                    location_item,
                    location_item.nullable(),
                )
            },
            (Self::Named(_), Self::List(_)) | (Self::List(_), Self::Named(_))
                => false,
            (Self::Named(variable_named), Self::Named(location_named))
                => variable_named.graphql_type_name() == location_named.graphql_type_name(),
        }
    }

    /// The type expected for each item of a list-typed location. `None` when
    /// this annotation is not a list.
    pub fn list_item_type(&self) -> Option<&TypeAnnotation> {
        self.as_list_annotation().map(|list| list.inner_type_annotation())
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            Self::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }

    /// The [`SourceLocation`](loc::SourceLocation) where this annotation was
    /// written.
    pub fn ref_location(&self) -> &loc::SourceLocation {
        match self {
            Self::List(annot) => annot.ref_location(),
            Self::Named(annot) => annot.ref_location(),
        }
    }

    /// A copy of this annotation with its outer-most nullability replaced.
    pub fn with_nullable(&self, nullable: bool) -> Self {
        let mut annot = self.clone();
        match &mut annot {
            Self::List(list) => list.nullable = nullable,
            Self::Named(named) => named.nullable = nullable,
        }
        annot
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
