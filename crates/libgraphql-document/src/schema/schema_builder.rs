use crate::ast;
use crate::document::OperationKind;
use crate::file_reader;
use crate::loc;
use crate::schema::Schema;
use crate::types::DirectiveDefinition;
use crate::types::DirectiveLocation;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_DIRECTIVE_NAMES: [&str; 4] = [
    "deprecated",
    "include",
    "skip",
    "specifiedBy",
];

#[derive(Clone, Debug, PartialEq)]
struct NamedTypeDefLocation {
    def_location: loc::SourceLocation,
    type_name: String,
}

/// Utility for building a [`Schema`] from SDL text or files.
///
/// Type extensions are not supported; each type must be fully described by
/// a single definition.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, DirectiveDefinition>,
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.inject_missing_builtin_directives();
        self.check_type_references()?;

        let query_type =
            Self::resolve_root_type(
                &self.types,
                OperationKind::Query,
                self.query_type.take(),
            )?.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = Self::resolve_root_type(
            &self.types,
            OperationKind::Mutation,
            self.mutation_type.take(),
        )?;
        let subscription_type = Self::resolve_root_type(
            &self.types,
            OperationKind::Subscription,
            self.subscription_type.take(),
        )?;

        Ok(Schema {
            directive_defs: self.directive_defs,
            mutation_type,
            query_type,
            subscription_type,
            typename_field: Field {
                def_location: loc::SourceLocation::GraphQLBuiltIn,
                name: "__typename".to_string(),
                parameters: IndexMap::new(),
                parent_type_name: String::new(),
                type_annotation: builtin_type_annotation("String", false),
            },
            types: self.types,
        })
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        let line_index = loc::LineIndex::new(content);
        let mut visitor = DefinitionVisitor {
            builder: &mut self,
            file_path: file_path.as_path(),
            line_index: &line_index,
        };
        for def in &ast_doc.definitions {
            visitor.visit_definition(def)?;
        }

        Ok(self)
    }

    pub fn new() -> Self {
        Self {
            directive_defs: IndexMap::new(),
            mutation_type: None,
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    fn check_type_references(&self) -> Result<()> {
        let field_annots =
            self.types.values()
                .filter_map(|t| t.fields())
                .flat_map(|fields| fields.values())
                .flat_map(|field| {
                    std::iter::once(&field.type_annotation)
                        .chain(field.parameters.values().map(|p| &p.type_annotation))
                });
        let input_field_annots =
            self.types.values()
                .filter_map(|t| t.as_input_object())
                .flat_map(|t| t.fields().values())
                .map(|p| &p.type_annotation);
        let directive_param_annots =
            self.directive_defs.values()
                .flat_map(|d| d.parameters.values())
                .map(|p| &p.type_annotation);

        for annot in field_annots.chain(input_field_annots).chain(directive_param_annots) {
            let type_name = annot.innermost_type_name();
            if !self.types.contains_key(type_name) {
                return Err(SchemaBuildError::UndefinedTypeReference {
                    location: annot.ref_location().to_owned(),
                    type_name: type_name.to_string(),
                });
            }
        }

        for type_ in self.types.values() {
            if let Some(union_t) = type_.as_union() {
                for member_name in union_t.member_type_names() {
                    if self.types.get(member_name).and_then(|t| t.as_object()).is_none() {
                        return Err(SchemaBuildError::InvalidUnionMember {
                            member_name: member_name.to_string(),
                            union_name: union_t.name().to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    fn inject_missing_builtin_directives(&mut self) {
        let field_and_fragments = vec![
            DirectiveLocation::Field,
            DirectiveLocation::FragmentSpread,
            DirectiveLocation::InlineFragment,
        ];

        for name in ["skip", "include"] {
            self.directive_defs.entry(name.to_string()).or_insert_with(|| {
                builtin_directive(
                    name,
                    field_and_fragments.clone(),
                    vec![builtin_parameter("if", "Boolean", false, None)],
                )
            });
        }

        self.directive_defs.entry("deprecated".to_string()).or_insert_with(|| {
            builtin_directive(
                "deprecated",
                vec![
                    DirectiveLocation::ArgumentDefinition,
                    DirectiveLocation::EnumValue,
                    DirectiveLocation::FieldDefinition,
                    DirectiveLocation::InputFieldDefinition,
                ],
                vec![builtin_parameter(
                    "reason",
                    "String",
                    true,
                    Some(ast::operation::Value::String("No longer supported".to_string())),
                )],
            )
        });

        self.directive_defs.entry("specifiedBy".to_string()).or_insert_with(|| {
            builtin_directive(
                "specifiedBy",
                vec![DirectiveLocation::Scalar],
                vec![builtin_parameter("url", "String", false, None)],
            )
        });
    }

    fn resolve_root_type(
        types: &IndexMap<String, GraphQLType>,
        operation: OperationKind,
        explicit_def: Option<NamedTypeDefLocation>,
    ) -> Result<Option<NamedGraphQLTypeRef>> {
        let explicitly_named = explicit_def.is_some();
        let def = explicit_def.unwrap_or_else(|| NamedTypeDefLocation {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            type_name: operation.default_root_type_name().to_string(),
        });

        match types.get(def.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Ok(Some(NamedGraphQLTypeRef::new(
                def.type_name,
                def.def_location,
            ))),

            Some(_) if explicitly_named => Err(SchemaBuildError::RootOperationTypeNotAnObject {
                operation,
                type_name: def.type_name,
            }),

            None if explicitly_named => Err(SchemaBuildError::UndefinedRootOperationType {
                operation,
                type_name: def.type_name,
            }),

            _ => Ok(None),
        }
    }
}
impl std::default::Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

struct DefinitionVisitor<'a, 'src> {
    builder: &'a mut SchemaBuilder,
    file_path: &'a Path,
    line_index: &'a loc::LineIndex<'src>,
}
impl DefinitionVisitor<'_, '_> {
    fn location(&self, pos: &ast::AstPos) -> loc::SourceLocation {
        loc::SourceLocation::Schema(loc::FilePosition::from_pos(
            Some(self.file_path),
            pos,
            self.line_index,
        ))
    }

    fn parameters(
        &self,
        input_values: &[ast::schema::InputValue],
    ) -> Result<IndexMap<String, Parameter>> {
        let mut params = IndexMap::new();
        for input_value in input_values {
            let location = self.location(&input_value.position);
            let param = Parameter {
                def_location: location.to_owned(),
                default_value: input_value.default_value.clone(),
                name: input_value.name.to_string(),
                type_annotation: TypeAnnotation::from_ast_type(
                    &location,
                    &input_value.value_type,
                ),
            };
            if let Some(existing) = params.insert(input_value.name.to_string(), param) {
                return Err(SchemaBuildError::DuplicateInputValueDefinition {
                    name: input_value.name.to_string(),
                    location1: existing.def_location,
                    location2: location,
                });
            }
        }
        Ok(params)
    }

    fn fields(
        &self,
        parent_type_name: &str,
        ast_fields: &[ast::schema::Field],
    ) -> Result<IndexMap<String, Field>> {
        let mut fields = IndexMap::new();
        for ast_field in ast_fields {
            let location = self.location(&ast_field.position);
            let field = Field {
                def_location: location.to_owned(),
                name: ast_field.name.to_string(),
                parameters: self.parameters(&ast_field.arguments)?,
                parent_type_name: parent_type_name.to_string(),
                type_annotation: TypeAnnotation::from_ast_type(
                    &location,
                    &ast_field.field_type,
                ),
            };
            if let Some(existing) = fields.insert(ast_field.name.to_string(), field) {
                return Err(SchemaBuildError::DuplicateFieldDefinition {
                    field_name: ast_field.name.to_string(),
                    location1: existing.def_location,
                    location2: location,
                    type_name: parent_type_name.to_string(),
                });
            }
        }
        Ok(fields)
    }

    fn visit_definition(&mut self, def: &ast::schema::Definition) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_directive_def(directive_def),
            Definition::SchemaDefinition(schema_def) =>
                self.visit_schema_def(schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_type_def(type_def),
            Definition::TypeExtension(type_ext) =>
                Err(SchemaBuildError::UnsupportedTypeExtension {
                    type_name: type_extension_name(type_ext).to_string(),
                }),
        }
    }

    fn visit_directive_def(
        &mut self,
        def: &ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let location = self.location(&def.position);

        if BUILTIN_DIRECTIVE_NAMES.contains(&def.name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: def.name.to_string(),
                location,
            });
        }

        if def.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                def_location: location,
                directive_name: def.name.to_string(),
            });
        }

        if let Some(existing) = self.builder.directive_defs.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.to_string(),
                location1: existing.def_location.to_owned(),
                location2: location,
            });
        }

        let directive_def = DirectiveDefinition {
            def_location: location,
            locations: def.locations.iter()
                .filter_map(DirectiveLocation::from_ast)
                .collect(),
            name: def.name.to_string(),
            parameters: self.parameters(&def.arguments)?,
            repeatable: def.repeatable,
        };
        self.builder.directive_defs.insert(def.name.to_string(), directive_def);
        Ok(())
    }

    fn visit_schema_def(&mut self, schema_def: &ast::schema::SchemaDefinition) -> Result<()> {
        let location = self.location(&schema_def.position);
        let roots = [
            (OperationKind::Query, &schema_def.query),
            (OperationKind::Mutation, &schema_def.mutation),
            (OperationKind::Subscription, &schema_def.subscription),
        ];

        for (operation, type_name) in roots {
            let Some(type_name) = type_name else {
                continue;
            };
            let slot = match operation {
                OperationKind::Mutation => &mut self.builder.mutation_type,
                OperationKind::Query => &mut self.builder.query_type,
                OperationKind::Subscription => &mut self.builder.subscription_type,
            };
            if let Some(existing) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    location1: existing.def_location.to_owned(),
                    location2: location,
                    operation,
                });
            }
            *slot = Some(NamedTypeDefLocation {
                def_location: location.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        Ok(())
    }

    fn visit_type_def(&mut self, type_def: &ast::schema::TypeDefinition) -> Result<()> {
        use ast::schema::TypeDefinition;
        let (name, location, type_) = match type_def {
            TypeDefinition::Enum(enum_def) => {
                let location = self.location(&enum_def.position);
                let values = enum_def.values.iter().map(|value| {
                    (value.name.to_string(), EnumValue {
                        def_location: self.location(&value.position),
                        name: value.name.to_string(),
                    })
                }).collect();
                (&enum_def.name, location.to_owned(), GraphQLType::Enum(Box::new(EnumType {
                    def_location: location,
                    name: enum_def.name.to_string(),
                    values,
                })))
            },

            TypeDefinition::InputObject(input_def) => {
                let location = self.location(&input_def.position);
                (&input_def.name, location.to_owned(), GraphQLType::InputObject(Box::new(InputObjectType {
                    def_location: location,
                    fields: self.parameters(&input_def.fields)?,
                    name: input_def.name.to_string(),
                })))
            },

            TypeDefinition::Interface(iface_def) => {
                let location = self.location(&iface_def.position);
                (&iface_def.name, location.to_owned(), GraphQLType::Interface(Box::new(InterfaceType(
                    ObjectOrInterfaceTypeData {
                        def_location: location,
                        fields: self.fields(&iface_def.name, &iface_def.fields)?,
                        interface_names: iface_def.implements_interfaces.clone(),
                        name: iface_def.name.to_string(),
                    },
                ))))
            },

            TypeDefinition::Object(obj_def) => {
                let location = self.location(&obj_def.position);
                (&obj_def.name, location.to_owned(), GraphQLType::Object(Box::new(ObjectType(
                    ObjectOrInterfaceTypeData {
                        def_location: location,
                        fields: self.fields(&obj_def.name, &obj_def.fields)?,
                        interface_names: obj_def.implements_interfaces.clone(),
                        name: obj_def.name.to_string(),
                    },
                ))))
            },

            TypeDefinition::Scalar(scalar_def) => {
                let location = self.location(&scalar_def.position);
                (&scalar_def.name, location.to_owned(), GraphQLType::Scalar(Box::new(ScalarType {
                    def_location: location,
                    name: scalar_def.name.to_string(),
                })))
            },

            TypeDefinition::Union(union_def) => {
                let location = self.location(&union_def.position);
                (&union_def.name, location.to_owned(), GraphQLType::Union(Box::new(UnionType {
                    def_location: location,
                    member_type_names: union_def.types.clone(),
                    name: union_def.name.to_string(),
                })))
            },
        };

        if name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: location,
                type_name: name.to_string(),
            });
        }

        if let Some(existing) = self.builder.types.get(name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                def1: existing.def_location().to_owned(),
                def2: location,
                type_name: name.to_string(),
            });
        }

        self.builder.types.insert(name.to_string(), type_);
        Ok(())
    }
}

fn builtin_directive(
    name: &str,
    locations: Vec<DirectiveLocation>,
    parameters: Vec<Parameter>,
) -> DirectiveDefinition {
    DirectiveDefinition {
        def_location: loc::SourceLocation::GraphQLBuiltIn,
        locations,
        name: name.to_string(),
        parameters: parameters.into_iter()
            .map(|param| (param.name.to_owned(), param))
            .collect(),
        repeatable: false,
    }
}

fn builtin_parameter(
    name: &str,
    type_name: &str,
    nullable: bool,
    default_value: Option<ast::operation::Value>,
) -> Parameter {
    Parameter {
        def_location: loc::SourceLocation::GraphQLBuiltIn,
        default_value,
        name: name.to_string(),
        type_annotation: builtin_type_annotation(type_name, nullable),
    }
}

fn builtin_type_annotation(type_name: &str, nullable: bool) -> TypeAnnotation {
    TypeAnnotation::Named(NamedTypeAnnotation {
        nullable,
        type_ref: NamedGraphQLTypeRef::new(
            type_name,
            loc::SourceLocation::GraphQLBuiltIn,
        ),
    })
}

fn type_extension_name(type_ext: &ast::schema::TypeExtension) -> &str {
    use ast::schema::TypeExtension;
    match type_ext {
        TypeExtension::Enum(ext) => ext.name.as_str(),
        TypeExtension::InputObject(ext) => ext.name.as_str(),
        TypeExtension::Interface(ext) => ext.name.as_str(),
        TypeExtension::Object(ext) => ext.name.as_str(),
        TypeExtension::Scalar(ext) => ext.name.as_str(),
        TypeExtension::Union(ext) => ext.name.as_str(),
    }
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the same name: `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("The field `{type_name}.{field_name}` was defined more than once")]
    DuplicateFieldDefinition {
        field_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
        type_name: String,
    },

    #[error("The input value `{name}` was defined more than once")]
    DuplicateInputValueDefinition {
        name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("The {operation} root operation type was defined more than once")]
    DuplicateOperationDefinition {
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
        operation: OperationKind,
    },

    #[error("Multiple GraphQL types with the same name were defined: `{type_name}`")]
    DuplicateTypeDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        type_name: String,
    },

    #[error("Directive names must not start with `__`: `@{directive_name}`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: loc::SourceLocation,
        directive_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("The union `{union_name}` lists `{member_name}`, which is not an object type")]
    InvalidUnionMember {
        member_name: String,
        union_name: String,
    },

    #[error("No query root operation type was defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema document {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Built-in directives cannot be redefined: `@{directive_name}`")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("The {operation} root operation type `{type_name}` is not an object type")]
    RootOperationTypeNotAnObject {
        operation: OperationKind,
        type_name: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error("The {operation} root operation type `{type_name}` is not defined")]
    UndefinedRootOperationType {
        operation: OperationKind,
        type_name: String,
    },

    #[error("Reference to a type that is not defined: `{type_name}`")]
    UndefinedTypeReference {
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Type extensions are not supported: `extend ... {type_name}`")]
    UnsupportedTypeExtension {
        type_name: String,
    },
}
