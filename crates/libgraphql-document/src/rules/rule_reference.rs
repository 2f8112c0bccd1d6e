/// Identifies one validation rule from
/// [section 5 of the GraphQL spec](https://spec.graphql.org/October2021/#sec-Validation).
///
/// `code` is the number of the GraphQL section defining the rule. It is what
/// ends up in [`GraphQLMessage::code()`](crate::messages::GraphQLMessage::code)
/// and is stable across releases.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RuleReference {
    pub code: &'static str,
    pub title: &'static str,
    pub url: &'static str,
}

macro_rules! rule_references {
    ($($const_name:ident = $code:literal, $title:literal, $anchor:literal;)*) => {
        impl RuleReference {
            $(
                pub const $const_name: RuleReference = RuleReference {
                    code: $code,
                    title: $title,
                    url: concat!("https://spec.graphql.org/October2021/#", $anchor),
                };
            )*

            /// Every rule this crate knows how to check.
            pub const ALL: &'static [RuleReference] = &[$(Self::$const_name),*];
        }
    };
}

rule_references! {
    TOP_LEVEL_DEFINITIONS = "5.1.1", "top-level-definitions", "sec-Executable-Definitions";
    OPERATION_TYPE_EXISTS = "5.2", "operation-type-exists", "sec-Validation.Operations";
    OPERATION_NAME_UNIQUENESS = "5.2.1.1", "operation-name-uniqueness", "sec-Operation-Name-Uniqueness";
    LONE_ANONYMOUS_OPERATION = "5.2.2.1", "lone-anonymous-operation", "sec-Lone-Anonymous-Operation";
    SUBSCRIPTION_SINGLE_ROOT_FIELD = "5.2.3.1", "subscription-single-root-field", "sec-Single-root-field";
    FIELD_SELECTIONS_ON_TYPES = "5.3.1", "field-selections-on-types", "sec-Field-Selections";
    FIELD_SELECTION_MERGING = "5.3.2", "field-selection-merging", "sec-Field-Selection-Merging";
    LEAF_FIELD_SELECTIONS = "5.3.3", "leaf-field-selections", "sec-Leaf-Field-Selections";
    ARGUMENT_DEFINED = "5.4.1", "argument-defined", "sec-Argument-Names";
    ARGUMENT_UNIQUE = "5.4.2", "argument-unique", "sec-Argument-Uniqueness";
    REQUIRED_ARGUMENTS = "5.4.2.1", "required-arguments", "sec-Required-Arguments";
    FRAGMENT_NAME_UNIQUENESS = "5.5.1.1", "fragment-name-uniqueness", "sec-Fragment-Name-Uniqueness";
    FRAGMENT_TYPE_EXISTS = "5.5.1.2", "fragment-type-exists", "sec-Fragment-Spread-Type-Existence";
    FRAGMENT_ON_COMPOSITE_TYPE = "5.5.1.3", "fragment-on-composite-type", "sec-Fragments-On-Composite-Types";
    FRAGMENT_USED = "5.5.1.4", "fragment-used", "sec-Fragments-Must-Be-Used";
    FRAGMENT_SPREAD_TARGET_DEFINED = "5.5.2.1", "fragment-spread-target-defined", "sec-Fragment-spread-target-defined";
    FRAGMENT_SPREADS_ACYCLIC = "5.5.2.2", "fragment-spreads-acyclic", "sec-Fragment-spreads-must-not-form-cycles";
    FRAGMENT_SPREAD_POSSIBLE = "5.5.2.3", "fragment-spread-possible", "sec-Fragment-spread-is-possible";
    VALUES_OF_CORRECT_TYPE = "5.6.1", "values-of-correct-type", "sec-Values-of-Correct-Type";
    INPUT_OBJECT_FIELDS_EXIST = "5.6.2", "input-object-fields-exist", "sec-Input-Object-Field-Names";
    INPUT_OBJECT_REQUIRED_FIELDS_PRESENT = "5.6.4", "input-object-required-fields-present", "sec-Input-Object-Required-Fields";
    DIRECTIVE_DEFINED = "5.7.1", "directive-defined", "sec-Directives-Are-Defined";
    DIRECTIVE_LOCATION = "5.7.2", "directive-location", "sec-Directives-Are-In-Valid-Locations";
    DIRECTIVE_UNIQUE = "5.7.3", "directive-unique", "sec-Directives-Are-Unique-Per-Location";
    VARIABLE_UNIQUE = "5.8.1", "variable-unique", "sec-Variable-Uniqueness";
    VARIABLE_INPUT_TYPE = "5.8.2", "variable-input-type", "sec-Variables-Are-Input-Types";
    VARIABLE_DECLARED = "5.8.3", "variable-declared", "sec-All-Variable-Uses-Defined";
    VARIABLE_USED = "5.8.4", "variable-used", "sec-All-Variables-Used";
    VARIABLE_TYPE_COMPATIBLE = "5.8.5", "variable-type-compatible", "sec-All-Variable-Usages-are-Allowed";
}
impl std::fmt::Display for RuleReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.code)
    }
}
