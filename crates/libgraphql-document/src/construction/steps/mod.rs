//! The standard construction steps, and the packages they are grouped into.

mod argument_rules;
mod definition_rules;
mod directive_rules;
mod field_rules;
mod fragment_rules;
mod structural;
mod value_rules;
mod variable_rules;

pub use argument_rules::ArgumentNames;
pub use definition_rules::ExecutableDefinitions;
pub use definition_rules::OperationTypeExists;
pub use directive_rules::DirectivesAreDefined;
pub use directive_rules::DirectivesAreInValidLocations;
pub use field_rules::FieldSelectionsOnTypes;
pub use field_rules::LeafFieldSelections;
pub use fragment_rules::FragmentOnCompositeType;
pub use fragment_rules::FragmentTypeExists;
pub use structural::CreateDirective;
pub use structural::CreateFieldSelection;
pub use structural::CreateFragmentSpread;
pub use structural::CreateInlineFragment;
pub use structural::CreateInputArgument;
pub use structural::CreateInputValue;
pub use structural::CreateNamedFragment;
pub use structural::CreateOperation;
pub use structural::CreateVariable;
pub use structural::OpenSelectionSet;
pub use value_rules::ValuesOfCorrectType;
pub use variable_rules::VariableUniqueness;
pub use variable_rules::VariablesAreInputTypes;

use crate::rules::ConstructionStep;
use crate::syntax::SyntaxNodeTag;

type Package = Vec<Box<dyn ConstructionStep>>;

/// Structural steps come first in every package.
pub(crate) fn standard_packages() -> Vec<(SyntaxNodeTag, Package)> {
    let mut packages: Vec<(SyntaxNodeTag, Package)> = vec![
        (SyntaxNodeTag::TypeSystemDefinition, vec![
            Box::new(ExecutableDefinitions),
        ]),
        (SyntaxNodeTag::Operation, vec![
            Box::new(CreateOperation),
            Box::new(OperationTypeExists),
        ]),
        (SyntaxNodeTag::VariableDefinition, vec![
            Box::new(CreateVariable),
            Box::new(VariableUniqueness),
            Box::new(VariablesAreInputTypes),
        ]),
        (SyntaxNodeTag::SelectionSet, vec![
            Box::new(OpenSelectionSet),
        ]),
        (SyntaxNodeTag::Field, vec![
            Box::new(CreateFieldSelection),
            Box::new(FieldSelectionsOnTypes),
            Box::new(LeafFieldSelections),
        ]),
        (SyntaxNodeTag::FragmentDefinition, vec![
            Box::new(CreateNamedFragment),
            Box::new(FragmentTypeExists),
            Box::new(FragmentOnCompositeType),
        ]),
        (SyntaxNodeTag::InlineFragment, vec![
            Box::new(CreateInlineFragment),
            Box::new(FragmentTypeExists),
            Box::new(FragmentOnCompositeType),
        ]),
        (SyntaxNodeTag::FragmentSpread, vec![
            Box::new(CreateFragmentSpread),
        ]),
        (SyntaxNodeTag::Argument, vec![
            Box::new(CreateInputArgument),
            Box::new(ArgumentNames),
        ]),
        (SyntaxNodeTag::Directive, vec![
            Box::new(CreateDirective),
            Box::new(DirectivesAreDefined),
            Box::new(DirectivesAreInValidLocations),
        ]),
    ];

    for value_tag in [
        SyntaxNodeTag::EnumValue,
        SyntaxNodeTag::ListValue,
        SyntaxNodeTag::NullValue,
        SyntaxNodeTag::ObjectValue,
        SyntaxNodeTag::ScalarValue,
        SyntaxNodeTag::VariableValue,
    ] {
        packages.push((value_tag, vec![
            Box::new(CreateInputValue),
            Box::new(ValuesOfCorrectType),
        ]));
    }

    packages
}
