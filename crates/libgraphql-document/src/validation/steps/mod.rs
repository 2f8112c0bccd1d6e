//! The standard validation steps, and the packages they are grouped into.

mod argument_rules;
mod directive_rules;
mod field_rules;
mod fragment_rules;
mod operation_rules;
mod value_rules;
mod variable_rules;
mod variable_usages;

pub use argument_rules::ArgumentUniqueness;
pub use directive_rules::DirectivesAreUniquePerLocation;
pub use field_rules::FieldSelectionMerging;
pub use field_rules::RequiredArguments;
pub use fragment_rules::FragmentNameUniqueness;
pub use fragment_rules::FragmentSpreadIsPossible;
pub use fragment_rules::FragmentSpreadTargetDefined;
pub use fragment_rules::FragmentSpreadsMustNotFormCycles;
pub use fragment_rules::FragmentsMustBeUsed;
pub use operation_rules::LoneAnonymousOperation;
pub use operation_rules::OperationNameUniqueness;
pub use operation_rules::SubscriptionSingleRootField;
pub use value_rules::InputObjectFieldNames;
pub use value_rules::InputObjectRequiredFields;
pub use variable_rules::AllVariableUsagesAllowed;
pub use variable_rules::AllVariableUsesDefined;
pub use variable_rules::AllVariablesUsed;
pub use variable_rules::CollectVariableUsages;

use crate::document::PartKind;
use crate::rules::ValidationStep;

type Package = Vec<Box<dyn ValidationStep>>;

pub(crate) fn standard_packages() -> Vec<(PartKind, Package)> {
    vec![
        (PartKind::Document, vec![
            Box::new(OperationNameUniqueness),
            Box::new(LoneAnonymousOperation),
            Box::new(FragmentNameUniqueness),
            Box::new(FragmentSpreadsMustNotFormCycles),
            Box::new(FragmentsMustBeUsed),
        ]),
        (PartKind::Operation, vec![
            Box::new(CollectVariableUsages),
            Box::new(AllVariableUsesDefined),
            Box::new(AllVariableUsagesAllowed),
            Box::new(SubscriptionSingleRootField),
        ]),
        (PartKind::Variable, vec![
            Box::new(AllVariablesUsed),
        ]),
        (PartKind::SelectionSet, vec![
            Box::new(FieldSelectionMerging),
        ]),
        (PartKind::FieldSelection, vec![
            Box::new(RequiredArguments),
        ]),
        (PartKind::Argument, vec![
            Box::new(ArgumentUniqueness),
        ]),
        (PartKind::Directive, vec![
            Box::new(RequiredArguments),
            Box::new(DirectivesAreUniquePerLocation),
        ]),
        (PartKind::FragmentSpread, vec![
            Box::new(FragmentSpreadTargetDefined),
            Box::new(FragmentSpreadIsPossible),
        ]),
        (PartKind::InlineFragment, vec![
            Box::new(FragmentSpreadIsPossible),
        ]),
        (PartKind::InputValue, vec![
            Box::new(InputObjectFieldNames),
            Box::new(InputObjectRequiredFields),
        ]),
    ]
}
