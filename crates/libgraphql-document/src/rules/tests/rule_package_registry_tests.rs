use crate::DocumentBuilder;
use crate::construction::ConstructionContext;
use crate::document::PartKind;
use crate::messages::GraphQLMessage;
use crate::messages::MessageSeverity;
use crate::rules::ConstructionStep;
use crate::rules::RulePackageRegistry;
use crate::rules::RulePackageRegistryBuilder;
use crate::rules::RuleReference;
use crate::rules::ValidationStep;
use crate::syntax::SyntaxNodeTag;
use crate::test_utils;
use crate::validation::ValidationContext;

/// Flags every selection of a field named `nickname`.
#[derive(Debug)]
struct NicknameIsDiscouraged;
impl ValidationStep for NicknameIsDiscouraged {
    fn name(&self) -> &'static str {
        "nickname-is-discouraged"
    }

    fn should_execute(&self, ctx: &ValidationContext<'_, '_>) -> bool {
        ctx.part().unwrap_field_selection().name() == "nickname"
    }

    fn execute(&self, ctx: &mut ValidationContext<'_, '_>) {
        let message = GraphQLMessage::new(
            MessageSeverity::Warning,
            &RuleReference::FIELD_SELECTIONS_ON_TYPES,
            "`nickname` is discouraged",
            ctx.part().location().to_owned(),
        );
        ctx.add_message(message);
    }
}

/// Never lets construction descend below a field.
#[derive(Debug)]
struct NoSubselections;
impl ConstructionStep for NoSubselections {
    fn name(&self) -> &'static str {
        "no-subselections"
    }

    fn execute(&self, _ctx: &mut ConstructionContext<'_, '_>) -> bool {
        false
    }

    fn should_allow_children(&self, _ctx: &ConstructionContext<'_, '_>) -> bool {
        false
    }
}

#[test]
fn standard_registry_has_a_package_for_every_value_tag() {
    let registry = RulePackageRegistry::shared();

    for tag in [
        SyntaxNodeTag::EnumValue,
        SyntaxNodeTag::ListValue,
        SyntaxNodeTag::NullValue,
        SyntaxNodeTag::ObjectValue,
        SyntaxNodeTag::ScalarValue,
        SyntaxNodeTag::VariableValue,
    ] {
        let names: Vec<_> = registry.construction_steps(tag).iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["create-input-value", "values-of-correct-type"]);
    }
}

#[test]
fn structural_steps_come_first() {
    let registry = RulePackageRegistry::shared();

    let field_steps = registry.construction_steps(SyntaxNodeTag::Field);
    assert_eq!(field_steps[0].name(), "create-field-selection");
    let operation_steps = registry.validation_steps(PartKind::Operation);
    assert_eq!(operation_steps[0].name(), "collect-variable-usages");
}

#[test]
fn unregistered_tags_have_empty_packages() {
    let registry = RulePackageRegistryBuilder::empty().build();

    assert!(registry.construction_steps(SyntaxNodeTag::Field).is_empty());
    assert!(registry.validation_steps(PartKind::Document).is_empty());
}

#[test]
fn removed_step_no_longer_reports() {
    let schema = test_utils::pets_schema();
    let registry = RulePackageRegistry::builder()
        .remove_validation_step(PartKind::Argument, "argument-uniqueness")
        .build();

    let built = DocumentBuilder::new(&schema)
        .with_registry(&registry)
        .build_from_str("{ dog { isHouseTrained(atOtherHomes: true, atOtherHomes: false) } }", None)
        .unwrap();

    assert_eq!(built.messages.with_code("5.4.2").count(), 0);
}

#[test]
fn added_validation_step_runs_after_standard_steps() {
    let schema = test_utils::pets_schema();
    let registry = RulePackageRegistry::builder()
        .add_validation_step(PartKind::FieldSelection, NicknameIsDiscouraged)
        .build();

    let built = DocumentBuilder::new(&schema)
        .with_registry(&registry)
        .build_from_str("{ dog { name nickname } }", None)
        .unwrap();

    assert_eq!(built.messages.len(), 1);
    assert_eq!(built.messages.severity(), Some(MessageSeverity::Warning));
    assert!(built.messages.is_success());
}

#[test]
fn any_vetoing_step_skips_children() {
    let schema = test_utils::pets_schema();
    let registry = RulePackageRegistry::builder()
        .add_construction_step(SyntaxNodeTag::Field, NoSubselections)
        .build();

    let built = DocumentBuilder::new(&schema)
        .with_registry(&registry)
        .build_from_str("{ dog { name } }", None)
        .unwrap();

    let field_names: Vec<_> =
        built.document.parts()
            .filter_map(|part| part.as_field_selection())
            .map(|field| field.name())
            .collect();
    assert_eq!(field_names, vec!["dog"]);
}
