use crate::document::InputValueKind;
use crate::test_utils;

// =============================================================================
// Definitions & uses
// =============================================================================

#[test]
fn unused_and_undefined_variables_are_reported() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "query Q($unused: Int, $used: Int) { intArg(value: $used) a: intArg(value: $missing) }",
    );

    let unused: Vec<_> = built.messages.with_code("5.8.4").collect();
    assert_eq!(unused.len(), 1);
    assert_eq!(unused[0].message(), "Variable `$unused` is never used in operation `Q`");

    let undefined: Vec<_> = built.messages.with_code("5.8.3").collect();
    assert_eq!(undefined.len(), 1);
    assert_eq!(undefined[0].message(), "Variable `$missing` is not defined by operation `Q`");

    assert_eq!(built.messages.len(), 2);
}

#[test]
fn undefined_variables_are_reported_once_per_operation() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "{ a: intArg(value: $missing) b: intArg(value: $missing) }",
    );

    let messages: Vec<_> = built.messages.iter().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].message(), "Variable `$missing` is not defined by the anonymous query");
}

#[test]
fn variables_used_through_fragments_count_as_used() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "query Q($cmd: DogCommand!) { dog { ...knowsCommand } }
        fragment knowsCommand on Dog { doesKnowCommand(dogCommand: $cmd) }",
    );

    assert!(built.messages.is_empty(), "{:?}", built.messages);
    let op_id = built.document.operations()["Q"];
    let var_id = built.document.part(op_id).unwrap_operation().variables()["cmd"];
    assert!(built.document.part(var_id).unwrap_variable().is_used());
}

#[test]
fn fragment_variables_must_be_defined_by_every_operation_that_spreads_them() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "query A($cmd: DogCommand!) { dog { ...knowsCommand } }
        query B { dog { ...knowsCommand } }
        fragment knowsCommand on Dog { doesKnowCommand(dogCommand: $cmd) }",
    );

    let messages: Vec<_> = built.messages.iter().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].code(), "5.8.3");
    assert_eq!(messages[0].message(), "Variable `$cmd` is not defined by operation `B`");
}

#[test]
fn references_in_the_operation_point_back_at_their_variable() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "query Q($v: Int) { intArg(value: $v) dog { ...f } }
        fragment f on Dog { isHouseTrained(atOtherHomes: $v) }",
    );
    let doc = &built.document;
    let var_id = doc.part(doc.operations()["Q"]).unwrap_operation().variables()["v"];

    let references: Vec<_> =
        doc.parts()
            .filter_map(|part| part.as_input_value())
            .filter_map(|value| match value.kind() {
                InputValueKind::VariableReference { variable, .. } => Some(*variable),
                _ => None,
            })
            .collect();

    // References inside fragments may be reached from several operations.
    assert_eq!(references, vec![Some(var_id), None]);
}

#[test]
fn only_the_first_duplicate_variable_is_checked_for_use() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "query Q($a: Int, $a: Int) { dog { name } }");

    assert_eq!(test_utils::codes(&built.messages), vec!["5.8.1", "5.8.4"]);
}

// =============================================================================
// Usages allowed
// =============================================================================

#[test]
fn incompatible_variable_types_are_reported() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "query Q($v: Int) { nonNullBoolean(flag: $v) }",
    );

    let messages: Vec<_> = built.messages.iter().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].code(), "5.8.5");
    assert_eq!(
        messages[0].message(),
        "Variable `$v` of type `Int` cannot be used where `Boolean!` is expected",
    );
}

#[test]
fn nullable_variables_need_a_default_for_non_null_positions() {
    let schema = test_utils::pets_schema();

    let without_default = test_utils::build(
        &schema,
        "query Q($v: Boolean) { nonNullBoolean(flag: $v) }",
    );
    assert_eq!(test_utils::codes(&without_default.messages), vec!["5.8.5"]);

    let with_default = test_utils::build(
        &schema,
        "query Q($v: Boolean = true) { nonNullBoolean(flag: $v) }",
    );
    assert!(with_default.messages.is_empty(), "{:?}", with_default.messages);

    let with_null_default = test_utils::build(
        &schema,
        "query Q($v: Boolean = null) { nonNullBoolean(flag: $v) }",
    );
    assert_eq!(test_utils::codes(&with_null_default.messages), vec!["5.8.5"]);
}

#[test]
fn argument_defaults_allow_nullable_variables() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "query Q($v: Boolean) { optionalBoolean(flag: $v) }",
    );

    assert!(built.messages.is_empty(), "{:?}", built.messages);
}

#[test]
fn list_variables_are_checked_item_by_item() {
    let schema = test_utils::pets_schema();

    let items = test_utils::build(
        &schema,
        "query Q($v: Boolean!) { booleanList(booleanListArg: [$v, true]) }",
    );
    assert!(items.messages.is_empty(), "{:?}", items.messages);

    let nullable_items = test_utils::build(
        &schema,
        "query Q($v: [Boolean]) { booleanList(booleanListArg: $v) }",
    );
    assert_eq!(test_utils::codes(&nullable_items.messages), vec!["5.8.5"]);
}

#[test]
fn incompatible_usages_inside_fragments_are_reported_per_operation() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "query A($v: Int) { dog { ...f } }
        query B($v: Int) { dog { ...f } }
        fragment f on Dog { isHouseTrained(atOtherHomes: $v) }",
    );

    assert_eq!(test_utils::codes(&built.messages), vec!["5.8.5", "5.8.5"]);
}
