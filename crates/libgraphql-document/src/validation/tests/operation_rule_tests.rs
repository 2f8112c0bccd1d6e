use crate::test_utils;

// =============================================================================
// Operation name uniqueness
// =============================================================================

#[test]
fn duplicate_operation_names_are_reported_once_each() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "query Q { dog { name } } query Q { pet { name } } query R { dog { name } }",
    );

    let messages: Vec<_> = built.messages.iter().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].code(), "5.2.1.1");
    assert_eq!(messages[0].message(), "There can be only one operation named `Q`");
    assert_eq!(built.document.all_operations().len(), 3);
    assert_eq!(built.document.operations().len(), 2);
}

// =============================================================================
// Lone anonymous operation
// =============================================================================

#[test]
fn anonymous_operation_alongside_a_named_one_is_reported() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "{ dog { name } } query Q { pet { name } }");

    let messages: Vec<_> = built.messages.iter().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].code(), "5.2.2.1");
    assert!(messages[0].message().contains("the document defines 2"));
}

#[test]
fn single_anonymous_operation_is_allowed() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "{ dog { name } }");

    assert!(built.messages.is_empty(), "{:?}", built.messages);
}

#[test]
fn each_anonymous_operation_is_reported() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "{ dog { name } } { pet { name } }");

    assert_eq!(test_utils::codes(&built.messages), vec!["5.2.2.1", "5.2.2.1"]);
}

// =============================================================================
// Subscription single root field
// =============================================================================

#[test]
fn subscription_with_two_root_fields_is_reported() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "subscription S { newMessage { body } disallowedSecondRootField }",
    );

    let messages: Vec<_> = built.messages.iter().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].code(), "5.2.3.1");
    assert_eq!(
        messages[0].message(),
        "Subscription `S` must select exactly one root field, but selects 2",
    );
}

#[test]
fn subscription_root_fields_are_counted_through_fragments() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "subscription S { ...root }
        fragment root on Subscription { newMessage { body } disallowedSecondRootField }",
    );

    assert_eq!(test_utils::codes(&built.messages), vec!["5.2.3.1"]);
}

#[test]
fn subscription_may_repeat_its_one_root_field() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "subscription { newMessage { body } ... on Subscription { newMessage { sender } } }",
    );

    assert!(built.messages.is_empty(), "{:?}", built.messages);
}

#[test]
fn subscription_may_not_select_typename_as_its_root_field() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "subscription S { __typename }");

    let messages: Vec<_> = built.messages.iter().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].code(), "5.2.3.1");
    assert!(messages[0].message().contains("introspection field `__typename`"));
}
