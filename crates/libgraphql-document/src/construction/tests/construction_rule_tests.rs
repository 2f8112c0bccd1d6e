use crate::test_utils;

// =============================================================================
// Definitions & operations
// =============================================================================

#[test]
fn type_system_definitions_are_rejected() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "type Foo { a: Int } scalar Bar");

    assert_eq!(test_utils::codes(&built.messages), vec!["5.1.1", "5.1.1"]);
    assert!(built.messages.iter().next().unwrap().message().contains("`type Foo`"));
    assert!(built.document.all_operations().is_empty());
}

#[test]
fn operation_without_root_type_is_reported_once() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "mutation { createDog(name: 1) { name } }");

    assert_eq!(test_utils::codes(&built.messages), vec!["5.2"]);
    assert_eq!(built.document.parts().count(), 1);
}

#[test]
fn operations_without_root_type_do_not_count_as_operations() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "{ dog { name } } mutation { createDog }");

    assert_eq!(test_utils::codes(&built.messages), vec!["5.2"]);
    assert_eq!(built.document.all_operations().len(), 1);
}

// =============================================================================
// Variables
// =============================================================================

#[test]
fn duplicate_variables_are_reported_once() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "query Q($a: Int, $a: Int) { intArg(value: $a) }");

    assert_eq!(test_utils::codes(&built.messages), vec!["5.8.1"]);
}

#[test]
fn variables_must_be_input_types() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "query Q($d: Dog, $u: Unknown, $ok: [FindDogInput!]) {
            dog { name }
            findDog(searchBy: { breed: \"x\" }) { name }
        }",
    );

    let messages: Vec<_> = built.messages.with_code("5.8.2").collect();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].message().contains("$d"));
    assert!(messages[1].message().contains("unknown type `Unknown`"));
}

// =============================================================================
// Fields
// =============================================================================

#[test]
fn undefined_fields_are_reported() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "{ dog { meowVolume } }");

    let messages: Vec<_> = built.messages.iter().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].code(), "5.3.1");
    assert_eq!(messages[0].message(), "Cannot query field `meowVolume` on type `Dog`");
}

#[test]
fn selections_beneath_an_undefined_field_are_not_reported() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "{ dog { kennel { size } } }");

    assert_eq!(test_utils::codes(&built.messages), vec!["5.3.1"]);
}

#[test]
fn leaf_fields_must_not_have_selections() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "{ dog { name { length } } }");

    assert_eq!(test_utils::codes(&built.messages), vec!["5.3.3"]);
}

#[test]
fn composite_fields_must_have_selections() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "{ dog human(id: 1) { name } }");

    let messages: Vec<_> = built.messages.iter().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].code(), "5.3.3");
    assert!(messages[0].message().contains("`dog`"));
}

#[test]
fn typename_is_selectable_on_unions() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "{ catOrDog { __typename ... on Cat { meowVolume } } }",
    );

    assert!(built.messages.is_empty(), "{:?}", built.messages);
}

// =============================================================================
// Fragments
// =============================================================================

#[test]
fn fragment_type_conditions_must_exist() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "{ dog { ...f ... on Ghost { name } } } fragment f on Spirit { name }",
    );

    assert_eq!(built.messages.with_code("5.5.1.2").count(), 2);
    assert_eq!(built.messages.with_code("5.3.1").count(), 0);
}

#[test]
fn fragments_must_be_on_composite_types() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "{ dog { ...f } } fragment f on DogCommand { name }",
    );

    let messages: Vec<_> = built.messages.with_code("5.5.1.3").collect();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].message().contains("`DogCommand` has kind Enum"));
}

// =============================================================================
// Arguments & directives
// =============================================================================

#[test]
fn undefined_arguments_are_reported() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "{ dog { name(bogus: 1) } pet @skip(if: true, unless: false) { name } }",
    );

    let messages: Vec<_> = built.messages.with_code("5.4.1").collect();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].message(), "Unknown argument `bogus` on field `Dog.name`");
    assert_eq!(messages[1].message(), "Unknown argument `unless` on directive `@skip`");
}

#[test]
fn arguments_of_undefined_fields_are_not_reported() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "{ dog { fetch(times: 2) } }");

    assert_eq!(test_utils::codes(&built.messages), vec!["5.3.1"]);
}

#[test]
fn undefined_directives_are_reported() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "{ dog @unknown { name } }");

    assert_eq!(test_utils::codes(&built.messages), vec!["5.7.1"]);
}

#[test]
fn directives_must_be_used_in_declared_locations() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "query Q @once { dog @once { ... on Dog @once { name } } }",
    );

    let messages: Vec<_> = built.messages.iter().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].code(), "5.7.2");
    assert_eq!(messages[0].message(), "Directive `@once` may not be used on INLINE_FRAGMENT");
}
