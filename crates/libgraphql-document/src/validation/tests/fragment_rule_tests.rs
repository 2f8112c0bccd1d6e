use crate::test_utils;

#[test]
fn duplicate_fragment_names_are_reported() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "{ dog { ...f } } fragment f on Dog { name } fragment f on Dog { nickname }",
    );

    let messages: Vec<_> = built.messages.iter().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].code(), "5.5.1.1");
    assert_eq!(messages[0].message(), "There can be only one fragment named `f`");
}

#[test]
fn fragments_declared_before_their_spread_count_as_used() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "fragment f on Dog { name } { dog { ...f } }");

    assert!(built.messages.is_empty(), "{:?}", built.messages);
    let frag_id = built.document.named_fragments()["f"];
    assert!(built.document.part(frag_id).unwrap_named_fragment().is_referenced());
}

#[test]
fn fragments_only_spread_by_unused_fragments_count_as_used() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "{ dog { name } } fragment outer on Dog { ...inner } fragment inner on Dog { name }",
    );

    let messages: Vec<_> = built.messages.iter().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].message(), "Fragment `outer` is never used");
}

#[test]
fn spreads_of_undefined_fragments_are_reported() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "{ dog { ...missing } }");

    let messages: Vec<_> = built.messages.iter().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].code(), "5.5.2.1");
    assert_eq!(messages[0].message(), "Unknown fragment `missing`");
}

// =============================================================================
// Cycles
// =============================================================================

#[test]
fn each_fragment_cycle_is_reported_once() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "{ dog { ...a } }
        fragment a on Dog { name ...b }
        fragment b on Dog { nickname ...c }
        fragment c on Dog { barkVolume ...a }",
    );

    let messages: Vec<_> = built.messages.iter().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].code(), "5.5.2.2");
    assert_eq!(
        messages[0].message(),
        "Fragment spreads must not form cycles: ...a -> ...b -> ...c -> ...a",
    );
}

#[test]
fn distinct_cycles_are_reported_separately() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "{ dog { ...a ...x } }
        fragment a on Dog { ...a }
        fragment x on Dog { ...y }
        fragment y on Dog { ...x }",
    );

    assert_eq!(test_utils::codes(&built.messages), vec!["5.5.2.2", "5.5.2.2"]);
}

#[test]
fn diamond_shaped_spreads_are_not_cycles() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "{ dog { ...a ...b } }
        fragment a on Dog { ...c }
        fragment b on Dog { ...c }
        fragment c on Dog { name }",
    );

    assert!(built.messages.is_empty(), "{:?}", built.messages);
}

// =============================================================================
// Spread is possible
// =============================================================================

#[test]
fn inline_fragments_on_disjoint_types_are_reported() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, "{ dog { ... on Cat { meowVolume } } }");

    let messages: Vec<_> = built.messages.iter().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].code(), "5.5.2.3");
    assert_eq!(
        messages[0].message(),
        "Inline fragment cannot be spread here as objects of type `Dog` can never \
        be of type `Cat`",
    );
}

#[test]
fn named_fragments_on_disjoint_types_are_reported() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "{ human(id: 1) { ...catFields } } fragment catFields on Cat { meowVolume }",
    );

    let messages: Vec<_> = built.messages.iter().collect();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].message().starts_with("Fragment `catFields` cannot be spread here"));
}

#[test]
fn abstract_spreads_with_shared_possible_types_are_allowed() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(
        &schema,
        "{
            pet { ... on Dog { barkVolume } ...catOrDogFields }
            catOrDog { ... on Pet { name } }
            human(id: 1) { pets { ... on CatOrDog { __typename } } }
        }
        fragment catOrDogFields on CatOrDog { __typename }",
    );

    assert!(built.messages.is_empty(), "{:?}", built.messages);
}
