use crate::construction::ConstructionPipeline;
use crate::document::Document;
use crate::document::PartKind;
use crate::messages::MessageCollection;
use crate::rules::RulePackageRegistry;
use crate::schema::Schema;
use crate::syntax::SyntaxTree;
use crate::test_utils;

fn construct<'schema>(
    schema: &'schema Schema,
    source: &str,
) -> (Document<'schema>, MessageCollection) {
    let tree = SyntaxTree::parse(source, None).unwrap();
    let mut document = Document::new();
    let mut messages = MessageCollection::new();
    ConstructionPipeline::new(RulePackageRegistry::shared())
        .run(schema, &tree, &mut document, &mut messages);
    (document, messages)
}

fn kinds(doc: &Document<'_>) -> Vec<PartKind> {
    doc.parts().map(|part| part.kind()).collect()
}

#[test]
fn parts_are_appended_in_syntax_pre_order() {
    let schema = test_utils::pets_schema();
    let (doc, messages) = construct(&schema, "query Q($v: Boolean) { dog { isHouseTrained(atOtherHomes: $v) } }");

    assert!(messages.is_empty(), "{messages:?}");
    assert_eq!(kinds(&doc), vec![
        PartKind::Document,
        PartKind::Operation,
        PartKind::Variable,
        PartKind::SelectionSet,
        PartKind::FieldSelection,
        PartKind::SelectionSet,
        PartKind::FieldSelection,
        PartKind::Argument,
        PartKind::InputValue,
    ]);
}

#[test]
fn spreads_are_not_linked_until_construction_finishes() {
    let schema = test_utils::pets_schema();
    let (mut doc, _) = construct(&schema, "{ dog { ...f } } fragment f on Dog { name }");

    let spread_id =
        doc.parts()
            .find(|part| part.kind() == PartKind::FragmentSpread)
            .map(|part| part.id())
            .unwrap();
    assert_eq!(doc.part(spread_id).unwrap_fragment_spread().fragment(), None);

    doc.link_fragment_spreads();
    assert_eq!(
        doc.part(spread_id).unwrap_fragment_spread().fragment(),
        Some(doc.named_fragments()["f"]),
    );
}

#[test]
fn selection_scope_is_restored_after_each_subtree() {
    let schema = test_utils::pets_schema();
    let (doc, messages) = construct(&schema, "{ dog { owner { name } name } pet { name } }");

    assert!(messages.is_empty(), "{messages:?}");
    let owners: Vec<_> =
        doc.parts()
            .filter_map(|part| part.as_field_selection())
            .map(|field| (field.name(), field.owner_type_name().unwrap_or_default()))
            .collect();
    assert_eq!(owners, vec![
        ("dog", "Query"),
        ("owner", "Dog"),
        ("name", "Human"),
        ("name", "Dog"),
        ("pet", "Query"),
        ("name", "Pet"),
    ]);
}

#[test]
fn inline_fragment_without_condition_inherits_the_scope() {
    let schema = test_utils::pets_schema();
    let (doc, messages) = construct(&schema, "{ pet { ... { name } } }");

    assert!(messages.is_empty(), "{messages:?}");
    let name =
        doc.parts()
            .filter_map(|part| part.as_field_selection())
            .find(|field| field.name() == "name")
            .unwrap();
    assert_eq!(name.owner_type_name(), Some("Pet"));
    assert!(name.field().is_some());
}

#[test]
fn structural_failure_skips_the_subtree_and_continues() {
    let schema = test_utils::pets_schema();
    let (doc, messages) = construct(
        &schema,
        "mutation M { doSomething } query Q { dog { name } }",
    );

    assert_eq!(test_utils::codes(&messages), vec!["5.2"]);
    assert_eq!(doc.all_operations().len(), 1);
    assert_eq!(doc.operations().keys().collect::<Vec<_>>(), vec!["Q"]);
}
