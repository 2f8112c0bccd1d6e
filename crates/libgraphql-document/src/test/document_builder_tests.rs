use crate::DocumentBuildError;
use crate::DocumentBuilder;
use crate::ReadContentError;
use crate::loc;
use crate::rules::RulePackageRegistryBuilder;
use crate::test_utils;
use proptest::prelude::*;
use rayon::prelude::IntoParallelIterator;
use rayon::prelude::ParallelIterator;
use std::path::PathBuf;

/// Exercises most rules at once, valid and invalid.
const MIXED_DOCUMENT: &str = r#"
    query Q($cmd: DogCommand!, $unused: Int) {
        dog {
            name
            name: nickname
            doesKnowCommand(dogCommand: $cmd)
            ...dogFields
            ... on Cat { meowVolume }
        }
        intArg(value: 1, value: 2)
        findDog(searchBy: { owner: "Sam" }) { name }
    }
    { pet { name } }
    fragment dogFields on Dog { barkVolume ...loop }
    fragment loop on Dog { ...dogFields }
    fragment unused on Dog { name }
"#;

fn temp_file_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "libgraphql-document-{}-{name}",
        std::process::id(),
    ))
}

// =============================================================================
// Entry points
// =============================================================================

#[test]
fn build_from_file_records_the_file_in_locations() {
    let schema = test_utils::pets_schema();
    let file_path = temp_file_path("undefined_field.graphql");
    std::fs::write(&file_path, "{\n  dog {\n    meowVolume\n  }\n}\n").unwrap();

    let built = DocumentBuilder::new(&schema).build_from_file(&file_path).unwrap();
    std::fs::remove_file(&file_path).unwrap();

    let messages: Vec<_> = built.messages.iter().collect();
    assert_eq!(messages.len(), 1);
    let loc::SourceLocation::ExecutableDocument(pos) = messages[0].location() else {
        panic!("unexpected location: {:?}", messages[0].location());
    };
    assert_eq!(pos.file.as_deref(), Some(&file_path));
    assert_eq!((pos.line, pos.col), (3, 5));
}

#[test]
fn build_from_file_reports_missing_files() {
    let schema = test_utils::pets_schema();
    let file_path = temp_file_path("does_not_exist.graphql");

    let result = DocumentBuilder::new(&schema).build_from_file(&file_path);

    assert!(matches!(
        result,
        Err(DocumentBuildError::DocumentFileReadError(err))
            if matches!(*err, ReadContentError::PathIsNotAFile(_)),
    ));
}

#[test]
fn syntax_errors_are_returned_as_errors() {
    let schema = test_utils::pets_schema();

    let result = DocumentBuilder::new(&schema).build_from_str("{ dog { name }", None);

    assert!(matches!(result, Err(DocumentBuildError::ParseError(_))));
}

#[test]
fn type_system_definitions_are_reported_not_rejected() {
    let schema = test_utils::pets_schema();

    let built =
        DocumentBuilder::new(&schema)
            .build_from_str("{ dog { name } }\ntype Foo { a: Int }", None)
            .unwrap();

    assert_eq!(test_utils::codes(&built.messages), vec!["5.1.1"]);
    assert_eq!(built.document.operations().len(), 1);
}

#[test]
fn build_from_ast_matches_build_from_str() {
    let schema = test_utils::pets_schema();
    let builder = DocumentBuilder::new(&schema);
    let source = "query Q($v: Int) { intArg(value: $v) }";
    let ast_doc = crate::ast::operation::parse(source).unwrap();

    assert_eq!(
        builder.build_from_ast(&ast_doc, source, None),
        builder.build_from_str(source, None).unwrap(),
    );
}

#[test]
fn custom_registries_replace_the_standard_packages() {
    let schema = test_utils::pets_schema();
    let empty = RulePackageRegistryBuilder::empty().build();

    let built =
        DocumentBuilder::new(&schema)
            .with_registry(&empty)
            .build_from_str("{ dog { meowVolume } }", None)
            .unwrap();

    assert!(built.messages.is_empty());
    assert_eq!(built.document.parts().count(), 1);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn mixed_document_reports_every_rule_it_breaks() {
    let schema = test_utils::pets_schema();
    let built = test_utils::build(&schema, MIXED_DOCUMENT);

    let mut codes = test_utils::codes(&built.messages);
    codes.sort();
    assert_eq!(codes, vec![
        "5.2.2.1",
        "5.3.2",
        "5.4.2",
        "5.5.1.4",
        "5.5.2.2",
        "5.5.2.3",
        "5.6.4",
        "5.8.4",
    ]);
}

#[test]
fn repeated_builds_are_identical() {
    let schema = test_utils::pets_schema();
    let first = test_utils::build(&schema, MIXED_DOCUMENT);
    let second = test_utils::build(&schema, MIXED_DOCUMENT);

    assert_eq!(first, second);
}

#[test]
fn concurrent_builds_share_schema_and_registry() {
    let schema = test_utils::pets_schema();
    let builder = DocumentBuilder::new(&schema);
    let expected = builder.build_from_str(MIXED_DOCUMENT, None).unwrap();

    let results: Vec<_> =
        (0..32)
            .into_par_iter()
            .map(|_| builder.build_from_str(MIXED_DOCUMENT, None).unwrap())
            .collect();

    for built in results {
        assert_eq!(built, expected);
    }
}

fn document_piece() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "query A { dog { name } }",
        "query A { pet { id } }",
        "query B($v: Int) { intArg(value: $v) }",
        "{ dog { ...f } }",
        "{ dog { meowVolume } }",
        "subscription S { newMessage { body } disallowedSecondRootField }",
        "mutation { x }",
        "fragment f on Dog { name ...g }",
        "fragment g on Dog { ...f }",
        "fragment h on Cat { meowVolume }",
    ])
}

proptest! {
    #[test]
    fn builds_are_deterministic(pieces in prop::collection::vec(document_piece(), 1..8)) {
        let source = pieces.join("\n");
        let schema = test_utils::pets_schema();
        let other_schema = test_utils::pets_schema();

        let first = test_utils::build(&schema, &source);
        let second = test_utils::build(&other_schema, &source);

        prop_assert_eq!(&first.messages, &second.messages);
        prop_assert_eq!(first.document.max_depth(), second.document.max_depth());
        let first_paths: Vec<_> = first.document.parts().map(|part| part.path()).collect();
        let second_paths: Vec<_> = second.document.parts().map(|part| part.path()).collect();
        prop_assert_eq!(first_paths, second_paths);
    }
}
