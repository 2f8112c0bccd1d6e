use crate::loc;
use crate::messages::GraphQLMessage;
use crate::messages::MessageCollection;
use crate::messages::MessageSeverity;
use crate::messages::ValueCoercionError;
use crate::rules::RuleReference;
use std::path::PathBuf;

fn position(line: usize, col: usize) -> loc::SourceLocation {
    loc::SourceLocation::ExecutableDocument(loc::FilePosition {
        byte_offset: 0,
        col,
        file: Some(Box::new(PathBuf::from("query.graphql"))),
        line,
    })
}

#[test]
fn empty_collection_is_successful_with_no_severity() {
    let messages = MessageCollection::new();

    assert!(messages.is_empty());
    assert!(messages.is_success());
    assert_eq!(messages.severity(), None);
}

#[test]
fn severity_is_the_highest_recorded() {
    let mut messages = MessageCollection::new();
    messages.add(GraphQLMessage::new(
        MessageSeverity::Warning,
        &RuleReference::VARIABLE_USED,
        "warn",
        loc::SourceLocation::Unknown,
    ));
    assert_eq!(messages.severity(), Some(MessageSeverity::Warning));
    assert!(messages.is_success());

    messages.add(GraphQLMessage::critical(
        &RuleReference::ARGUMENT_UNIQUE,
        "dup",
        loc::SourceLocation::Unknown,
    ));
    messages.add(GraphQLMessage::new(
        MessageSeverity::Info,
        &RuleReference::FRAGMENT_USED,
        "info",
        loc::SourceLocation::Unknown,
    ));
    assert_eq!(messages.severity(), Some(MessageSeverity::Critical));
    assert!(!messages.is_success());
    assert_eq!(messages.len(), 3);
}

#[test]
fn with_code_filters_in_insertion_order() {
    let mut messages = MessageCollection::new();
    for text in ["first", "other", "second"] {
        let rule =
            if text == "other" {
                &RuleReference::VARIABLE_USED
            } else {
                &RuleReference::ARGUMENT_UNIQUE
            };
        messages.add(GraphQLMessage::critical(rule, text, loc::SourceLocation::Unknown));
    }

    let texts: Vec<_> = messages.with_code("5.4.2").map(|msg| msg.message()).collect();
    assert_eq!(texts, vec!["first", "second"]);
}

#[test]
fn message_carries_rule_code_and_url() {
    let message = GraphQLMessage::critical(
        &RuleReference::LONE_ANONYMOUS_OPERATION,
        "lonely",
        loc::SourceLocation::Unknown,
    );

    assert_eq!(message.code(), "5.2.2.1");
    assert_eq!(
        message.url(),
        "https://spec.graphql.org/October2021/#sec-Lone-Anonymous-Operation",
    );
    assert_eq!(message.severity(), MessageSeverity::Critical);
}

#[test]
fn display_includes_error_and_position() {
    let message = GraphQLMessage::critical(
        &RuleReference::VALUES_OF_CORRECT_TYPE,
        "Invalid value",
        position(3, 7),
    ).with_error(ValueCoercionError::IntOutOfRange { value: 3_000_000_000 });

    assert_eq!(
        message.to_string(),
        "critical [5.6.1]: Invalid value (Int value 3000000000 does not fit in a \
        32-bit signed integer) at query.graphql:3:7",
    );
}

#[test]
fn display_omits_unknown_location() {
    let message = GraphQLMessage::critical(
        &RuleReference::FRAGMENT_USED,
        "Fragment `f` is never used",
        loc::SourceLocation::Unknown,
    );

    assert_eq!(message.to_string(), "critical [5.5.1.4]: Fragment `f` is never used");
}
