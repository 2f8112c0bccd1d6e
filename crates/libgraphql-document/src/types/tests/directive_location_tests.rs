use crate::types::DirectiveLocation;

#[test]
fn graphql_names_round_trip() {
    for location in [
        DirectiveLocation::Field,
        DirectiveLocation::FragmentSpread,
        DirectiveLocation::InlineFragment,
        DirectiveLocation::Query,
        DirectiveLocation::VariableDefinition,
    ] {
        assert_eq!(DirectiveLocation::from_graphql_name(location.as_str()), Some(location));
    }
}

#[test]
fn unknown_graphql_name_is_none() {
    assert_eq!(DirectiveLocation::from_graphql_name("NOT_A_LOCATION"), None);
}
