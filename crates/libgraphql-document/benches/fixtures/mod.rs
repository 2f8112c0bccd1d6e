pub const SCHEMA: &str =
    include_str!("schema.graphql");
pub const COMPLEX_QUERY: &str =
    include_str!("complex_query.graphql");

pub mod operations;
