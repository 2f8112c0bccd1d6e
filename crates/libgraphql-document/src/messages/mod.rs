mod graphql_message;
mod message_collection;
mod message_severity;
mod value_coercion_error;

pub use graphql_message::GraphQLMessage;
pub use message_collection::MessageCollection;
pub use message_severity::MessageSeverity;
pub use value_coercion_error::ValueCoercionError;

#[cfg(test)]
mod tests;
