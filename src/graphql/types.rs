//! GraphQL wire types and the fixed mutation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The single mutation this relay ever sends.
pub const INSERT_USER_MUTATION: &str = r#"mutation InsertUser($name: String!, $age: Int!) {
  insert_users(objects: [{ name: $name, age: $age }]) {
    returning {
      id
      name
      age
    }
  }
}"#;

/// The GraphQL request envelope: `{query, variables}`.
///
/// Constructed fresh per call, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlRequest {
    /// The query or mutation text.
    pub query: String,

    /// Variables referenced by the query.
    pub variables: Map<String, Value>,
}

/// The inbound request body accepted on `POST /graphql`.
#[derive(Debug, Clone, Deserialize)]
pub struct InsertUserInput {
    /// User name, forwarded as the `$name` variable.
    pub name: String,

    /// User age, forwarded as the `$age` variable.
    pub age: i64,
}

impl InsertUserInput {
    /// Build the variables map for [`INSERT_USER_MUTATION`].
    pub fn into_variables(self) -> Map<String, Value> {
        let mut variables = Map::new();
        let _ = variables.insert("name".to_string(), Value::String(self.name));
        let _ = variables.insert("age".to_string(), Value::from(self.age));
        variables
    }
}
