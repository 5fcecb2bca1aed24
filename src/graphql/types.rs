//! GraphQL-over-HTTP envelope types

use serde::Serialize;
use serde_json::{Map, Value};

/// Request body sent to the endpoint
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GraphQLRequest {
    pub query: String,
    pub variables: Map<String, Value>,
}

impl GraphQLRequest {
    /// Create a request with no variables
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Map::new(),
        }
    }

    /// Create a request with variables
    pub fn with_variables(query: impl Into<String>, variables: Map<String, Value>) -> Self {
        Self {
            query: query.into(),
            variables,
        }
    }
}

/// Response envelope: `{ "data"?: any, "errors"?: array }`
///
/// `data: null` is kept as `Some(Null)`; `errors: null` counts as no errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphQLResponse {
    pub data: Option<Value>,
    pub errors: Option<Value>,
}

impl GraphQLResponse {
    /// Build the envelope from an arbitrary JSON body
    ///
    /// Bodies that are not JSON objects carry neither field.
    pub fn from_value(body: Value) -> Self {
        let Value::Object(mut fields) = body else {
            return Self::default();
        };
        Self {
            data: fields.remove("data"),
            errors: fields.remove("errors").filter(|v| !v.is_null()),
        }
    }

    /// Follow a path of object keys into `data`
    pub fn data_at(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(self.data.as_ref()?, |value, key| value.get(*key))
    }
}
