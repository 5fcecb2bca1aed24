//! Test configuration types
//!
//! Defines the data structures for the JSON test configuration and the
//! loader that turns a path into either a config or a reason to skip.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::common::{Error, Result};
use crate::graphql::GraphQLRequest;

/// Name reported for tests without a usable name
pub const UNNAMED_TEST: &str = "Unnamed test";

/// How a response is compared against `expected`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchType {
    /// Response must carry non-empty `data` (default)
    #[default]
    Exists,
    /// Canonical serializations must be identical
    Exact,
    /// `expected` must be a recursive subset of the response
    Contains,
}

impl MatchType {
    /// Map a `matchType` value; anything unrecognised falls back to `Exists`
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => MatchType::Exists,
            Some(Value::String(s)) if s == "exists" => MatchType::Exists,
            Some(Value::String(s)) if s == "exact" => MatchType::Exact,
            Some(Value::String(s)) if s == "contains" => MatchType::Contains,
            Some(other) => {
                tracing::warn!(match_type = %other, "Unknown matchType, using 'exists'");
                MatchType::Exists
            }
        }
    }
}

fn deserialize_match_type<'de, D>(deserializer: D) -> std::result::Result<MatchType, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(MatchType::from_json(value.as_ref()))
}

fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A single query/expectation pair
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    /// Display name of the test
    #[serde(default)]
    pub name: Option<String>,
    /// GraphQL query document
    pub query: String,
    /// Query variables (`null` is treated as empty)
    #[serde(default)]
    pub variables: Option<Map<String, Value>>,
    /// Expected response `data`, interpreted per `match_type`
    ///
    /// `None` when the key is absent; an explicit `null` is `Some(Null)`.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub expected: Option<Value>,
    /// Comparison strategy
    #[serde(default, deserialize_with = "deserialize_match_type")]
    pub match_type: MatchType,
}

impl TestCase {
    /// Name shown in the report
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNNAMED_TEST,
        }
    }

    /// Request body for this test
    pub fn request(&self) -> GraphQLRequest {
        GraphQLRequest::with_variables(
            self.query.clone(),
            self.variables.clone().unwrap_or_default(),
        )
    }
}

/// A complete test configuration
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub tests: Vec<TestCase>,
}

/// What loading a config path produced
#[derive(Debug)]
pub enum ConfigLoad {
    /// No file at the (absolute) path
    Missing(PathBuf),
    /// The file has no usable `tests` list
    Empty,
    Loaded(TestConfig),
}

/// Load the test configuration from a JSON file
pub fn load_config(path: &Path) -> Result<ConfigLoad> {
    let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    if !path.exists() {
        return Ok(ConfigLoad::Missing(path));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| Error::file_read(&path, e))?;
    parse_config(&content)
}

/// Parse config file contents
pub fn parse_config(content: &str) -> Result<ConfigLoad> {
    let document: Value =
        serde_json::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))?;

    let entries = match document.get("tests") {
        Some(Value::Array(entries)) if !entries.is_empty() => entries,
        _ => return Ok(ConfigLoad::Empty),
    };

    let tests = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            TestCase::deserialize(entry)
                .map_err(|e| Error::ConfigParse(format!("tests[{}]: {}", i, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = tests.len(), "Loaded test configuration");
    Ok(ConfigLoad::Loaded(TestConfig { tests }))
}
