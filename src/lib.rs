//! Subgraph integration test runner
//!
//! Waits for a Graph Node subgraph to start indexing, then runs a battery of
//! GraphQL queries against it and checks each response.

pub mod cli;
pub mod commands;
pub mod common;
pub mod graphql;
pub mod testing;

// Re-export commonly used types for tests
pub use common::{Error, Result, Settings};
pub use testing::{MatchType, RunStatus, RunSummary, TestCase, TestConfig};
