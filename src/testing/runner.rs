//! Test runner implementation
//!
//! Executes configured test cases one at a time against a GraphQL
//! transport and feeds the outcomes into a [`RunSummary`].

use colored::Colorize;
use serde_json::Value;
use thiserror::Error;

use crate::common::{Result, Settings};
use crate::graphql::GraphQLTransport;

use super::compare::{contains_match, exact_match, is_present};
use super::config::{load_config, ConfigLoad, MatchType, TestCase, TestConfig};
use super::readiness::{wait_for_subgraph, ReadinessPolicy};
use super::report::{RunSummary, TestOutcome};

/// Why a single test failed
///
/// These never abort a run; they become failed [`TestOutcome`]s.
#[derive(Error, Debug)]
pub enum TestFailure {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("GraphQL errors: {0}")]
    GraphQL(String),

    #[error("{kind}.\n{label}: {expected}\nActual: {actual}")]
    Mismatch {
        kind: &'static str,
        label: &'static str,
        expected: String,
        actual: String,
    },

    #[error("No data returned")]
    NoData,
}

impl TestFailure {
    fn exact_mismatch(expected: Option<&Value>, actual: Option<&Value>) -> Self {
        Self::Mismatch {
            kind: "Response mismatch",
            label: "Expected",
            expected: pretty_or_absent(expected),
            actual: pretty_or_absent(actual),
        }
    }

    fn contains_mismatch(expected: Option<&Value>, actual: Option<&Value>) -> Self {
        Self::Mismatch {
            kind: "Response does not contain expected values",
            label: "Expected to contain",
            expected: pretty_or_absent(expected),
            actual: pretty_or_absent(actual),
        }
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn pretty_or_absent(value: Option<&Value>) -> String {
    value.map_or_else(|| "(absent)".to_string(), pretty)
}

/// How a run ended without a fatal error
#[derive(Debug)]
pub enum RunStatus {
    /// Nothing to test
    Skipped(SkipReason),
    /// Every test was executed
    Completed(RunSummary),
}

/// Why a run was skipped
#[derive(Debug)]
pub enum SkipReason {
    ConfigMissing(std::path::PathBuf),
    NoTests,
}

impl RunStatus {
    /// Process exit code for this status
    pub fn exit_code(&self) -> i32 {
        match self {
            RunStatus::Skipped(_) => 0,
            RunStatus::Completed(summary) => summary.exit_code(),
        }
    }
}

/// Run a single test case, returning the response `data` on success
///
/// An absent `data` field only equals an absent `expected`; it never matches
/// an explicit `null`.
pub async fn run_test(
    transport: &dyn GraphQLTransport,
    test: &TestCase,
) -> std::result::Result<Option<Value>, TestFailure> {
    let response = transport
        .execute(&test.request())
        .await
        .map_err(|e| TestFailure::Request(e.to_string()))?;

    if let Some(errors) = &response.errors {
        return Err(TestFailure::GraphQL(pretty(errors)));
    }

    let data = response.data;
    let expected = test.expected.as_ref();

    match test.match_type {
        MatchType::Exact => {
            let matched = match (data.as_ref(), expected) {
                (Some(actual), Some(expected)) => exact_match(actual, expected),
                (None, None) => true,
                _ => false,
            };
            if !matched {
                return Err(TestFailure::exact_mismatch(expected, data.as_ref()));
            }
        }
        MatchType::Contains => {
            let matched = match (data.as_ref(), expected) {
                (Some(actual), Some(expected)) => contains_match(actual, expected),
                (None, None) => true,
                _ => false,
            };
            if !matched {
                return Err(TestFailure::contains_mismatch(expected, data.as_ref()));
            }
        }
        MatchType::Exists => {
            if !is_present(data.as_ref()) {
                return Err(TestFailure::NoData);
            }
        }
    }

    Ok(data)
}

/// Run every test in order, printing a marker line as each completes
pub async fn run_tests(transport: &dyn GraphQLTransport, config: &TestConfig) -> RunSummary {
    println!("\nRunning {} integration test(s)...\n", config.tests.len());

    let mut summary = RunSummary::default();
    for test in &config.tests {
        let name = test.display_name();
        let outcome = match run_test(transport, test).await {
            Ok(_) => {
                println!("  {} {}", "✓".green(), name);
                TestOutcome::pass(name)
            }
            Err(failure) => {
                println!("  {} {}", "✗".red(), name);
                tracing::debug!(test = name, error = %failure, "Test failed");
                TestOutcome::fail(name, failure.to_string())
            }
        };
        summary.record(outcome);
    }
    summary
}

/// Load the config, wait for the subgraph, run the tests, and print the report
///
/// Skips return `Ok`; malformed config and readiness timeout return `Err`.
pub async fn run_suite(settings: &Settings, transport: &dyn GraphQLTransport) -> Result<RunStatus> {
    let config = match load_config(&settings.config_path)? {
        ConfigLoad::Missing(path) => {
            println!(
                "No test config found at {}, skipping integration tests",
                path.display()
            );
            return Ok(RunStatus::Skipped(SkipReason::ConfigMissing(path)));
        }
        ConfigLoad::Empty => {
            println!("No tests defined in config, skipping");
            return Ok(RunStatus::Skipped(SkipReason::NoTests));
        }
        ConfigLoad::Loaded(config) => config,
    };

    let policy = ReadinessPolicy {
        max_wait: settings.max_wait,
        poll_interval: settings.poll_interval,
    };
    wait_for_subgraph(transport, policy).await?;

    let summary = run_tests(transport, &config).await;
    summary.print();
    Ok(RunStatus::Completed(summary))
}
