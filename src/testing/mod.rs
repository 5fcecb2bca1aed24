//! Integration test runner
//!
//! Reads JSON test configurations, waits for the subgraph to come up, and
//! checks each query's response against its expectation.

mod compare;
mod config;
mod readiness;
mod report;
mod runner;

pub use compare::{canonical_string, contains_match, exact_match, is_present};
pub use config::*;
pub use readiness::{wait_for_subgraph, ReadinessPolicy, META_QUERY};
pub use report::{RunSummary, TestOutcome};
pub use runner::{run_suite, run_test, run_tests, RunStatus, SkipReason, TestFailure};
