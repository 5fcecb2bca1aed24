//! Subgraph readiness polling
//!
//! Graph Node answers `_meta` only once the deployment has indexed its first
//! block, so a numeric block number is the liveness signal.

use std::io::Write;
use std::time::Duration;

use tokio::time::{sleep, timeout, Instant};

use crate::common::{Error, Result};
use crate::graphql::{GraphQLRequest, GraphQLTransport};

/// Fixed liveness query
pub const META_QUERY: &str = "{ _meta { block { number } } }";

/// Polling schedule
#[derive(Debug, Clone, Copy)]
pub struct ReadinessPolicy {
    /// Overall budget, measured from the first attempt
    pub max_wait: Duration,
    /// Pause between attempts
    pub poll_interval: Duration,
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self {
            max_wait: Duration::from_secs(120),
            poll_interval: Duration::from_millis(2000),
        }
    }
}

/// Block until the subgraph reports a block number, returning it
///
/// Probe failures of any kind mean "not ready yet". Prints one `.` per
/// failed attempt.
pub async fn wait_for_subgraph(
    transport: &dyn GraphQLTransport,
    policy: ReadinessPolicy,
) -> Result<u64> {
    println!("Waiting for subgraph at {}...", transport.endpoint());

    let request = GraphQLRequest::new(META_QUERY);
    let start = Instant::now();
    let mut attempts = 0u32;

    while start.elapsed() < policy.max_wait {
        attempts += 1;
        let remaining = policy.max_wait.saturating_sub(start.elapsed());

        match timeout(remaining, probe(transport, &request)).await {
            Ok(Some(block)) => {
                if attempts > 1 {
                    println!();
                }
                println!("Subgraph ready at block {}", block);
                tracing::debug!(block, attempts, "Subgraph ready");
                return Ok(block);
            }
            Ok(None) => {}
            Err(_) => tracing::debug!(attempt = attempts, "Readiness probe cut off by deadline"),
        }

        sleep(policy.poll_interval).await;
        print!(".");
        let _ = std::io::stdout().flush();
    }

    println!();
    Err(Error::readiness_timeout(start.elapsed()))
}

/// One liveness probe; `None` means not ready
async fn probe(transport: &dyn GraphQLTransport, request: &GraphQLRequest) -> Option<u64> {
    match transport.execute(request).await {
        Ok(response) => {
            let block = response
                .data_at(&["_meta", "block", "number"])
                .and_then(|n| n.as_u64());
            if block.is_none() {
                tracing::debug!(errors = ?response.errors, "Subgraph has no block yet");
            }
            block
        }
        Err(e) => {
            tracing::debug!(error = %e, "Readiness probe failed");
            None
        }
    }
}
