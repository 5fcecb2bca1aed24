//! CLI argument definitions

use clap::Args;
use std::path::PathBuf;

use crate::common::config::{DEFAULT_CONFIG_PATH, DEFAULT_SUBGRAPH_NAME};

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Path to the JSON test configuration
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    pub config_path: PathBuf,

    /// Name of the deployed subgraph
    #[arg(default_value = DEFAULT_SUBGRAPH_NAME)]
    pub subgraph_name: String,

    /// Base URL of the Graph Node HTTP server (default: http://localhost:8000)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Seconds to wait for the subgraph to report a block (default: 120)
    #[arg(long)]
    pub max_wait_secs: Option<u64>,

    /// Milliseconds between readiness probes (default: 2000)
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    /// Bound every HTTP request to this many seconds (default: unbounded)
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    /// Verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}
