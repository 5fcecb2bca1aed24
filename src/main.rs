//! Subgraph integration test runner
//!
//! Usage: subgraph-test [CONFIG_PATH] [SUBGRAPH_NAME]

use clap::Parser;
use subgraph_tester::{cli, commands::RunArgs, common::logging};

#[derive(Parser)]
#[command(name = "subgraph-test", about = "Run GraphQL integration tests against a subgraph")]
#[command(version, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: RunArgs,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_cli(cli.args.verbose);

    let code = match cli::run(cli.args).await {
        Ok(status) => status.exit_code(),
        Err(e) if e.is_config_error() => {
            tracing::error!(error = %e, "Invalid test configuration");
            eprintln!("{e}");
            1
        }
        Err(e) => {
            tracing::error!(error = %e, "Run aborted");
            eprintln!("Unexpected error: {e}");
            1
        }
    };

    std::process::exit(code);
}
