//! CLI command handling
//!
//! Resolves settings from the user settings file and the command line, then
//! runs the suite over HTTP.

use std::time::Duration;

use crate::commands::RunArgs;
use crate::common::config::SettingsFile;
use crate::common::{Result, Settings};
use crate::graphql::HttpTransport;
use crate::testing::{run_suite, RunStatus};

/// Run the integration tests described by `args`
pub async fn run(args: RunArgs) -> Result<RunStatus> {
    let settings = resolve_settings(args, SettingsFile::load()?);
    let endpoint = settings.endpoint();
    tracing::debug!(%endpoint, config = %settings.config_path.display(), "Resolved settings");

    let transport = HttpTransport::new(endpoint, settings.request_timeout)?;
    run_suite(&settings, &transport).await
}

/// Command-line values win over the settings file
pub fn resolve_settings(args: RunArgs, file: SettingsFile) -> Settings {
    let mut settings = Settings::from_file(file);
    settings.config_path = args.config_path;
    settings.subgraph_name = args.subgraph_name;
    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(secs) = args.max_wait_secs {
        settings.max_wait = Duration::from_secs(secs);
    }
    if let Some(ms) = args.poll_interval_ms {
        settings.poll_interval = Duration::from_millis(ms);
    }
    if let Some(secs) = args.request_timeout_secs {
        settings.request_timeout = Some(Duration::from_secs(secs));
    }
    settings
}
