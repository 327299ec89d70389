use triage_config::TriageConfig;
use triage_remote::RemoteClient;

use crate::cli::GlobalFlags;
use crate::output::output;
use crate::progress::Progress;

/// Handle `triage health`.
pub async fn handle(config: &TriageConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = RemoteClient::new(&config.remote);

    let progress = Progress::spinner(&format!("Checking {}...", client.health_url()));
    let report = client.health().await;
    progress.finish_clear();

    output(&report, flags.format)
}
