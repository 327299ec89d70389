use anyhow::Context;
use triage_config::TriageConfig;

use crate::cli::root_commands::ServeArgs;

/// Handle `triage serve`. Runs until Ctrl-C.
pub async fn handle(args: &ServeArgs, config: &TriageConfig) -> anyhow::Result<()> {
    let mut server = config.server.clone();
    if let Some(host) = &args.host {
        server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        server.port = port;
    }

    let classifier = triage_server::configured_classifier(&config.classifier);
    eprintln!("Serving on http://{} (Ctrl-C to stop)", server.bind_address());

    triage_server::run(&server, classifier, shutdown_signal())
        .await
        .context("classification service stopped")
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
