use anyhow::Context;
use triage_intake::{FileUpload, RawInput, normalize};
use triage_pipeline::Phase;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClassifyArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `triage classify`.
pub async fn handle(args: &ClassifyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = match (&args.text, &args.file) {
        (Some(text), _) => RawInput::Text(text.clone()),
        (None, Some(path)) => RawInput::File(FileUpload::read(path, args.mime.clone()).await?),
        (None, None) => anyhow::bail!("provide email text or --file"),
    };

    // PDF extraction is CPU-bound.
    let submission = tokio::task::spawn_blocking(move || normalize(input))
        .await
        .context("input normalization task failed")??;

    let progress = Progress::spinner("Classifying email...");
    let watcher = progress.handle().map(|bar| {
        let mut phases = ctx.orchestrator.subscribe();
        tokio::spawn(async move {
            while phases.changed().await.is_ok() {
                let phase = *phases.borrow_and_update();
                if phase == Phase::Fallback {
                    bar.set_message("Remote unavailable, classifying locally...");
                }
            }
        })
    });

    let outcome = ctx.orchestrator.process(submission).await;
    if let Some(watcher) = watcher {
        watcher.abort();
    }

    let outcome = match outcome {
        Ok(outcome) => {
            progress.finish_clear();
            outcome
        }
        Err(error) => {
            progress.finish_err("classification failed");
            return Err(error.into());
        }
    };

    if let Some(advisory) = outcome.advisory.as_ref().filter(|_| !flags.quiet) {
        eprintln!("warning: {}; used local heuristic classifier", advisory.reason);
    }

    output(&outcome.result, flags.format)
}
