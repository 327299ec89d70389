use chrono::Local;
use serde::Serialize;
use triage_core::HistoryEntry;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{HistoryClearArgs, HistoryCommands};
use crate::context::AppContext;
use crate::output::output;

/// One line of `triage history list`.
#[derive(Debug, Serialize)]
struct HistoryRow {
    id: i64,
    time: String,
    category: String,
    confidence: String,
    preview: String,
}

impl From<&HistoryEntry> for HistoryRow {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id,
            time: entry
                .timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            category: entry.category.to_string(),
            confidence: format!("{}%", entry.to_result().confidence_percent()),
            preview: entry.preview(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ClearResponse {
    cleared: usize,
}

/// Handle `triage history`.
pub fn handle(action: &HistoryCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        HistoryCommands::List => {
            let rows = ctx
                .orchestrator
                .history()
                .all()
                .iter()
                .map(HistoryRow::from)
                .collect::<Vec<_>>();
            output(&rows, flags.format)
        }
        HistoryCommands::Show(args) => {
            let entry = ctx.orchestrator.history().find(args.id).cloned();
            match entry {
                Some(entry) => output(&entry, flags.format),
                None => anyhow::bail!("no history entry with id {}", args.id),
            }
        }
        HistoryCommands::Clear(args) => clear(args, ctx, flags),
    }
}

fn clear(args: &HistoryClearArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !args.yes {
        anyhow::bail!("refusing to clear history without --yes");
    }

    let cleared = {
        let mut history = ctx.orchestrator.history();
        let cleared = history.len();
        history.clear();
        cleared
    };
    output(&ClearResponse { cleared }, flags.format)
}
