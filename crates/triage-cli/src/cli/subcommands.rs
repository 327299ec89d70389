use clap::{Args, Subcommand, ValueEnum};

/// History commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HistoryCommands {
    /// List past classifications, most recent first.
    List,
    /// Show one past classification in full.
    Show(HistoryShowArgs),
    /// Delete every past classification.
    Clear(HistoryClearArgs),
}

#[derive(Clone, Debug, Args)]
pub struct HistoryShowArgs {
    /// Entry id as printed by `triage history list`.
    pub id: i64,
}

#[derive(Clone, Debug, Args)]
pub struct HistoryClearArgs {
    /// Confirm the deletion.
    #[arg(long)]
    pub yes: bool,
}

/// Theme selection for `triage theme`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
    /// Switch to the opposite of the stored theme.
    Toggle,
}
