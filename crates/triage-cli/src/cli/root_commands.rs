use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{HistoryCommands, ThemeChoice};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Classify an email given as text or as a file.
    Classify(ClassifyArgs),
    /// Browse or clear past classifications.
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Check whether the classification service is reachable.
    Health,
    /// Show or change the stored theme preference.
    Theme(ThemeArgs),
    /// Run the classification service.
    Serve(ServeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ClassifyArgs {
    /// Email text. Omit when using --file.
    #[arg(conflicts_with = "file", required_unless_present = "file")]
    pub text: Option<String>,
    /// Read the email from a .txt or .pdf file.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// MIME type of --file; guessed from the extension when omitted.
    #[arg(long, requires = "file")]
    pub mime: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ThemeArgs {
    /// New theme. Prints the stored theme when omitted.
    pub theme: Option<ThemeChoice>,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Bind host (defaults to server.host).
    #[arg(long)]
    pub host: Option<String>,
    /// Bind port (defaults to server.port).
    #[arg(long)]
    pub port: Option<u16>,
}
