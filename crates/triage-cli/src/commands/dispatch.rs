use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Classify(args) => commands::classify::handle(&args, ctx, flags).await,
        Commands::History { action } => commands::history::handle(&action, ctx, flags),
        Commands::Theme(args) => commands::theme::handle(&args, ctx, flags),
        Commands::Serve(_) | Commands::Health => {
            unreachable!("serve/health are pre-dispatched in main")
        }
    }
}
