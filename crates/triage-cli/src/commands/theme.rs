use serde::Serialize;
use triage_core::Theme;
use triage_history::{load_theme, save_theme};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ThemeArgs;
use crate::cli::subcommands::ThemeChoice;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ThemeResponse {
    theme: Option<Theme>,
}

/// Handle `triage theme`.
pub fn handle(args: &ThemeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stored = load_theme(ctx.store.as_ref());

    let Some(choice) = args.theme else {
        return output(&ThemeResponse { theme: stored }, flags.format);
    };

    let theme = resolve(choice, stored);
    save_theme(ctx.store.as_ref(), theme)?;
    output(&ThemeResponse { theme: Some(theme) }, flags.format)
}

/// Toggling with nothing stored starts from the light theme.
fn resolve(choice: ThemeChoice, stored: Option<Theme>) -> Theme {
    match choice {
        ThemeChoice::Dark => Theme::Dark,
        ThemeChoice::Light => Theme::Light,
        ThemeChoice::Toggle => stored.unwrap_or(Theme::Light).toggled(),
    }
}
