use super::session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{AppEvent, Outcome};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Bulk delete: no confirmation, no per-workout variant.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut app = session::open(cli, cfg, false)?;

    if let Outcome::Cleared(removed) = app.dispatch(AppEvent::DeleteAll)? {
        // without a location the old map would still show the deleted markers
        if app.map().is_some() {
            session::save_map(&app, cfg)?;
        } else {
            session::remove_map_file(cfg)?;
        }
        if removed == 0 {
            info("Nothing to delete.");
        } else {
            success(format!("All {} workouts have been deleted.", removed));
        }
    }

    Ok(())
}
