use super::session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::{AppEvent, Outcome};
use crate::errors::AppResult;
use crate::ui::messages::pin;

/// Center the map on one workout, like clicking its tile.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = &cli.command {
        let mut app = session::open(cli, cfg, true)?;

        if let Outcome::Centered(coords) = app.dispatch(AppEvent::TileClicked(id.clone()))? {
            session::save_map(&app, cfg)?;
            pin(format!("Centered on {} (zoom {})", coords, app.zoom()));
            if let Some(map) = app.map() {
                println!("{}", map.permalink());
            }
        }
    }

    Ok(())
}
