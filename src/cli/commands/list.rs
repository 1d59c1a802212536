use super::session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let app = session::open(cli, cfg, false)?;

    if app.tiles().is_empty() {
        info("No workouts logged yet. Add one with `rmapty add --at LAT,LNG ...`.");
        return Ok(());
    }

    print!("{}", app.tiles().render());
    Ok(())
}
