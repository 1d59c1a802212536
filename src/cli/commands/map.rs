use super::session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::map::MapView;
use crate::ui::messages::success;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let app = session::open(cli, cfg, true)?;
    session::save_map(&app, cfg)?;

    if let Some(map) = app.map() {
        success(format!(
            "Map written: {} ({} markers)",
            cfg.map_path().display(),
            map.markers().len()
        ));
        println!("{}", map.permalink());
    }
    Ok(())
}
