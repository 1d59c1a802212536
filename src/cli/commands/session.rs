//! One CLI invocation = one app session: locate, load the map, load and
//! render the stored snapshot.

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::App;
use crate::core::geo;
use crate::errors::AppResult;
use crate::map::GeoJsonMap;
use crate::storage::JsonFileStore;
use std::fs;
use std::io;

pub type Session = App<JsonFileStore, GeoJsonMap>;

/// Start a session. When `needs_map` is set a missing location is fatal;
/// otherwise the session runs without a map (listing and deleting still work).
pub fn open(cli: &Cli, cfg: &Config, needs_map: bool) -> AppResult<Session> {
    let mut app = App::new(JsonFileStore::new(cfg.storage_path()), cfg.zoom_level);

    match geo::locate(cli.location.as_deref(), cfg) {
        Ok(center) => app.load_map(GeoJsonMap::new(center, cfg.zoom_level)),
        Err(e) if needs_map => return Err(e),
        Err(e) => tracing::info!(error = %e, "continuing without a map"),
    }

    app.load_snapshot();
    Ok(app)
}

/// Write the map file, if the session has a map.
pub fn save_map(app: &Session, cfg: &Config) -> AppResult<()> {
    if let Some(map) = app.map() {
        map.write(&cfg.map_path())?;
    }
    Ok(())
}

/// Drop a map file left over from an earlier session. A missing file is fine.
pub fn remove_map_file(cfg: &Config) -> AppResult<()> {
    let path = cfg.map_path();
    match fs::remove_file(&path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "stale map file removed");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
