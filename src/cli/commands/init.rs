use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty workout snapshot
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.storage.clone(), cli.test)?;

    if cfg.location.is_none() && cli.location.is_none() {
        info(format!(
            "No location configured: set `location: \"LAT,LNG\"` in {} or pass --location.",
            Config::config_file().display()
        ));
    }

    success("rMapty is ready.");
    Ok(())
}
