//! rMapty library root.
//! Exposes the CLI parser, the high-level run() function, and the workout
//! model, controller, storage and map modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod map;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(cli, cfg),
        Commands::List => cli::commands::list::handle(cli, cfg),
        Commands::Show { .. } => cli::commands::show::handle(cli, cfg),
        Commands::Map => cli::commands::map::handle(cli, cfg),
        Commands::Del => cli::commands::del::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    utils::logging::init_logging(cli.verbose, cli.quiet);

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line overrides
    if let Some(custom) = &cli.storage {
        cfg.storage = custom.clone();
    }
    if let Some(custom) = &cli.map_file {
        cfg.map_file = custom.clone();
    }

    tracing::debug!(storage = %cfg.storage, map_file = %cfg.map_file, "configuration ready");

    // 4️⃣ hand over to the dispatcher
    dispatch(&cli, &cfg)
}
