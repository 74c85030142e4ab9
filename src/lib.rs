//! rFleetlog library root.
//! Exposes the CLI parser, the high-level run() function and the record,
//! timeline and compliance modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use logging::{Verbosity, init_logging};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Drivers { .. } => cli::commands::drivers::handle(&cli.command, cfg),
        Commands::Driver { .. } => cli::commands::driver::handle(&cli.command, cfg),
        Commands::Trucks => cli::commands::trucks::handle(&cli.command, cfg),
        Commands::Companies => cli::commands::companies::handle(&cli.command, cfg),
        Commands::Users => cli::commands::users::handle(&cli.command, cfg),
        Commands::Workday { .. } => cli::commands::workday::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    // config is loaded once; `init` writes its own
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    tracing::debug!(database = %cfg.database, "configuration loaded");
    dispatch(&cli, &cfg)
}
