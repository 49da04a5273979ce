//! vacboard library root.
//! Exposes the CLI parser, the high-level run() function and the board,
//! timeline and rendering modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod render;
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
        Commands::Gantt { .. } => cli::commands::gantt::handle(&cli.command, cfg),
        Commands::Board { .. } => cli::commands::board::handle(&cli.command, cfg),
        Commands::View { .. } => cli::commands::view::handle(&cli.command, cfg),
        Commands::Sidebar { .. } => cli::commands::sidebar::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // configuration is loaded once per invocation
    let mut cfg = Config::load()?;

    // --data is relative to the working directory, not to the config dir
    if let Some(data) = &cli.data {
        cfg.data_file = if data == "-" {
            data.clone()
        } else {
            std::path::absolute(data)?.to_string_lossy().into_owned()
        };
    }

    dispatch(&cli, &cfg)
}
