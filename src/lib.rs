//! rTripPlan library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod api;
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
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Plan { .. } => cli::commands::plan::handle(&cli.command, cfg),
        Commands::Render { .. } => cli::commands::render::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // The render style is process-wide and write-once; install it before
    // any command can reach a render path.
    render::style::install();

    // Load config once; --config points tests at an isolated file.
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(Path::new(path)),
        None => Config::load(),
    };

    // Apply the command-line override for the planning service, if any.
    if let Some(base) = &cli.api_base {
        cfg.api_base = base.clone();
    }

    dispatch(&cli, &cfg)
}
