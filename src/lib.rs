//! almanac - periodic notes over a markdown vault

pub mod cli;
pub mod domain;
pub mod infra;
pub mod vault;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_list, handle_new, handle_scan, handle_tags},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let vault_dir = config.vault_dir(cli.dir.as_ref());
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::Scan(args) => handle_scan(args, &vault_dir, &config, verbose),
        Command::List(args) => handle_list(args, &vault_dir, &config, verbose),
        Command::Tags(args) => handle_tags(args, &vault_dir, &config, verbose),
        Command::New(args) => handle_new(args, &vault_dir, &config),
        Command::Completions(args) => handle_completions(args),
    }
}
