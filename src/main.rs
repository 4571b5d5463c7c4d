// src/main.rs

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries reports and trees
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check { recipe_file, ascii } => {
            commands::cmd_check(&recipe_file, commands::tree_style(ascii))
        }
        Commands::Tree {
            recipe_file,
            ascii,
            root,
        } => commands::cmd_tree(&recipe_file, commands::tree_style(ascii), root.as_deref()),
    }
}
