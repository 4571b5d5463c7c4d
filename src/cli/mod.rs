// src/cli/mod.rs
//! CLI definitions for rootball
//!
//! This module contains the command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rootball")]
#[command(author = "Rootball Contributors")]
#[command(version)]
#[command(about = "Validate recipe dependencies and show dependency trees", long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a recipe file and its includes for structural errors
    ///
    /// Reports duplicate identifiers, undefined dependencies and
    /// dependency cycles. Exits non-zero if any are found.
    Check {
        /// Path to the entry recipe file
        recipe_file: String,

        /// Draw cycles with ASCII characters only
        #[arg(long)]
        ascii: bool,
    },

    /// Show the dependency trees of a recipe file
    Tree {
        /// Path to the entry recipe file
        recipe_file: String,

        /// Draw trees with ASCII characters only
        #[arg(long)]
        ascii: bool,

        /// Only show the tree below this recipe
        #[arg(long)]
        root: Option<String>,
    },
}
