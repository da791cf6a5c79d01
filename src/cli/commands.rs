//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - render: write the page to a file (default)
//! - print: write the page to stdout
//! - projects: list the case studies

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio - Render a static portfolio page
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// The subcommand to run; no subcommand means a plain `render`
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Render {
            output: None,
            year: None,
            check: false,
        })
    }
}

/// Main subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Render the page to an HTML file
    Render {
        /// Output path (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Footer year instead of the current one
        #[arg(long)]
        year: Option<i32>,

        /// Fail if the file on disk differs from a fresh render; writes nothing
        #[arg(long)]
        check: bool,
    },

    /// Print the page to stdout
    Print {
        /// Footer year instead of the current one
        #[arg(long)]
        year: Option<i32>,
    },

    /// List the project case studies
    Projects,
}
