//! CLI module for folio - command-line interface and subcommands.
//!
//! Rendering to a file is the default; the other subcommands print.

pub mod commands;

pub use commands::Cli;
