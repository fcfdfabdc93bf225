//! CLI module for movies-api
//!
//! Provides command-line interface for:
//! - serve: load the dataset and run the HTTP server (default)
//! - check: load and validate a dataset, then exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{check, load_store, run, run_command, serve, server_config};
pub use errors::{CliError, CliErrorCode, CliResult};
