//! CLI argument definitions using clap
//!
//! Commands:
//! - movies-api [serve] [--host H] [--port P] [--data FILE] [--allow-origin O]...
//! - movies-api check [--data FILE]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// movies-api - an in-memory movie catalogue over HTTP
#[derive(Parser, Debug)]
#[command(name = "movies-api")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Serve options when no subcommand is given
    #[command(flatten)]
    pub serve: ServeArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve(ServeArgs),

    /// Load and validate a dataset, then exit
    Check {
        /// JSON dataset to check instead of the bundled one
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long, short)]
    pub port: Option<u16>,

    /// JSON dataset to load instead of the bundled one
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Allowed browser origin; repeat to allow several (replaces the defaults)
    #[arg(long = "allow-origin")]
    pub allow_origins: Vec<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The selected command, `serve` when none was given
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Serve(self.serve))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["movies-api", "--port", "8080"]).unwrap();
        match cli.into_command() {
            Command::Serve(args) => assert_eq!(args.port, Some(8080)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_serve_with_origins() {
        let cli = Cli::try_parse_from([
            "movies-api",
            "serve",
            "--allow-origin",
            "http://a.example",
            "--allow-origin",
            "http://b.example",
        ])
        .unwrap();
        match cli.into_command() {
            Command::Serve(args) => assert_eq!(args.allow_origins.len(), 2),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_check_command() {
        let cli = Cli::try_parse_from(["movies-api", "check", "--data", "movies.json"]).unwrap();
        match cli.into_command() {
            Command::Check { data } => assert_eq!(data, Some(PathBuf::from("movies.json"))),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
