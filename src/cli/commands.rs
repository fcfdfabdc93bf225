//! CLI command implementations

use std::io::Write;
use std::path::Path;

use crate::http_server::config::PORT_ENV;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{init_logging, Logger};
use crate::store::{self, MovieStore};

use super::args::{Command, ServeArgs};
use super::errors::{CliError, CliResult};

/// Parse arguments, install logging and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    init_logging();
    run_command(cli.into_command())
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(args),
        Command::Check { data } => check(data.as_deref()),
    }
}

/// Load the dataset at `data`, or the bundled one
pub fn load_store(data: Option<&Path>) -> CliResult<MovieStore> {
    let source = data
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled".to_string());

    let loaded = match data {
        Some(path) => store::load_file(path),
        None => store::load_default(),
    };
    let store = match loaded {
        Ok(store) => store,
        Err(e) => {
            let reason = e.to_string();
            Logger::error(
                "DATASET_REJECTED",
                &[("reason", reason.as_str()), ("source", source.as_str())],
            );
            return Err(e.into());
        }
    };

    let count = store.len().to_string();
    Logger::info(
        "DATASET_LOADED",
        &[("movies", count.as_str()), ("source", source.as_str())],
    );
    Ok(store)
}

/// Build the server config: defaults, then `PORT`, then flags
pub fn server_config(args: &ServeArgs, port_var: Option<String>) -> CliResult<HttpServerConfig> {
    let mut config = HttpServerConfig::default()
        .with_port_var(port_var)
        .map_err(CliError::config_error)?;
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if !args.allow_origins.is_empty() {
        config.cors_origins = args.allow_origins.clone();
    }
    Ok(config)
}

/// Start the HTTP server and block until it stops
pub fn serve(args: ServeArgs) -> CliResult<()> {
    let config = server_config(&args, std::env::var(PORT_ENV).ok())?;
    let store = load_store(args.data.as_deref())?;
    let server = HttpServer::new(config, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Validate a dataset and report how many movies it holds
pub fn check(data: Option<&Path>) -> CliResult<()> {
    let store = load_store(data)?;

    let mut stdout = std::io::stdout();
    writeln!(stdout, "{} movies OK", store.len())?;
    Ok(())
}
