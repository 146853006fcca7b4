//! CLI command implementations

use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Dispatch a parsed CLI invocation
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Serve { port } => serve(port),
    }
}

/// Start the HTTP server.
///
/// Configuration comes from the environment (STRINGDB_HOST / STRINGDB_PORT);
/// an explicit `--port` takes precedence.
pub fn serve(port: Option<u16>) -> CliResult<()> {
    let mut config = HttpServerConfig::from_env();
    if let Some(port) = port {
        config.port = port;
    }

    let server = HttpServer::with_config(config);

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
