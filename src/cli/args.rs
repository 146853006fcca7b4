//! CLI argument definitions using clap
//!
//! Commands:
//! - stringdb serve [--port <port>]

use clap::{Parser, Subcommand};

/// stringdb - An in-memory string analysis and lookup service
#[derive(Parser, Debug)]
#[command(name = "stringdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port to bind to; overrides STRINGDB_PORT (default 5000)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
