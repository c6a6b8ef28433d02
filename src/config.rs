//! Server configuration from command-line flags and environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Configuration for the catalog server.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about = "Personal media catalogue server", long_about = None)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(short, long, env = "MEDIAHUB_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// JSON file to persist the catalogue in (in-memory only when omitted)
    #[arg(short, long, env = "MEDIAHUB_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Log filter directive, e.g. "info" or "mediahub=debug"
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}
