use std::path::PathBuf;

use clap::Parser;

/// Auris accessibility backend
#[derive(Debug, Parser)]
#[command(name = "auris", about = "Accessibility backend: speech transcription gateway and frontend host")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "auris.toml", env = "AURIS_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "AURIS_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
