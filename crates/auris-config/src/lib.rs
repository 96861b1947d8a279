#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod frontend;
pub mod health;
mod loader;
pub mod server;
pub mod stt;

use serde::Deserialize;

pub use cors::*;
pub use frontend::*;
pub use health::*;
pub use server::*;
pub use stt::*;

/// Top-level Auris configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// STT provider configuration
    #[serde(default)]
    pub stt: SttConfig,
}
