//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;

use auris_config::{
    Config, CorsConfig, FrontendConfig, HealthConfig, ServerConfig, SttConfig, SttProviderConfig, SttProviderType,
};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        ..HealthConfig::default()
                    },
                    ..ServerConfig::default()
                },
                stt: SttConfig::default(),
            },
        }
    }

    /// Add a Whisper-compatible provider pointed at a mock backend
    pub fn with_whisper_provider(mut self, name: &str, base_url: &str) -> Self {
        self.config.stt.providers.insert(
            name.to_owned(),
            SttProviderConfig {
                provider_type: SttProviderType::Whisper,
                api_key: Some(SecretString::from("test-key")),
                base_url: Some(base_url.to_owned()),
                model: None,
            },
        );
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Serve frontend files from the given directory
    pub fn with_frontend(mut self, dir: &Path) -> Self {
        self.config.server.frontend = Some(FrontendConfig { dir: dir.to_path_buf() });
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
