use std::net::SocketAddr;

use serde::Deserialize;

use crate::{cors::CorsConfig, frontend::FrontendConfig, health::HealthConfig};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub cors: Option<CorsConfig>,
    #[serde(default)]
    pub frontend: Option<FrontendConfig>,
}
