use batcuc_core::{BatCucError, Result};
use config as cfg;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

impl ApiConfig {
    /// Loads configuration from an optional `batcuc.toml` overlaid with
    /// `BATCUC_`-prefixed environment variables, e.g. `BATCUC_SERVER__PORT`.
    pub fn load() -> Result<Self> {
        let settings = cfg::Config::builder()
            .add_source(cfg::File::with_name("batcuc").required(false))
            .add_source(cfg::Environment::with_prefix("BATCUC").separator("__"))
            .build()
            .map_err(|e| BatCucError::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| BatCucError::Config(e.to_string()))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_all_interfaces() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }
}
