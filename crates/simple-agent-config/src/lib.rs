//! Server configuration loaded from the environment.
//!
//! The only recognized variable is `PORT`. Everything else is fixed at
//! construction and shared read-only for the life of the process.

use simple_agent_core::AgentIdentity;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Address the server binds to.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Name reported by the service descriptor endpoint.
pub const SERVICE_NAME: &str = "Agent MVP";

/// Version reported by the service descriptor endpoint.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Status reported by the service descriptor endpoint while serving.
pub const SERVICE_STATUS: &str = "running";

/// Configuration loading errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Static descriptor returned by the root endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfoConfig {
    pub name: String,
    pub status: String,
    pub version: String,
}

impl Default for ServiceInfoConfig {
    fn default() -> Self {
        Self {
            name: SERVICE_NAME.into(),
            status: SERVICE_STATUS.into(),
            version: SERVICE_VERSION.into(),
        }
    }
}

/// Complete server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub service: ServiceInfoConfig,
    pub agent: AgentIdentity,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            service: ServiceInfoConfig::default(),
            agent: AgentIdentity::default(),
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("PORT") {
            config.port = raw
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: raw.clone(), source })?;
        }

        Ok(config)
    }

    /// Returns the `host:port` string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
