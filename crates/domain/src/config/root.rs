use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::{ResolveMode, ResolverConfig};

const LOCAL_CONFIG: &str = "zorori.toml";
const SYSTEM_CONFIG: &str = "/etc/zorori/config.toml";

/// Main configuration structure for zorori
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Resolution strategy, upstreams and limits
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zorori.toml in current directory
    /// 3. /etc/zorori/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied on top of whichever source won.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG).exists() {
            Self::from_file(LOCAL_CONFIG)?
        } else if Path::new(SYSTEM_CONFIG).exists() {
            Self::from_file(SYSTEM_CONFIG)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(mode) = overrides.mode {
            self.resolver.mode = mode;
        }
        if let Some(stub) = overrides.stub {
            self.resolver.stub = stub;
        }
        if let Some(ip) = overrides.full_resolver {
            self.resolver.full_resolver = ip;
        }
        if let Some(url) = overrides.doh_server {
            self.resolver.doh_server = url;
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.resolver.query_timeout_ms = timeout;
        }
        if let Some(seed) = overrides.query_id_seed {
            self.resolver.query_id_seed = Some(seed);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let resolver = &self.resolver;

        if resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "query_timeout_ms cannot be 0".to_string(),
            ));
        }

        if resolver.max_referral_depth == 0 {
            return Err(ConfigError::Validation(
                "max_referral_depth cannot be 0".to_string(),
            ));
        }

        if resolver.mode == ResolveMode::Udp && !resolver.stub && resolver.root_servers.is_empty() {
            return Err(ConfigError::Validation(
                "Full resolution needs at least one root server".to_string(),
            ));
        }

        if resolver.mode == ResolveMode::Doh
            && !(resolver.doh_server.starts_with("https://")
                || resolver.doh_server.starts_with("http://"))
        {
            return Err(ConfigError::Validation(format!(
                "DoH server '{}' is not an http(s) URL",
                resolver.doh_server
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub mode: Option<ResolveMode>,
    pub stub: Option<bool>,
    pub full_resolver: Option<IpAddr>,
    pub doh_server: Option<String>,
    pub query_timeout_ms: Option<u64>,
    pub query_id_seed: Option<u64>,
    pub log_level: Option<String>,
}
