//! Configuration management for Gatekeeper.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Main configuration for the Gatekeeper service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatekeeperConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Admission limits applied to every client
    #[serde(default)]
    pub limits: LimitConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// gRPC server address
    #[serde(default = "default_grpc_addr")]
    pub grpc_addr: SocketAddr,

    /// How often the background sweeper scans the client store, in seconds
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            grpc_addr: default_grpc_addr(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

fn default_grpc_addr() -> SocketAddr {
    "127.0.0.1:8081".parse().unwrap()
}

fn default_sweep_interval() -> u64 {
    30
}

impl ServerConfig {
    /// Validate the server settings. A zero sweep interval would panic the
    /// sweeper task at startup (`tokio::time::interval` rejects a zero
    /// period) and leave the store unswept.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.sweep_interval_secs == 0 {
            return Err(crate::error::GatekeeperError::Config(
                "sweep_interval_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Admission limits. These are fixed at startup and apply uniformly to all
/// clients; there is no per-client or runtime-mutable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    /// Sliding window length in milliseconds
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,

    /// Maximum requests admitted inside any rolling window
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,

    /// Number of violations before a client is banned
    #[serde(default = "default_ban_threshold")]
    pub ban_threshold: u32,

    /// Ban duration in milliseconds
    #[serde(default = "default_ban_duration_ms")]
    pub ban_duration_ms: u64,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            window_ms: default_window_ms(),
            max_requests: default_max_requests(),
            ban_threshold: default_ban_threshold(),
            ban_duration_ms: default_ban_duration_ms(),
        }
    }
}

fn default_window_ms() -> u64 {
    60_000
}

fn default_max_requests() -> u32 {
    100
}

fn default_ban_threshold() -> u32 {
    3
}

fn default_ban_duration_ms() -> u64 {
    300_000
}

impl LimitConfig {
    /// Validate that the limits are usable. Zero values would make every
    /// request a violation or every ban instantly expired.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.window_ms == 0 {
            return Err(crate::error::GatekeeperError::Config(
                "window_ms must be greater than zero".to_string(),
            ));
        }
        if self.max_requests == 0 {
            return Err(crate::error::GatekeeperError::Config(
                "max_requests must be greater than zero".to_string(),
            ));
        }
        if self.ban_threshold == 0 {
            return Err(crate::error::GatekeeperError::Config(
                "ban_threshold must be greater than zero".to_string(),
            ));
        }
        if self.ban_duration_ms == 0 {
            return Err(crate::error::GatekeeperError::Config(
                "ban_duration_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl GatekeeperConfig {
    /// Load configuration from a file path.
    pub fn from_file(path: &str) -> crate::error::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: GatekeeperConfig = serde_yaml::from_str(&contents)
            .map_err(|e| crate::error::GatekeeperError::Config(e.to_string()))?;
        config.server.validate()?;
        config.limits.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatekeeperConfig::default();
        assert_eq!(config.server.sweep_interval_secs, 30);
        assert_eq!(config.limits.window_ms, 60_000);
        assert_eq!(config.limits.max_requests, 100);
        assert_eq!(config.limits.ban_threshold, 3);
        assert_eq!(config.limits.ban_duration_ms, 300_000);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
limits:
  max_requests: 10
  window_ms: 1000
"#;
        let config: GatekeeperConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.limits.max_requests, 10);
        assert_eq!(config.limits.window_ms, 1000);
        assert_eq!(config.limits.ban_threshold, 3);
        assert_eq!(config.server.grpc_addr, default_grpc_addr());
    }

    #[test]
    fn test_zero_limits_rejected() {
        let limits = LimitConfig {
            max_requests: 0,
            ..LimitConfig::default()
        };
        assert!(limits.validate().is_err());

        let limits = LimitConfig {
            window_ms: 0,
            ..LimitConfig::default()
        };
        assert!(limits.validate().is_err());

        assert!(LimitConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_sweep_interval_rejected() {
        let server = ServerConfig {
            sweep_interval_secs: 0,
            ..ServerConfig::default()
        };
        assert!(server.validate().is_err());

        assert!(ServerConfig::default().validate().is_ok());
    }
}
