//! Configuration management for the repository gateway.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{GatewayError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub repository: RepositoryConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to listen on
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Delay before the single retry when the listener fails to bind
    #[serde(default = "default_startup_retry_delay_ms")]
    pub startup_retry_delay_ms: u64,
}

/// Repository indexing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RepositoryConfig {
    /// Maximum file size in MB scanned during symbol search
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,

    /// Glob patterns (root-relative) excluded from walks
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5974
}

fn default_startup_retry_delay_ms() -> u64 {
    2000
}

fn default_max_file_size() -> usize {
    10
}

fn default_exclude_patterns() -> Vec<String> {
    vec![
        "**/.git/**".to_string(),
        "**/node_modules/**".to_string(),
        "**/target/**".to_string(),
        "**/__pycache__/**".to_string(),
        "**/.venv/**".to_string(),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            startup_retry_delay_ms: default_startup_retry_delay_ms(),
        }
    }
}

impl ServerConfig {
    /// `host:port` listen address
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn startup_retry_delay(&self) -> Duration {
        Duration::from_millis(self.startup_retry_delay_ms)
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size(),
            exclude_patterns: default_exclude_patterns(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| GatewayError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. REPOGATE_CONFIG env var
    /// 2. XDG config file (~/.config/repogate/config.toml)
    /// 3. ./repogate.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("REPOGATE_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("repogate.toml").exists() {
                Self::from_file("repogate.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(host) = env::var("REPOGATE_HOST") {
            if !host.trim().is_empty() {
                self.server.host = host;
            }
        }
        if let Ok(port) = env::var("REPOGATE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(delay) = env::var("REPOGATE_STARTUP_RETRY_DELAY_MS") {
            if let Ok(d) = delay.parse() {
                self.server.startup_retry_delay_ms = d;
            }
        }
        if let Ok(max_size) = env::var("REPOGATE_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.repository.max_file_size_mb = size;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(GatewayError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        if self.server.host.trim().is_empty() {
            return Err(GatewayError::ConfigError(
                "Host cannot be empty".to_string(),
            ));
        }

        if self.repository.max_file_size_mb == 0 {
            return Err(GatewayError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        for pattern in &self.repository.exclude_patterns {
            glob::Pattern::new(pattern).map_err(|e| {
                GatewayError::ConfigError(format!("Invalid exclude pattern '{pattern}': {e}"))
            })?;
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.server.addr());
        tracing::info!(
            "  Startup retry delay: {}ms",
            self.server.startup_retry_delay_ms
        );
        tracing::info!("  Max file size: {} MB", self.repository.max_file_size_mb);
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.repository.exclude_patterns.len()
        );
    }
}
