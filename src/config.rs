//! Registry service configuration
//!
//! TOML-based configuration with environment-variable overrides:
//! 1. TOML file (base values)
//! 2. Environment variables (runtime overrides)
//!
//! The library itself only needs the log level; the `[api]` section is
//! consumed by whichever transport layer mounts the registry.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "aas_registry.toml";

/// Environment variable pointing at an explicit config file location
pub const CONFIG_PATH_ENV: &str = "AAS_REGISTRY_CONFIG_PATH";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found. Searched: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    Parse(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete registry service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub api: ApiConfig,
    pub system: SystemConfig,
}

/// Listen address the transport layer binds the registry to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Log level filter: error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Find the registry configuration file
///
/// Search order:
/// 1. `AAS_REGISTRY_CONFIG_PATH` environment variable
/// 2. Current working directory: `./aas_registry.toml`
/// 3. Ancestor directories (up to 5 levels)
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "config file specified by {} not found: {}",
            CONFIG_PATH_ENV,
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        let mut current = cwd;
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent.to_path_buf();
                }
                None => break,
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "'{CONFIG_FILE_NAME}' not found in any of these locations:\n{search_list}\nSet {CONFIG_PATH_ENV} to specify a custom location."
    )))
}

/// Load configuration from a TOML file with environment overrides applied
///
/// # Arguments
///
/// * `config_path` - Optional explicit path. If `None`, the file is searched
///   via [`find_config_file`].
pub fn load_config(config_path: Option<&Path>) -> ConfigResult<RegistryConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: RegistryConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Apply environment variable overrides to a configuration
///
/// Supported variables:
/// - `AAS_REGISTRY_API_HOST` -> `api.host`
/// - `AAS_REGISTRY_API_PORT` -> `api.port`
/// - `AAS_REGISTRY_LOG_LEVEL` -> `system.log_level`
pub fn apply_environment_overrides(config: &mut RegistryConfig) {
    if let Ok(value) = env::var("AAS_REGISTRY_API_HOST") {
        config.api.host = value;
    }
    if let Ok(value) = env::var("AAS_REGISTRY_API_PORT") {
        if let Ok(port) = value.parse::<u16>() {
            config.api.port = port;
        }
    }
    if let Ok(value) = env::var("AAS_REGISTRY_LOG_LEVEL") {
        config.system.log_level = value;
    }
}

/// Check value ranges after all overrides are applied
pub fn validate_config(config: &RegistryConfig) -> ConfigResult<()> {
    if config.api.port == 0 {
        return Err(ConfigError::InvalidValue(
            "api.port must be non-zero".to_string(),
        ));
    }

    match config.system.log_level.as_str() {
        "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
        other => Err(ConfigError::InvalidValue(format!(
            "unknown log level '{other}'"
        ))),
    }
}
