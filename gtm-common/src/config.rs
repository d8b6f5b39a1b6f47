//! Bootstrap configuration
//!
//! The BFF service reads a small TOML file at startup (database path, port,
//! public API key, logging). Resolution order for the file:
//! 1. Command-line argument (highest priority)
//! 2. `GTM_CONFIG` environment variable
//! 3. `<user config dir>/gtm/gtm-bff.toml`
//! 4. Compiled defaults (no file at all)
//!
//! A missing file is not an error: the service starts on compiled defaults
//! and logs a warning once logging is up (see [`ConfigSource::log`]). A file
//! that exists but does not parse IS an error.
//!
//! The client side only needs the service base URL and the public API key,
//! both taken from the environment.

use crate::{Error, Result};
use serde::Deserialize;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "GTM_CONFIG";
/// Environment variable overriding the data folder (database location)
pub const DATA_FOLDER_ENV_VAR: &str = "GTM_DATA_FOLDER";
/// Environment variable with the BFF base URL (client side)
pub const BASE_URL_ENV_VAR: &str = "GTM_BASE_URL";
/// Environment variable with the public API key (client side)
pub const PUBLIC_API_KEY_ENV_VAR: &str = "GTM_PUBLIC_API_KEY";

const CONFIG_FILE_NAME: &str = "gtm-bff.toml";
const DATABASE_FILE_NAME: &str = "gtm.db";

/// Bootstrap configuration loaded from TOML
///
/// Cannot change while the service is running.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    /// SQLite database file; defaults to `<data folder>/gtm.db`
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// HTTP listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Public API key expected in the `apikey` header (unset = not checked)
    #[serde(default)]
    pub public_api_key: Option<String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            port: default_port(),
            public_api_key: None,
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Open the configured log file for appending, creating parent folders
    ///
    /// `Ok(None)` when no file is configured (log to stderr).
    pub fn open_log_file(&self) -> Result<Option<File>> {
        let Some(path) = &self.file else {
            return Ok(None);
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Some(file))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_port() -> u16 {
    5780
}

fn default_log_level() -> String {
    "info".to_string()
}

/// OS-dependent compiled defaults
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub data_folder: PathBuf,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        let data_folder = dirs::data_local_dir()
            .map(|d| d.join("gtm"))
            .unwrap_or_else(|| PathBuf::from("./gtm_data"));

        Self { data_folder }
    }
}

/// Load and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Invalid TOML in {}: {}", path.display(), e)))
}

/// Resolves the bootstrap config following the priority order above
pub struct ConfigResolver {
    cli_path: Option<PathBuf>,
}

impl ConfigResolver {
    pub fn new(cli_path: Option<PathBuf>) -> Self {
        Self { cli_path }
    }

    /// Locate the config file, if any
    pub fn locate(&self) -> Option<PathBuf> {
        if let Some(path) = &self.cli_path {
            return Some(path.clone());
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        dirs::config_dir()
            .map(|d| d.join("gtm").join(CONFIG_FILE_NAME))
            .filter(|p| p.exists())
    }

    /// Resolve the effective config
    ///
    /// An explicitly named file (CLI or env) that does not exist falls back
    /// to defaults, same as no file at all.
    pub fn resolve(&self) -> Result<TomlConfig> {
        self.resolve_with_source().map(|(config, _)| config)
    }

    /// Resolve the effective config and report where it came from
    ///
    /// Nothing is logged here: the caller usually resolves config before a
    /// subscriber exists, and logs the [`ConfigSource`] afterwards.
    pub fn resolve_with_source(&self) -> Result<(TomlConfig, ConfigSource)> {
        match self.locate() {
            Some(path) if path.exists() => {
                let config = load_toml_config(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            Some(path) => Ok((TomlConfig::default(), ConfigSource::MissingFile(path))),
            None => Ok((TomlConfig::default(), ConfigSource::Defaults)),
        }
    }
}

/// Where the effective bootstrap config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// A file was named but does not exist; compiled defaults in use
    MissingFile(PathBuf),
    /// No file named or found; compiled defaults in use
    Defaults,
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::MissingFile(path) => warn!(
                "Config file {} not found, using compiled defaults",
                path.display()
            ),
            ConfigSource::Defaults => warn!("No config file found, using compiled defaults"),
        }
    }
}

impl TomlConfig {
    /// Effective database path: explicit setting → `GTM_DATA_FOLDER` → compiled default
    pub fn database_path(&self) -> PathBuf {
        if let Some(path) = &self.database_path {
            return path.clone();
        }

        let folder = std::env::var(DATA_FOLDER_ENV_VAR)
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| CompiledDefaults::for_current_platform().data_folder);

        folder.join(DATABASE_FILE_NAME)
    }
}

/// Client-side configuration: where the BFF lives and which public key to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub public_api_key: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, public_api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let public_api_key = public_api_key.into();

        if base_url.is_empty() {
            return Err(Error::Config("base URL is required".to_string()));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "base URL must be http(s): {}",
                base_url
            )));
        }
        if public_api_key.trim().is_empty() {
            return Err(Error::Config("public API key is required".to_string()));
        }

        Ok(Self {
            base_url,
            public_api_key,
        })
    }

    /// Both values are required; either missing is a configuration error
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV_VAR)
            .map_err(|_| Error::Config(format!("{} is not set", BASE_URL_ENV_VAR)))?;
        let key = std::env::var(PUBLIC_API_KEY_ENV_VAR)
            .map_err(|_| Error::Config(format!("{} is not set", PUBLIC_API_KEY_ENV_VAR)))?;
        Self::new(base_url, key)
    }
}
