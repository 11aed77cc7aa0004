//! Configuration management for lensocr.
//!
//! Settings are resolved as defaults, then an optional TOML file, then
//! environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm::LlmConfig;

/// Default bind address for the web UI.
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Default upload size limit (20 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Errors loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Web server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on (`port`, `host` or `host:port`)
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Largest accepted upload body in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Vision model client settings
    #[serde(default)]
    pub llm: LlmConfig,
    /// Web server settings
    #[serde(default)]
    pub server: ServerConfig,
}

impl Settings {
    /// Load settings from `path` (or the default location) and the environment.
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        Ok(settings.with_env_overrides())
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Supported env vars, besides the `LLM_*` ones handled by `LlmConfig`:
    /// - `LENSOCR_BIND`: Web UI bind address
    /// - `LENSOCR_MAX_UPLOAD_BYTES`: Upload size limit
    pub fn with_overrides_from(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(bind) = var("LENSOCR_BIND") {
            self.server.bind = bind;
        }
        if let Some(n) = var("LENSOCR_MAX_UPLOAD_BYTES").and_then(|v| v.parse().ok()) {
            self.server.max_upload_bytes = n;
        }
        self.llm = self.llm.with_overrides_from(var);
        self
    }
}

/// `$CONFIG_DIR/lensocr/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lensocr").join("config.toml"))
}
