//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SEMSCORE_*` environment variables.
//!
//! Provider selection is explicit: components never read ambient environment
//! state themselves. [`Config::from_env`] is the single place the process
//! environment is consulted; everything downstream receives plain values.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_REMOTE_ENDPOINT, DEFAULT_REMOTE_MODEL, DEFAULT_REQUEST_TIMEOUT_SECS,
};

/// Which embedding provider the engine prefers.
///
/// `Remote` still requires an API key to take effect; without one the engine
/// runs on the local model alone. `Local` disables the remote path entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// Prefer the remote HTTP provider, falling back to the local model.
    #[default]
    Remote,
    /// Use only the local in-process model.
    Local,
}

impl std::str::FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(ProviderKind::Remote),
            "local" => Ok(ProviderKind::Local),
            _ => Err(ConfigError::InvalidProvider {
                value: s.to_string(),
            }),
        }
    }
}

/// Scoring engine configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SEMSCORE_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Preferred embedding provider. Default: `remote`.
    pub provider: ProviderKind,

    /// API key for the remote provider. No default; without it the remote
    /// path stays disabled.
    pub api_key: Option<String>,

    /// Remote embeddings endpoint URL.
    pub remote_endpoint: String,

    /// Remote embedding model identifier.
    pub remote_model: String,

    /// Timeout for one remote embedding request, in seconds.
    pub request_timeout_secs: u64,

    /// Directory holding the local model (`config.json` + `model.safetensors`).
    pub model_dir: Option<PathBuf>,

    /// Path to `tokenizer.json`. Defaults to `{model_dir}/tokenizer.json`.
    pub tokenizer_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Remote,
            api_key: None,
            remote_endpoint: DEFAULT_REMOTE_ENDPOINT.to_string(),
            remote_model: DEFAULT_REMOTE_MODEL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            model_dir: None,
            tokenizer_path: None,
        }
    }
}

impl Config {
    const ENV_PROVIDER: &'static str = "SEMSCORE_PROVIDER";
    const ENV_API_KEY: &'static str = "SEMSCORE_API_KEY";
    const ENV_REMOTE_ENDPOINT: &'static str = "SEMSCORE_REMOTE_ENDPOINT";
    const ENV_REMOTE_MODEL: &'static str = "SEMSCORE_REMOTE_MODEL";
    const ENV_REQUEST_TIMEOUT_SECS: &'static str = "SEMSCORE_REQUEST_TIMEOUT_SECS";
    const ENV_MODEL_DIR: &'static str = "SEMSCORE_MODEL_DIR";
    const ENV_TOKENIZER_PATH: &'static str = "SEMSCORE_TOKENIZER_PATH";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let provider = Self::parse_provider_from_env(defaults.provider)?;
        let api_key = Self::parse_optional_string_from_env(Self::ENV_API_KEY);
        let remote_endpoint =
            Self::parse_string_from_env(Self::ENV_REMOTE_ENDPOINT, defaults.remote_endpoint);
        let remote_model =
            Self::parse_string_from_env(Self::ENV_REMOTE_MODEL, defaults.remote_model);
        let request_timeout_secs = Self::parse_timeout_from_env(defaults.request_timeout_secs)?;
        let model_dir = Self::parse_optional_path_from_env(Self::ENV_MODEL_DIR);
        let tokenizer_path = Self::parse_optional_path_from_env(Self::ENV_TOKENIZER_PATH);

        Ok(Self {
            provider,
            api_key,
            remote_endpoint,
            remote_model,
            request_timeout_secs,
            model_dir,
            tokenizer_path,
        })
    }

    /// Validates paths and basic invariants (does not touch the network).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_dir {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if let Some(ref path) = self.tokenizer_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `true` if the remote path is both selected and credentialed.
    pub fn remote_enabled(&self) -> bool {
        self.provider == ProviderKind::Remote
            && self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Returns the remote request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn parse_provider_from_env(default: ProviderKind) -> Result<ProviderKind, ConfigError> {
        match env::var(Self::ENV_PROVIDER) {
            Ok(value) => value.parse(),
            Err(_) => Ok(default),
        }
    }

    fn parse_timeout_from_env(default: u64) -> Result<u64, ConfigError> {
        match env::var(Self::ENV_REQUEST_TIMEOUT_SECS) {
            Ok(value) => {
                let secs: u64 = value.parse().map_err(|e| ConfigError::TimeoutParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if secs == 0 {
                    return Err(ConfigError::InvalidTimeout { value });
                }

                Ok(secs)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        Self::parse_optional_string_from_env(var_name).map(PathBuf::from)
    }
}
