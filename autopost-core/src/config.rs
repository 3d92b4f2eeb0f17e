//! Typed application configuration.
//!
//! The configuration is read once at startup. JSON is the default format;
//! files ending in `.toml` are parsed as TOML instead. Missing required
//! fields are reported at load time rather than on first use.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.json";

/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "AUTOPOST_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub ollama: OllamaConfig,
    pub linkedin: LinkedInConfig,
    pub content_search: ContentSearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    pub host: Url,
    pub model: String,
    pub persona: Persona,
}

/// Voice used to steer generated posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub tone: String,
    pub style: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct LinkedInConfig {
    pub access_token: String,
    pub company_page_id: String,
    /// Overrides the public LinkedIn API host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<Url>,
}

// Keeps the access token out of debug logs.
impl std::fmt::Debug for LinkedInConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedInConfig")
            .field("access_token", &"<redacted>")
            .field("company_page_id", &self.company_page_id)
            .field("api_base", &self.api_base)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSearchConfig {
    pub topics: Vec<String>,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        debug!("Reading configuration from {}", path_str);

        let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path_str.clone(),
            },
            ErrorKind::PermissionDenied => ConfigError::PermissionDenied {
                path: path_str.clone(),
            },
            _ => ConfigError::Unreadable {
                path: path_str.clone(),
                source: e,
            },
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let config = if is_toml {
            Self::from_toml_str(&raw)?
        } else {
            Self::from_json_str(&raw)?
        };

        info!(
            "Loaded configuration from {} ({} topics)",
            path_str,
            config.content_search.topics.len()
        );
        Ok(config)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::InvalidFormat {
            details: e.to_string(),
        })
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn topics(&self) -> &[String] {
        &self.content_search.topics
    }
}

/// Returns the configuration path, honouring [`CONFIG_PATH_ENV`].
pub fn resolve_config_path() -> PathBuf {
    config_path_from(std::env::var(CONFIG_PATH_ENV).ok())
}

fn config_path_from(override_path: Option<String>) -> PathBuf {
    match override_path {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_CONFIG_PATH),
    }
}
