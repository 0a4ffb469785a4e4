//! Configuration handling for the contact client

use crate::state::PROFILE;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Environment variable overriding the configured backend address
pub const BACKEND_URL_ENV: &str = "FOLIO_BACKEND_URL";

/// Default backend address
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8001";

/// Default number of inquiries per inbox page
const DEFAULT_INBOX_PAGE_SIZE: u32 = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("backend URL `{url}` is not valid: {source}")]
    InvalidBackendUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("backend URL `{0}` must use http or https")]
    UnsupportedScheme(String),
    #[error("inbox page size must be at least 1")]
    ZeroPageSize,
}

/// User configuration, stored as JSON in the platform config directory
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FolioConfig {
    /// Base address of the contact-intake backend
    pub backend_url: Option<String>,
    /// Address offered when a submission cannot be delivered
    pub fallback_email: Option<String>,
    /// Transport timeout for backend requests
    pub request_timeout_secs: Option<u64>,
    /// Inquiries per inbox page
    pub inbox_page_size: Option<u32>,
}

impl FolioConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "folio", "folio-contact")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FolioConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Write a default config file on first launch so users have a template to edit
    pub fn init_if_missing() -> Result<()> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Self::default().save_to(&path)?;
                tracing::info!(path = %path.display(), "wrote default config");
            }
        }
        Ok(())
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Resolved settings the application runs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub backend_url: Url,
    pub fallback_email: String,
    pub request_timeout: Option<Duration>,
    pub inbox_page_size: u32,
}

impl Settings {
    /// Resolve settings from the config file and the process environment
    pub fn resolve(config: &FolioConfig) -> Result<Self, ConfigError> {
        let env_url = std::env::var(BACKEND_URL_ENV).ok();
        Self::resolve_with(config, env_url.as_deref())
    }

    /// Resolve settings, letting `env_url` take precedence over the file
    pub fn resolve_with(config: &FolioConfig, env_url: Option<&str>) -> Result<Self, ConfigError> {
        let raw_url = env_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .or(config.backend_url.as_deref())
            .unwrap_or(DEFAULT_BACKEND_URL);

        let backend_url = Url::parse(raw_url).map_err(|source| ConfigError::InvalidBackendUrl {
            url: raw_url.to_string(),
            source,
        })?;
        if !matches!(backend_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(raw_url.to_string()));
        }

        let inbox_page_size = config.inbox_page_size.unwrap_or(DEFAULT_INBOX_PAGE_SIZE);
        if inbox_page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }

        let fallback_email = config
            .fallback_email
            .clone()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| PROFILE.email.to_string());

        Ok(Self {
            backend_url,
            fallback_email,
            request_timeout: config.request_timeout_secs.map(Duration::from_secs),
            inbox_page_size,
        })
    }
}
