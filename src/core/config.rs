//! Configuration for the data endpoints, the description service and the viewer
//!
//! Every section has working defaults, so an empty TOML file (or no file at
//! all) yields a configuration that talks to a local backend.

use crate::constants::{
    ALL_CATEGORIES, DEFAULT_API_BASE_URL, DEFAULT_CATEGORIES, DEFAULT_DESCRIPTION_ENDPOINT,
    DEFAULT_DESCRIPTION_MODEL, DESCRIPTION_FALLBACK,
};
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub description: DescriptionConfig,
    pub view: ViewConfig,
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(Error::Config("api.base_url must not be empty".into()));
        }
        if self.description.cache_size == 0 {
            return Err(Error::Config("description.cache_size must be at least 1".into()));
        }
        if !self.view.categories.iter().any(|c| c == ALL_CATEGORIES) {
            return Err(Error::Config(format!(
                "view.categories must include \"{}\"",
                ALL_CATEGORIES
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub universities_path: String,
    pub employees_path: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn universities_url(&self) -> String {
        join_url(&self.base_url, &self.universities_path)
    }

    pub fn employees_url(&self) -> String {
        join_url(&self.base_url, &self.employees_path)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            universities_path: "/universities".to_string(),
            employees_path: "/employees".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DescriptionConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub cache_size: usize,
    pub fallback: String,
}

impl DescriptionConfig {
    /// Reads the key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for DescriptionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_DESCRIPTION_ENDPOINT.to_string(),
            model: DEFAULT_DESCRIPTION_MODEL.to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            cache_size: 128,
            fallback: DESCRIPTION_FALLBACK.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub categories: Vec<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
