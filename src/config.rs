use std::path::PathBuf;

use directories::ProjectDirs;
use eol_data::{EolError, Result};
use serde::Deserialize;
use url::Url;

use crate::cli::OutputFormat;

const BASE_URL_ENV: &str = "EOL_BASE_URL";

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub base_url: Option<String>,
    pub format: Option<OutputFormat>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| EolError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| EolError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "eol")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(EolError::NoConfigDir)
    }

    /// Get the API base URL: explicit flag, then env var, then config file.
    /// `None` means the public endoflife.date API.
    pub fn base_url(&self, explicit: Option<&str>) -> Result<Option<String>> {
        let from_env = std::env::var(BASE_URL_ENV).ok();
        resolve_base_url(explicit, from_env.as_deref(), self.base_url.as_deref())
    }
}

fn resolve_base_url(
    explicit: Option<&str>,
    from_env: Option<&str>,
    configured: Option<&str>,
) -> Result<Option<String>> {
    let Some(raw) = explicit.or(from_env).or(configured) else {
        return Ok(None);
    };

    let url = Url::parse(raw).map_err(|_| EolError::InvalidBaseUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || !raw.ends_with('/') {
        return Err(EolError::InvalidBaseUrl(raw.to_string()));
    }

    Ok(Some(raw.to_string()))
}
