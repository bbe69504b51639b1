use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EolError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}) for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to parse response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cycle #{index} from {url} does not match the expected schema: {source}")]
    SchemaMismatch {
        url: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Invalid base URL (expected an http(s) URL ending in '/'): {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Cycle {cycle} not found for {product}")]
    CycleNotFound { product: String, cycle: String },
}

pub type Result<T> = std::result::Result<T, EolError>;
