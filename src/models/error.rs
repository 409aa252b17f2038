use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read config file '{path}': {cause}")]
    ConfigRead { path: PathBuf, cause: io::Error },

    #[error("Failed to parse config file '{path}': {cause}")]
    ConfigParse {
        path: PathBuf,
        cause: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to walk '{root}': {cause}")]
    Walk {
        root: PathBuf,
        cause: walkdir::Error,
    },

    #[error("Failed to get metadata for '{path}': {cause}")]
    Metadata { path: PathBuf, cause: io::Error },

    #[error("Failed to hash file '{path}': {cause}")]
    Hash { path: PathBuf, cause: io::Error },

    #[error("Failed to determine machine name: {0}")]
    MachineName(io::Error),

    #[error("Failed to serialize {payload} payload: {cause}")]
    Serialize {
        payload: &'static str,
        cause: serde_json::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),

    #[error("Request {method} {url} failed: {cause}")]
    Transport {
        method: String,
        url: String,
        cause: reqwest::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;
