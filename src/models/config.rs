use crate::models::config_validator::validate_config;
use crate::models::error::{Result, ScanError};
use crate::models::property::PropertySet;
use log::info;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(alias = "Paths")]
    pub paths: Vec<String>,
    #[serde(alias = "Properties")]
    pub properties: Vec<String>,
    #[serde(alias = "Server")]
    pub server: String,
    #[serde(alias = "Port", deserialize_with = "port_from_number_or_string")]
    pub port: u16,
}

impl Config {
    pub fn property_set(&self) -> PropertySet {
        PropertySet::from_names(&self.properties)
    }

    pub fn collector_url(&self) -> String {
        format!("http://{}:{}", self.server, self.port)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPort {
    Number(u16),
    Text(String),
}

fn port_from_number_or_string<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    match RawPort::deserialize(deserializer)? {
        RawPort::Number(port) => Ok(port),
        RawPort::Text(text) => text
            .trim()
            .parse::<u16>()
            .map_err(|e| serde::de::Error::custom(format!("invalid port '{}': {}", text, e))),
    }
}

pub fn setup_config(config_file: String) -> Result<Config> {
    let config_path = PathBuf::from(config_file);
    info!("Loading config from: {}", config_path.display());

    let config_str = fs::read_to_string(&config_path).map_err(|cause| ScanError::ConfigRead {
        path: config_path.clone(),
        cause,
    })?;

    let config: Config =
        serde_json::from_str(&config_str).map_err(|cause| ScanError::ConfigParse {
            path: config_path,
            cause,
        })?;

    validate_config(&config)?;

    Ok(config)
}
