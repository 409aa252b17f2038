use crate::models::config::Config;
use crate::models::error::{Result, ScanError};
use crate::models::property::{Property, PropertySet};
use log::{info, warn};
use std::path::Path;

/// Validates the entire configuration
pub fn validate_config(config: &Config) -> Result<()> {
    info!("Validating configuration...");

    validate_paths(&config.paths)?;
    validate_properties(&config.properties)?;
    validate_collector(config)?;

    info!("Configuration validation passed");
    Ok(())
}

/// Paths must be present and absolute. Existence is checked by the walk itself.
fn validate_paths(paths: &[String]) -> Result<()> {
    if paths.is_empty() {
        return Err(ScanError::InvalidConfig(
            "At least one path must be configured".to_string(),
        ));
    }

    for (idx, path) in paths.iter().enumerate() {
        if !Path::new(path).is_absolute() {
            return Err(ScanError::InvalidConfig(format!(
                "Path #{} is not absolute: {}",
                idx + 1,
                path
            )));
        }
    }

    Ok(())
}

fn validate_properties(properties: &[String]) -> Result<()> {
    if properties.is_empty() {
        return Err(ScanError::InvalidConfig(
            "At least one property must be configured".to_string(),
        ));
    }

    // Unknown names are tolerated; records just leave those fields empty
    for name in properties {
        if name.parse::<Property>().is_err() {
            warn!("Ignoring unrecognized property '{}'", name);
        }
    }

    if PropertySet::from_names(properties).is_empty() {
        let known: Vec<&str> = Property::ALL.iter().map(|p| p.name()).collect();
        warn!(
            "None of the configured properties are recognized, records will only carry the run id. Known properties: {}",
            known.join(", ")
        );
    }

    Ok(())
}

fn validate_collector(config: &Config) -> Result<()> {
    if config.server.trim().is_empty() {
        return Err(ScanError::InvalidConfig(
            "server must not be empty".to_string(),
        ));
    }

    if config.port == 0 {
        return Err(ScanError::InvalidConfig(
            "port must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
