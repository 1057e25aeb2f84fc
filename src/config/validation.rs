use crate::config::types::{Config, FetcherConfig, PrinterEntry};
use crate::extract::schema;
use crate::ConfigError;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_printers(&config.printers)?;
    Ok(())
}

/// Validates fetch engine configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.worker_count < 1 || config.worker_count > 64 {
        return Err(ConfigError::Validation(format!(
            "worker_count must be between 1 and 64, got {}",
            config.worker_count
        )));
    }

    if config.request_timeout_ms < 100 || config.request_timeout_ms > 60_000 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_ms must be between 100 and 60000, got {}ms",
            config.request_timeout_ms
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the printer list
fn validate_printers(printers: &[PrinterEntry]) -> Result<(), ConfigError> {
    if printers.is_empty() {
        return Err(ConfigError::Validation(
            "At least one [[printer]] entry is required".to_string(),
        ));
    }

    let mut names = HashSet::new();
    for entry in printers {
        if entry.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Printer name cannot be empty".to_string(),
            ));
        }

        if !names.insert(entry.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Duplicate printer name '{}'",
                entry.name
            )));
        }

        validate_address(&entry.address)?;

        if schema::find(&entry.model).is_none() {
            return Err(ConfigError::Validation(format!(
                "Printer '{}' has unsupported model '{}'",
                entry.name, entry.model
            )));
        }
    }

    Ok(())
}

/// Validates a printer base address
fn validate_address(address: &str) -> Result<(), ConfigError> {
    let url = Url::parse(address).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid printer address '{}': {}", address, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Printer address '{}' must use http or https",
            address
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Printer address '{}' has no host",
            address
        )));
    }

    Ok(())
}
