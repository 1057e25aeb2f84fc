use crate::extract::schema::LEXMARK_MS811;
use crate::fetch::FetchSettings;
use serde::Deserialize;
use std::time::Duration;

/// User agent sent when the configuration does not name one
pub const DEFAULT_USER_AGENT: &str = concat!("printer-status/", env!("CARGO_PKG_VERSION"));

/// Main configuration structure for Printer-Status
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,

    #[serde(default, rename = "printer")]
    pub printers: Vec<PrinterEntry>,
}

/// Fetch engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// Number of concurrent fetch workers
    #[serde(rename = "worker-count", default = "default_worker_count")]
    pub worker_count: usize,

    /// Per-request timeout (milliseconds)
    #[serde(rename = "request-timeout-ms", default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// User-Agent header sent to the printer
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// A printer to scrape
#[derive(Debug, Clone, Deserialize)]
pub struct PrinterEntry {
    /// Display name used in logs and reports
    pub name: String,

    /// Base address of the printer's web interface (e.g., "http://192.168.0.11")
    pub address: String,

    /// Model name selecting the extraction schema
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_worker_count() -> usize {
    6
}

fn default_request_timeout_ms() -> u64 {
    1000
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_model() -> String {
    LEXMARK_MS811.model.to_string()
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            worker_count: default_worker_count(),
            request_timeout_ms: default_request_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl FetcherConfig {
    /// Converts this section into the settings consumed by the fetch engine
    pub fn settings(&self) -> FetchSettings {
        FetchSettings {
            worker_count: self.worker_count,
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            user_agent: self.user_agent.clone(),
        }
    }
}

impl Config {
    /// Builds a single-printer configuration with default fetcher settings
    pub fn for_address(address: impl Into<String>) -> Self {
        let address = address.into();
        Self {
            fetcher: FetcherConfig::default(),
            printers: vec![PrinterEntry {
                name: address.clone(),
                address,
                model: default_model(),
            }],
        }
    }
}
