//! Printer-Status: a concurrent scraper for printer status pages
//!
//! This crate fetches the embedded web pages of a network printer with a bounded
//! worker pool, then extracts tray levels, consumable percentages and the status
//! line from the returned markup into an immutable snapshot.

pub mod config;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod printer;

use thiserror::Error;

/// Main error type for a scrape cycle
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Printer at {address} is unreachable, check the address")]
    PageUnreachable { address: String },

    #[error("The {role} page could not be fetched")]
    MissingPage { role: printer::PageRole },

    #[error("No extraction schema for printer model '{0}'")]
    UnknownModel(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),
}

/// Errors raised by the fetch engine
///
/// Per-URL transport failures never appear here: workers absorb them.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No URLs to fetch")]
    NoUrls,

    #[error("Worker count must be at least 1")]
    NoWorkers,

    #[error("None of the {attempted} requested pages returned a result")]
    EmptyResult { attempted: usize },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Errors raised while extracting fields from a parsed page
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Incompatible printer model: expected '{expected}', found '{found}'")]
    IncompatibleModel { expected: String, found: String },

    #[error("Required element missing: {0}")]
    MissingElement(String),

    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue { field: String, value: String },

    #[error("Invalid pattern in extraction schema: {0}")]
    InvalidPattern(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for scrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for extraction operations
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use fetch::{fetch_all, FetchOrchestrator, FetchSettings, PageBody};
pub use printer::{scrape_printer, PageRole, PrinterStatusSnapshot};
