//! Configuration module for Printer-Status
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use printer_status::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("printers.toml")).unwrap();
//! println!("Fetching with {} workers", config.fetcher.worker_count);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetcherConfig, PrinterEntry, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
