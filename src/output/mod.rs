//! Output module for presenting scrape results
//!
//! This module handles rendering printer snapshots for the command line.

mod report;

pub use report::{format_report, print_report};
