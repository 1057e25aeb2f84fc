//! Printer scrape pipeline
//!
//! This module ties the fetch engine and the extraction schemas together:
//! - Deriving the status and topbar URLs from a printer address
//! - Matching fetched pages back to their role
//! - Assembling the immutable status snapshot

mod pages;
mod scrape;
mod snapshot;

pub use pages::{page_urls, PageRole, PageSet};
pub use scrape::{scrape_printer, PrinterScraper};
pub use snapshot::PrinterStatusSnapshot;
