//! Integration tests for the printer scraper
//!
//! These tests use wiremock to serve printer pages and run complete
//! fetch → extract cycles end-to-end.

mod fetch_tests;
mod fixtures;
mod scrape_tests;
