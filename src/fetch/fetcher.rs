//! HTTP fetcher implementation
//!
//! This module handles the single GET each worker performs, including:
//! - Building the shared HTTP client with the configured user agent
//! - Applying the per-request timeout
//! - Classifying transport failures so workers can log the exact cause

use crate::fetch::PageBody;
use reqwest::{Client, StatusCode};
use std::fmt;
use std::time::Duration;

/// Cause of a request that never produced a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// No response within the request timeout
    Timeout,

    /// Connection refused, DNS failure or similar
    Connect,

    /// The URL could not be turned into a request
    InvalidUrl,

    /// The response body could not be read or decoded
    Body,

    /// Anything else reqwest reports
    Other,
}

/// Result of a single fetch
#[derive(Debug)]
pub enum FetchOutcome {
    /// HTTP 200 with a readable body
    Success(PageBody),

    /// Any status other than 200
    HttpStatus {
        /// The HTTP status code
        status: u16,
    },

    /// The request failed before a usable response arrived
    Transport {
        /// Classified cause
        kind: TransportKind,
        /// Error description
        error: String,
    },
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Timeout => "request timed out",
            Self::Connect => "no connection",
            Self::InvalidUrl => "invalid URL",
            Self::Body => "unreadable body",
            Self::Other => "request failed",
        };
        f.write_str(text)
    }
}

/// Builds an HTTP client with proper configuration
///
/// Timeouts are applied per request by [`fetch_page`], so the client itself
/// carries none.
///
/// # Example
///
/// ```no_run
/// use printer_status::fetch::build_http_client;
///
/// let client = build_http_client("printer-status/1.0").unwrap();
/// ```
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL once, never retrying
///
/// | Condition | Outcome |
/// |-----------|---------|
/// | HTTP 200 | `Success` |
/// | Any other status | `HttpStatus` |
/// | Timeout (headers or body) | `Transport(Timeout)` |
/// | Connection refused / DNS | `Transport(Connect)` |
/// | Malformed URL | `Transport(InvalidUrl)` |
pub async fn fetch_page(client: &Client, url: &str, timeout: Duration) -> FetchOutcome {
    let response = match client.get(url).timeout(timeout).send().await {
        Ok(response) => response,
        Err(e) => return transport_failure(e),
    };

    let status = response.status();
    if status != StatusCode::OK {
        return FetchOutcome::HttpStatus {
            status: status.as_u16(),
        };
    }

    match response.text().await {
        Ok(body) => FetchOutcome::Success(PageBody {
            url: url.to_string(),
            body,
        }),
        Err(e) if e.is_timeout() => transport_failure(e),
        Err(e) => FetchOutcome::Transport {
            kind: TransportKind::Body,
            error: e.to_string(),
        },
    }
}

/// Classifies a reqwest error
fn transport_failure(e: reqwest::Error) -> FetchOutcome {
    let kind = if e.is_timeout() {
        TransportKind::Timeout
    } else if e.is_connect() {
        TransportKind::Connect
    } else if e.is_builder() {
        TransportKind::InvalidUrl
    } else {
        TransportKind::Other
    };

    FetchOutcome::Transport {
        kind,
        error: e.to_string(),
    }
}
