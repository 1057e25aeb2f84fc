//! Fetch orchestrator - enqueue, fan out, join, drain
//!
//! The orchestrator is the only entry point into the fetch engine. It owns
//! the queue and the worker pool for the duration of one batch and always
//! runs the same sequence:
//!
//! 1. Enqueue every URL
//! 2. Start the workers
//! 3. Wait until every task is marked done
//! 4. Drain the collected results
//!
//! A failing URL only costs its own result; the batch fails only when
//! nothing at all was collected.

use crate::config::DEFAULT_USER_AGENT;
use crate::fetch::worker::run_worker;
use crate::fetch::{build_http_client, results_channel, FetchQueue, PageBody};
use crate::FetchError;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Settings for one fetch engine
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Number of concurrent workers
    pub worker_count: usize,

    /// Timeout applied to each request individually
    pub request_timeout: Duration,

    /// User-Agent header value
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            worker_count: 6,
            request_timeout: Duration::from_secs(1),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Reusable fetch engine bound to one HTTP client
#[derive(Debug, Clone)]
pub struct FetchOrchestrator {
    client: Client,
    settings: FetchSettings,
}

impl FetchOrchestrator {
    /// Creates an orchestrator with its own HTTP client
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = build_http_client(&settings.user_agent)?;
        Ok(Self { client, settings })
    }

    /// Creates an orchestrator around an existing client
    pub fn with_client(client: Client, settings: FetchSettings) -> Self {
        Self { client, settings }
    }

    /// The settings this orchestrator runs with
    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// Fetches every URL once; see [`fetch_all`]
    pub async fn fetch_all(&self, urls: &[String]) -> Result<Vec<PageBody>, FetchError> {
        fetch_all(
            &self.client,
            urls,
            self.settings.worker_count,
            self.settings.request_timeout,
        )
        .await
    }
}

/// Fetches every URL concurrently and returns the pages that answered HTTP 200
///
/// Duplicate URLs are fetched independently. Result order is unspecified.
///
/// # Returns
///
/// * `Ok(Vec<PageBody>)` - At least one page was fetched
/// * `Err(FetchError::EmptyResult)` - Every request failed
/// * `Err(FetchError::NoUrls)` / `Err(FetchError::NoWorkers)` - Invalid arguments
///
/// # Example
///
/// ```no_run
/// use printer_status::fetch::{build_http_client, fetch_all};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = build_http_client("printer-status/1.0")?;
/// let urls = vec!["http://192.168.0.11/cgi-bin/dynamic/topbar.html".to_string()];
/// let pages = fetch_all(&client, &urls, 6, Duration::from_secs(1)).await?;
/// # Ok(())
/// # }
/// ```
pub async fn fetch_all(
    client: &Client,
    urls: &[String],
    worker_count: usize,
    per_request_timeout: Duration,
) -> Result<Vec<PageBody>, FetchError> {
    if urls.is_empty() {
        return Err(FetchError::NoUrls);
    }
    if worker_count == 0 {
        return Err(FetchError::NoWorkers);
    }

    let queue = Arc::new(FetchQueue::new());
    for url in urls {
        tracing::debug!(url = %url, "Enqueueing URL");
        queue.put(url.as_str());
    }
    tracing::debug!("Queue filled with {} URLs", queue.len());

    let (sink, mut collector) = results_channel();
    let mut workers = JoinSet::new();

    tracing::debug!("Starting {} workers", worker_count);
    for id in 0..worker_count {
        workers.spawn(run_worker(
            id,
            Arc::clone(&queue),
            sink.clone(),
            client.clone(),
            per_request_timeout,
        ));
    }
    drop(sink);

    queue.join().await;
    let pages = collector.drain();

    // The queue is empty, so every worker exits on its next pop.
    while let Some(joined) = workers.join_next().await {
        if let Err(e) = joined {
            tracing::error!("Fetch worker terminated abnormally: {}", e);
        }
    }

    if pages.is_empty() {
        tracing::warn!("No page answered out of {} requested", urls.len());
        return Err(FetchError::EmptyResult {
            attempted: urls.len(),
        });
    }

    tracing::info!("Fetched {} of {} pages", pages.len(), urls.len());
    Ok(pages)
}
