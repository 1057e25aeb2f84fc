//! Fetch worker loop

use crate::fetch::{fetch_page, FetchOutcome, FetchQueue, ResultSink};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Drains the queue until it is empty
///
/// Every popped task is marked done when it goes out of scope, whether the
/// fetch succeeded or not. Returns the number of URLs this worker handled.
pub(crate) async fn run_worker(
    id: usize,
    queue: Arc<FetchQueue>,
    sink: ResultSink,
    client: Client,
    timeout: Duration,
) -> usize {
    let mut handled = 0;

    while let Some(task) = queue.pop() {
        let url = task.url();
        tracing::debug!(worker = id, url, "Requesting page");

        match fetch_page(&client, url, timeout).await {
            FetchOutcome::Success(page) => {
                tracing::debug!(worker = id, url, "HTTP 200 received, storing page");
                sink.deposit(page);
            }
            FetchOutcome::HttpStatus { status } => {
                tracing::debug!(worker = id, url, status, "Request failed with HTTP status");
            }
            FetchOutcome::Transport { kind, error } => {
                tracing::warn!(worker = id, url, %error, "Request failed: {}", kind);
            }
        }

        handled += 1;
    }

    tracing::trace!(worker = id, handled, "Queue empty, worker exiting");
    handled
}
