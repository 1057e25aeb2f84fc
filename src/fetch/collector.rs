//! Results collector for successful fetches
//!
//! Workers hold a [`ResultSink`] and the orchestrator owns the matching
//! [`ResultsCollector`]. Only HTTP 200 bodies are ever sent.

use tokio::sync::mpsc::{self, error::TryRecvError};

/// The body of a page that answered HTTP 200
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBody {
    /// URL exactly as it was enqueued
    pub url: String,

    /// Decoded response body
    pub body: String,
}

/// Sending half, cloned into every worker
#[derive(Debug, Clone)]
pub struct ResultSink {
    tx: mpsc::UnboundedSender<PageBody>,
}

/// Receiving half, drained once by the orchestrator
#[derive(Debug)]
pub struct ResultsCollector {
    rx: mpsc::UnboundedReceiver<PageBody>,
}

/// Creates a connected sink/collector pair
pub fn results_channel() -> (ResultSink, ResultsCollector) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ResultSink { tx }, ResultsCollector { rx })
}

impl ResultSink {
    /// Records a successful fetch
    pub fn deposit(&self, page: PageBody) {
        if let Err(e) = self.tx.send(page) {
            tracing::warn!(url = %e.0.url, "Results collector closed, dropping page");
        }
    }
}

impl ResultsCollector {
    /// Takes every result deposited so far without waiting for more
    pub fn drain(&mut self) -> Vec<PageBody> {
        let mut pages = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(page) => pages.push(page),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        tracing::debug!("Drained {} results", pages.len());
        pages
    }
}
