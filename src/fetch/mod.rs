//! Concurrent fetch engine
//!
//! This module drains a queue of URLs with a fixed pool of workers:
//! - A shared work queue with a join barrier
//! - Workers issuing one bounded-timeout GET per URL
//! - A results channel that only ever receives HTTP 200 bodies
//! - An orchestrator enforcing enqueue → start → join → drain

mod collector;
mod fetcher;
mod orchestrator;
mod queue;
mod worker;

pub use collector::{results_channel, PageBody, ResultSink, ResultsCollector};
pub use fetcher::{build_http_client, fetch_page, FetchOutcome, TransportKind};
pub use orchestrator::{fetch_all, FetchOrchestrator, FetchSettings};
pub use queue::{FetchQueue, FetchTask};
