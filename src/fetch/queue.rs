//! Multi-producer/multi-consumer URL queue with a completion barrier
//!
//! Every URL put on the queue counts as one unfinished task. The count only
//! drops when a consumer marks the task done, so [`FetchQueue::join`] waits for
//! processing to finish, not merely for the queue to empty.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use tokio::sync::Notify;

/// Shared queue of pending URLs
#[derive(Debug, Default)]
pub struct FetchQueue {
    pending: Mutex<VecDeque<String>>,
    unfinished: AtomicUsize,
    drained: Notify,
}

/// A URL taken off the queue
///
/// Dropping the task marks it done, whatever happened to the fetch. This keeps
/// the join barrier moving even when a worker unwinds mid-request.
#[derive(Debug)]
pub struct FetchTask<'a> {
    url: String,
    queue: &'a FetchQueue,
}

impl FetchQueue {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a URL and registers it as an unfinished task
    pub fn put(&self, url: impl Into<String>) {
        self.unfinished.fetch_add(1, Ordering::AcqRel);
        self.lock().push_back(url.into());
    }

    /// Takes the next URL, or `None` when nothing is pending
    pub fn pop(&self) -> Option<FetchTask<'_>> {
        let url = self.lock().pop_front()?;
        Some(FetchTask { url, queue: self })
    }

    /// Marks one previously popped task as finished
    ///
    /// Calls beyond the number of enqueued tasks are ignored.
    pub fn task_done(&self) {
        let previous = self
            .unfinished
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));

        match previous {
            Ok(1) => self.drained.notify_waiters(),
            Ok(_) => {}
            Err(_) => tracing::error!("task_done called more times than tasks were enqueued"),
        }
    }

    /// Waits until every enqueued task has been marked done
    pub async fn join(&self) {
        loop {
            let notified = self.drained.notified();
            tokio::pin!(notified);
            // Register before reading the counter so a concurrent final
            // task_done cannot slip between the check and the await.
            notified.as_mut().enable();

            if self.unfinished() == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Number of tasks enqueued but not yet marked done
    pub fn unfinished(&self) -> usize {
        self.unfinished.load(Ordering::Acquire)
    }

    /// Number of URLs waiting to be popped
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no URL is waiting to be popped
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<String>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FetchTask<'_> {
    /// The URL to fetch
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for FetchTask<'_> {
    fn drop(&mut self) {
        self.queue.task_done();
    }
}
