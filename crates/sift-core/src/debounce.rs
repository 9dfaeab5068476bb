//! Debounce controller — trailing-edge rate control.
//!
//! A [`Debouncer`] delays its wrapped target until `delay` has elapsed with
//! no further call. Each call supersedes the previous one: the pending timer
//! task is aborted and a new one scheduled, so for any burst only the final
//! term ever reaches the target.
//!
//! Teardown is explicit. [`Debouncer::cancel`] (or dropping the controller)
//! aborts the pending task — a timer must never fire into a torn-down
//! consumer.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Trailing-edge debounce around a shared target.
///
/// At most one timer task is pending per instance at any time. Requires an
/// ambient tokio runtime: [`call`](Debouncer::call) spawns the deferred
/// invocation as a background task.
pub struct Debouncer<F> {
    target: Arc<F>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl<F> Debouncer<F>
where
    F: Fn(String) + Send + Sync + 'static,
{
    pub fn new(target: F, delay: Duration) -> Self {
        Self {
            target: Arc::new(target),
            delay,
            pending: None,
        }
    }

    /// Schedule `target(term)` for `delay` from now, superseding any pending
    /// invocation. The superseded timer is aborted, never left to fire.
    pub fn call(&mut self, term: String) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let target = Arc::clone(&self.target);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::debug!(term = %term, "debounce fired");
            target(term);
        }));
    }

    /// Abort the pending invocation, if any. Safe to call repeatedly; part
    /// of the teardown contract rather than an optimisation.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            tracing::debug!("debounce cancelled");
        }
    }
}

impl<F> Drop for Debouncer<F> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
