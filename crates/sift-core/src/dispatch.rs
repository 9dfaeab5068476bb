//! Dispatch coordinator — the per-keystroke entry point.
//!
//! Every input change always feeds the debounced path, so the published
//! state eventually reflects the latest term once typing quiesces. The
//! throttled path is additionally fed when the coordinator's own gate
//! passes: more than `limit` elapsed since the last coordinator-level fire,
//! or the trimmed term is empty (clearing the field responds immediately,
//! cooldown or not).
//!
//! The gate here and the throttler's internal cooldown are both real: the
//! coordinator's check approximates, the controller's cooldown enforces.
//! They track separate timestamps and are not kept numerically in sync; the
//! only place they could disagree is the empty-term bypass, where the
//! coordinator resets the cooldown before forwarding. The
//! observable contract is: immediate response on the first keystroke and on
//! clearing the field, at most one leading fire per window otherwise, and a
//! trailing debounced fire with the final term after quiescence.

use crate::debounce::Debouncer;
use crate::executor::SearchExecutor;
use crate::throttle::Throttler;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// The shared target both controllers wrap.
type SharedTarget = Box<dyn Fn(String) + Send + Sync>;

/// Composite rate controller: one [`Debouncer`] and one [`Throttler`]
/// around a shared [`SearchExecutor`], plus the coordinator-level
/// elapsed-time gate.
///
/// Dropping the dispatcher aborts any pending debounce timer (the
/// controllers' own teardown contracts); [`shutdown`](Dispatcher::shutdown)
/// does the same explicitly for callers that outlive their input source.
pub struct Dispatcher {
    debounce: Debouncer<SharedTarget>,
    throttle: Throttler<SharedTarget>,
    limit: Duration,
    last_fire: Option<Instant>,
}

impl Dispatcher {
    /// Wire both controllers to `executor` with the given intervals.
    pub fn new(executor: Arc<SearchExecutor>, delay: Duration, limit: Duration) -> Self {
        let debounced: SharedTarget = {
            let executor = Arc::clone(&executor);
            Box::new(move |term: String| executor.execute(&term))
        };
        let throttled: SharedTarget = {
            let executor = Arc::clone(&executor);
            Box::new(move |term: String| executor.execute(&term))
        };
        Self {
            debounce: Debouncer::new(debounced, delay),
            throttle: Throttler::new(throttled, limit),
            limit,
            last_fire: None,
        }
    }

    /// Entry point, invoked once per raw input change.
    pub fn on_input_change(&mut self, raw: &str) {
        self.debounce.call(raw.to_string());

        let now = Instant::now();
        let gate_open = self
            .last_fire
            .map_or(true, |last| now.duration_since(last) > self.limit);
        let cleared = raw.trim().is_empty();
        if gate_open || cleared {
            if cleared {
                // Clearing must respond now, even mid-cooldown.
                self.throttle.reset();
            }
            self.throttle.call(raw.to_string());
            self.last_fire = Some(now);
        } else {
            tracing::trace!(term = %raw, "immediate path gated");
        }
    }

    /// Abort the pending debounced invocation. Call on teardown when the
    /// consumer goes away before the quiet period elapses.
    pub fn shutdown(&mut self) {
        self.debounce.cancel();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SearchState;
    use tokio::time::sleep;

    const DELAY: Duration = Duration::from_millis(300);
    const LIMIT: Duration = Duration::from_millis(800);

    fn fixture() -> (Arc<SearchExecutor>, Dispatcher) {
        let executor = Arc::new(SearchExecutor::new(
            ["daniel0113", "rebeka", "kriszta", "Krisztián01"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ));
        let dispatcher = Dispatcher::new(Arc::clone(&executor), DELAY, LIMIT);
        (executor, dispatcher)
    }

    #[tokio::test(start_paused = true)]
    async fn first_keystroke_fires_immediately() {
        let (executor, mut dispatcher) = fixture();
        let rx = executor.subscribe();

        dispatcher.on_input_change("d");

        // No timer wait: the throttle path ran synchronously.
        assert_eq!(rx.borrow().results, vec!["daniel0113"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cooldown_gates_intermediate_terms() {
        let (executor, mut dispatcher) = fixture();
        let rx = executor.subscribe();

        dispatcher.on_input_change("d");
        sleep(Duration::from_millis(50)).await;
        dispatcher.on_input_change("re");

        // "re" fell inside the cooldown; the immediate state still shows "d".
        assert_eq!(rx.borrow().results, vec!["daniel0113"]);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_term_bypasses_cooldown() {
        let (executor, mut dispatcher) = fixture();
        let rx = executor.subscribe();

        dispatcher.on_input_change("d");
        sleep(Duration::from_millis(50)).await;
        dispatcher.on_input_change("");

        assert_eq!(*rx.borrow(), SearchState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn debounced_path_reflects_latest_term_after_quiescence() {
        let (executor, mut dispatcher) = fixture();
        let rx = executor.subscribe();

        dispatcher.on_input_change("k");
        sleep(Duration::from_millis(50)).await;
        dispatcher.on_input_change("kr");
        sleep(Duration::from_millis(50)).await;
        dispatcher.on_input_change("kri");

        sleep(DELAY + Duration::from_millis(1)).await;
        assert_eq!(rx.borrow().results, vec!["kriszta", "Krisztián01"]);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_cancels_pending_debounce() {
        let (executor, mut dispatcher) = fixture();
        let rx = executor.subscribe();

        dispatcher.on_input_change("d");
        sleep(Duration::from_millis(50)).await;
        dispatcher.on_input_change("zzz"); // gated; pending on debounce only
        dispatcher.shutdown();

        sleep(DELAY * 2).await;
        // The pending "zzz" execution never happened.
        assert_eq!(rx.borrow().results, vec!["daniel0113"]);
    }
}
