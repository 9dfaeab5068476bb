//! Search executor — the single target both timing controllers drive.
//!
//! Runs the prefix lookup, classifies the outcome, and publishes
//! [`SearchState`] over a watch channel. Publishing is last-write-wins: when
//! the debounce path and the throttle path execute close together, the
//! later execution's state is authoritative. The executor is deterministic
//! per term, so divergent final states only occur when the term itself
//! changed between the two executions — which is the desired
//! "latest term wins" outcome.

use crate::search::prefix_matches;
use crate::types::SearchState;
use tokio::sync::watch;

/// Notice published when a non-empty term matches no candidate.
pub const NO_MATCH_NOTICE: &str = "no matches";

/// Sole writer of [`SearchState`].
///
/// Shared between the debounce and throttle paths behind an `Arc`;
/// [`execute`](SearchExecutor::execute) takes `&self` so both paths call it
/// without locking. The watch channel keeps only the latest value, so
/// observers never see intermediate states they are too slow for.
pub struct SearchExecutor {
    candidates: Vec<String>,
    state: watch::Sender<SearchState>,
}

impl SearchExecutor {
    /// Build an executor over `candidates`. The initial published state is
    /// empty and idle.
    pub fn new(candidates: Vec<String>) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self { candidates, state }
    }

    /// Subscribe to state publishes.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Run one search for `term` and publish the outcome.
    ///
    /// A whitespace-only term clears results and message. Otherwise the
    /// prefix filter runs over the raw term; an empty hit list publishes
    /// [`NO_MATCH_NOTICE`]. `busy` is raised for the duration of the call.
    pub fn execute(&self, term: &str) {
        self.state.send_modify(|s| s.busy = true);

        let next = if term.trim().is_empty() {
            tracing::debug!("search cleared");
            SearchState::default()
        } else {
            let results = prefix_matches(term, &self.candidates);
            tracing::debug!(term = %term, hits = results.len(), "search executed");
            let message = if results.is_empty() {
                Some(NO_MATCH_NOTICE.to_string())
            } else {
                None
            };
            SearchState {
                results,
                message,
                busy: false,
            }
        };

        self.state.send_replace(next);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn executor() -> SearchExecutor {
        SearchExecutor::new(
            ["daniel0113", "rebeka", "kriszta", "Krisztián01"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    #[test]
    fn publishes_hits_without_message() {
        let ex = executor();
        let rx = ex.subscribe();
        ex.execute("dan");
        let state = rx.borrow();
        assert_eq!(state.results, vec!["daniel0113"]);
        assert_eq!(state.message, None);
        assert!(!state.busy);
    }

    #[test]
    fn publishes_notice_on_no_match() {
        let ex = executor();
        let rx = ex.subscribe();
        ex.execute("zzz");
        let state = rx.borrow();
        assert!(state.results.is_empty());
        assert_eq!(state.message.as_deref(), Some(NO_MATCH_NOTICE));
    }

    #[test]
    fn empty_and_whitespace_terms_clear_everything() {
        let ex = executor();
        let rx = ex.subscribe();
        ex.execute("dan");
        ex.execute("");
        assert_eq!(*rx.borrow(), SearchState::default());
        ex.execute("dan");
        ex.execute("   ");
        assert_eq!(*rx.borrow(), SearchState::default());
    }

    #[test]
    fn execution_is_idempotent() {
        let ex = executor();
        let rx = ex.subscribe();
        ex.execute("kri");
        let first = rx.borrow().clone();
        ex.execute("kri");
        assert_eq!(*rx.borrow(), first);
    }

    #[test]
    fn initial_state_is_idle_and_empty() {
        let ex = executor();
        assert_eq!(*ex.subscribe().borrow(), SearchState::default());
    }
}
