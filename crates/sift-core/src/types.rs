//! Core types for sift-core.
//!
//! [`SearchState`] is the single observable surface of the search pipeline:
//! the executor is its sole writer, everything else holds a read-only
//! `watch::Receiver`.

/// The published outcome of the most recent search execution.
///
/// Owned exclusively by the
/// [`SearchExecutor`](crate::executor::SearchExecutor); the presentation
/// layer observes it through a `tokio::sync::watch` channel and never
/// constructs or mutates it directly.
///
/// Invariants:
/// - `message` is `Some` only when `results` is empty and the searched term
///   (trimmed) was non-empty.
/// - `busy` is true only while one execution is in flight. The synchronous
///   executor flips it back within the same call; the shape is kept so an
///   async executor could replace it without changing observers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    /// Matching candidates, in candidate-set iteration order.
    pub results: Vec<String>,
    /// User-facing notice, set only when a non-empty term matched nothing.
    pub message: Option<String>,
    /// True while a search execution is in flight.
    pub busy: bool,
}
