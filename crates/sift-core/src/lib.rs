//! sift-core — rate-controlled query dispatch.
//!
//! Converts a raw, per-keystroke stream of input changes into a controlled
//! stream of search executions, governed by two independent timing policies
//! that wrap the same executor.
//!
//! # Architecture
//!
//! ```text
//!                      ┌─► Debouncer (trailing) ─┐
//! input ─► Dispatcher ─┤                         ├─► SearchExecutor ─► SearchState
//!                      └─► Throttler (leading) ──┘                      (watch)
//! ```
//!
//! The executor publishes [`SearchState`] over a `tokio::sync::watch`
//! channel. The UI drives the main thread and observes state changes;
//! deferred invocations run as background timer tasks.

pub mod config;
pub mod debounce;
pub mod dispatch;
pub mod executor;
pub mod search;
pub mod throttle;
pub mod types;

pub use dispatch::Dispatcher;
pub use executor::{SearchExecutor, NO_MATCH_NOTICE};
pub use types::SearchState;
