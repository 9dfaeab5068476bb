//! sift — rate-controlled as-you-type search for the terminal.
//!
//! Converts the per-keystroke stream from the input bar into a controlled
//! stream of search executions: a trailing-edge debouncer guarantees the
//! final term is always searched once typing settles, while a leading-edge
//! throttle path keeps the UI responsive during bursts without hammering
//! the matcher on every keystroke.
//!
//! # Architecture
//!
//! ```text
//!                     ┌─► Debouncer (trailing) ─┐
//! keys ─► Dispatcher ─┤                         ├─► SearchExecutor ─► SearchState ─► TUI
//!                     └─► Throttler (leading) ──┘                      (watch)
//! ```
//!
//! The layers live in their own workspace crates so integration tests and
//! alternative front-ends can import them directly: `sift-core` holds the
//! timing controllers and the executor, `sift-data` the candidate sources,
//! `sift-tui` the ratatui shell.

pub use sift_core::{Dispatcher, SearchExecutor, SearchState, NO_MATCH_NOTICE};
pub use sift_data::{builtin, from_file};
