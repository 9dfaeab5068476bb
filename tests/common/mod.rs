#![allow(dead_code)]
//! Shared test utilities for sift integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. All helpers are deterministic with
//! `tokio::time::pause()`.

use std::sync::{Arc, Mutex};

/// The demo candidate set used across harnesses.
pub fn demo_candidates() -> Vec<String> {
    ["daniel0113", "rebeka", "kriszta", "Krisztián01"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// A target that records every term it receives, for controller-level
/// assertions about exactly which invocations went through.
pub struct Recorder {
    fired: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            fired: Arc::default(),
        }
    }

    /// A target closure feeding this recorder. May be handed to several
    /// controllers at once.
    pub fn target(&self) -> impl Fn(String) + Send + Sync + 'static {
        let sink = Arc::clone(&self.fired);
        move |term| sink.lock().unwrap().push(term)
    }

    /// Every term fired so far, in order.
    pub fn fired(&self) -> Vec<String> {
        self.fired.lock().unwrap().clone()
    }

    pub fn fire_count(&self) -> usize {
        self.fired.lock().unwrap().len()
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}
