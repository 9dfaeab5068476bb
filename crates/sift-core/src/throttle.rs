//! Throttle controller — leading-edge rate control.
//!
//! A [`Throttler`] invokes its target synchronously on the first call of
//! each cooldown window and drops every further call until the window has
//! fully elapsed. There is no trailing invocation: a dropped call is gone;
//! the debounced path is responsible for eventually reflecting the final
//! term.

use std::time::Duration;
use tokio::time::Instant;

/// Leading-edge throttle around a target.
///
/// Cooldown bookkeeping is a single `Option<Instant>`: a call fires iff no
/// previous fire happened within `limit`. The boundary is inclusive — a
/// call arriving exactly `limit` after the last fire goes through.
pub struct Throttler<F> {
    target: F,
    limit: Duration,
    last_fire: Option<Instant>,
}

impl<F> Throttler<F>
where
    F: Fn(String),
{
    pub fn new(target: F, limit: Duration) -> Self {
        Self {
            target,
            limit,
            last_fire: None,
        }
    }

    /// Invoke the target with `term` unless the cooldown is active.
    ///
    /// Fires synchronously in the caller's turn; suppressed calls return
    /// without any deferred effect.
    pub fn call(&mut self, term: String) {
        let now = Instant::now();
        if let Some(last) = self.last_fire {
            if now.duration_since(last) < self.limit {
                tracing::trace!(term = %term, "throttle suppressed");
                return;
            }
        }
        self.last_fire = Some(now);
        tracing::debug!(term = %term, "throttle fired");
        (self.target)(term);
    }

    /// Clear the cooldown so the next call fires unconditionally.
    pub fn reset(&mut self) {
        self.last_fire = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
