//! Query input pipeline
//!
//! Collapses raw text-change events into settled query emissions.
//! Rapid keystrokes inside a 300 ms window produce a single
//! trailing-edge emission carrying the latest value; a settled value
//! identical to the previous emission is suppressed. An explicit
//! commit (the search key) skips the window entirely and is never
//! suppressed.
//!
//! The pipeline holds no timer of its own. The owning event loop
//! drives it by calling [`QueryPipeline::poll`] on each tick with the
//! current instant, which is also what makes the timing behavior
//! directly testable with synthetic instants.

use std::time::{Duration, Instant};

/// Coalescing window for raw text-change events.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// A burst of raw events awaiting its trailing edge.
struct PendingBurst {
    /// Latest raw value seen in this burst.
    value: String,
    /// When the burst settles. Anchored at the burst's first event;
    /// later events replace the value but do not move the deadline.
    deadline: Instant,
}

/// Collapses text-change events into settled query emissions.
///
/// Owned by the screen that feeds it; emissions are returned from
/// [`poll`](Self::poll) and [`commit`](Self::commit) rather than
/// delivered through a stored callback, so the pipeline never holds a
/// reference back into its owner.
pub struct QueryPipeline {
    window: Duration,
    pending: Option<PendingBurst>,
    last_emitted: Option<String>,
}

impl Default for QueryPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryPipeline {
    pub fn new() -> Self {
        Self::with_window(DEBOUNCE_WINDOW)
    }

    /// Pipeline with a custom coalescing window.
    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            last_emitted: None,
        }
    }

    /// Record a raw text-change event at `now`.
    ///
    /// An absent text value counts as the empty string. Nothing is
    /// emitted here; the value surfaces from [`poll`](Self::poll) once
    /// the window closes.
    pub fn note_input(&mut self, raw: Option<&str>, now: Instant) {
        let value = raw.unwrap_or("").to_string();
        match self.pending {
            Some(ref mut burst) => burst.value = value,
            None => {
                self.pending = Some(PendingBurst {
                    value,
                    deadline: now + self.window,
                });
            }
        }
    }

    /// Explicit search request: emit the current text immediately.
    ///
    /// Discards any open window and performs no duplicate
    /// suppression; committing an unchanged query still re-renders.
    pub fn commit(&mut self, raw: Option<&str>) -> String {
        self.pending = None;
        let value = raw.unwrap_or("").to_string();
        self.last_emitted = Some(value.clone());
        value
    }

    /// Drive the clock; returns the settled query when a burst's
    /// window has closed and its value differs from the last emission.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.pending {
            Some(ref burst) if now >= burst.deadline => {}
            _ => return None,
        }
        let burst = self.pending.take()?;
        if self.last_emitted.as_deref() == Some(burst.value.as_str()) {
            return None;
        }
        self.last_emitted = Some(burst.value.clone());
        Some(burst.value)
    }

    /// Whether a burst is still waiting for its trailing edge.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
