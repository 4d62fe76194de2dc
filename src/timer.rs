//! Deadline tracking for time-bounded search.
//!
//! A search computes one [`Deadline`] when it starts and every recursive
//! call reads it. `Instant` is monotonic, so wall-clock adjustments never
//! shorten or stretch a search.

use std::time::{Duration, Instant};

/// Calculate the duration from now until a deadline, if the deadline is in the future.
///
/// Returns `None` if the deadline has already passed.
#[inline]
fn duration_until(deadline: Instant) -> Option<Duration> {
    let now = Instant::now();
    if deadline > now {
        Some(deadline - now)
    } else {
        None
    }
}

/// A fixed point in time after which search must stop, or no limit at all.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    start: Instant,
    at: Option<Instant>,
}

impl Deadline {
    /// Deadline `budget` from now; `None` means unlimited.
    #[must_use]
    pub fn after(budget: Option<Duration>) -> Self {
        let start = Instant::now();
        Deadline {
            start,
            at: budget.map(|budget| start + budget),
        }
    }

    /// A deadline that never expires.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::after(None)
    }

    #[inline]
    #[must_use]
    pub fn expired(&self) -> bool {
        self.at.is_some_and(|at| duration_until(at).is_none())
    }

    /// Time left, or `None` when unlimited.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.at.map(|at| duration_until(at).unwrap_or(Duration::ZERO))
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
