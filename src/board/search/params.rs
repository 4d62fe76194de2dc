use std::ops::RangeInclusive;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_TT_MB, MAX_SEARCH_DEPTH};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// First depth of iterative deepening.
    pub min_depth: u32,
    /// Last depth of iterative deepening.
    pub max_depth: u32,
    /// Budget per move; `None` searches every depth to completion.
    pub time_limit: Option<Duration>,
    /// Piece count at which the late-game forced-win check runs.
    pub late_game_threshold: usize,
    pub use_tt: bool,
    pub use_book: bool,
    pub tt_mb: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            min_depth: 2,
            max_depth: 12,
            time_limit: Some(Duration::from_millis(1400)),
            late_game_threshold: 30,
            use_tt: true,
            use_book: true,
            tt_mb: DEFAULT_TT_MB,
        }
    }
}

impl SearchParams {
    /// Fixed-depth search without a time limit.
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchParams {
            max_depth,
            time_limit: None,
            ..Default::default()
        }
    }

    /// Time-limited search.
    #[must_use]
    pub fn time(time_limit: Duration) -> Self {
        SearchParams {
            time_limit: Some(time_limit),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_min_depth(mut self, min_depth: u32) -> Self {
        self.min_depth = min_depth;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    #[must_use]
    pub fn with_late_game_threshold(mut self, pieces: usize) -> Self {
        self.late_game_threshold = pieces;
        self
    }

    #[must_use]
    pub fn with_tt(mut self, use_tt: bool) -> Self {
        self.use_tt = use_tt;
        self
    }

    #[must_use]
    pub fn with_book(mut self, use_book: bool) -> Self {
        self.use_book = use_book;
        self
    }

    #[must_use]
    pub fn with_tt_mb(mut self, tt_mb: usize) -> Self {
        self.tt_mb = tt_mb;
        self
    }

    /// Depths iterative deepening visits, clamped to `1..=MAX_SEARCH_DEPTH`.
    #[must_use]
    pub fn depth_range(&self) -> RangeInclusive<u32> {
        self.min_depth.max(1)..=self.max_depth.min(MAX_SEARCH_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_range_is_clamped() {
        let params = SearchParams::depth(100).with_min_depth(0);
        assert_eq!(params.depth_range(), 1..=MAX_SEARCH_DEPTH);

        let params = SearchParams::default();
        assert_eq!(params.depth_range(), 2..=12);
    }

    #[test]
    fn inverted_bounds_give_an_empty_range() {
        let params = SearchParams::depth(3).with_min_depth(5);
        assert!(params.depth_range().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn params_round_trip_through_json() {
        let params = SearchParams::time(Duration::from_millis(250)).with_tt(false);
        let json = serde_json::to_string(&params).unwrap();
        let back: SearchParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
