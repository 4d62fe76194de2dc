//! Search constants.

use crate::board::{CELLS, COLS};

/// Score of a decided position. Search adds the remaining depth so faster
/// wins and slower losses are preferred.
pub const WIN_SCORE: i32 = 1_000_000;

/// Window bound larger than any reachable score.
pub(crate) const INFINITY: i32 = WIN_SCORE * 2;

/// Recursion never goes deeper than the number of cells.
pub(crate) const MAX_SEARCH_DEPTH: u32 = CELLS as u32;

/// Center-outward column preference used for move ordering.
pub(crate) const PREFERRED_COLUMNS: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// Default transposition table size in MB
pub const DEFAULT_TT_MB: usize = 16;
