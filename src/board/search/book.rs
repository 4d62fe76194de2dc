//! Opening book for the first plies.
//!
//! A miss is the normal case and simply falls through to search.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::board::{CanonicalKey, Grid};

/// Move sequences from the empty grid (red first) and the recommended reply.
const BOOK_LINES: &[(&[usize], usize)] = &[
    (&[], 3),
    // Second player answering a center opening
    (&[3], 3),
    // First player after center opening
    (&[3, 3], 3),
    (&[3, 2], 3),
    (&[3, 4], 3),
    (&[3, 1], 2),
    (&[3, 5], 4),
    (&[3, 0], 3),
    (&[3, 6], 3),
];

static OPENING_BOOK: Lazy<HashMap<CanonicalKey, usize>> = Lazy::new(|| {
    BOOK_LINES
        .iter()
        .filter_map(|(line, reply)| {
            Grid::from_moves(line)
                .ok()
                .map(|grid| (grid.canonical_key(), *reply))
        })
        .collect()
});

/// Recommended column for `grid`, if it is a book position.
#[must_use]
pub fn lookup(grid: &Grid) -> Option<usize> {
    OPENING_BOOK
        .get(&grid.canonical_key())
        .copied()
        .filter(|&col| grid.is_legal(col))
}

/// Number of positions in the book.
#[must_use]
pub fn len() -> usize {
    OPENING_BOOK.len()
}
