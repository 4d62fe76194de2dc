//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `grid.rs` - Placement, legality, hashing and canonical keys
//! - `terminal.rs` - Win and draw detection
//! - `layout.rs` - Text layouts and move replay
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Alpha-beta, iterative deepening and the move selector
//! - `proptest.rs` - Property-based tests

mod eval;
mod proptest;

use super::{evaluate, Color, EvalWeights, Grid, COLS, CONNECT, ROWS};
use crate::board::search::WIN_SCORE;

/// A full grid with no line of four anywhere.
pub(super) const DRAWN_LAYOUT: &str = "\
RYRYRYR
RYRYRYR
YRYRYRY
YRYRYRY
RYRYRYR
RYRYRYR
";

/// Red to move and win on the rising diagonal through column 3.
pub(super) const DIAGONAL_WIN_LAYOUT: &str = "\
.......
.......
.......
..RY...
.RYY...
RYYR...
R
";

/// Winner found by scanning every cell, independent of the last placement.
pub(super) fn scan_winner(grid: &Grid) -> Option<Color> {
    const DIRS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
    for row in 0..ROWS {
        for col in 0..COLS {
            let Some(color) = grid.cell(row, col) else {
                continue;
            };
            for (dr, dc) in DIRS {
                let complete = (1..CONNECT as isize).all(|k| {
                    let r = row as isize + dr * k;
                    let c = col as isize + dc * k;
                    r >= 0
                        && c >= 0
                        && (r as usize) < ROWS
                        && (c as usize) < COLS
                        && grid.cell(r as usize, c as usize) == Some(color)
                });
                if complete {
                    return Some(color);
                }
            }
        }
    }
    None
}

/// Plain minimax without pruning or caching, scored for `root`.
pub(super) fn minimax(grid: &Grid, depth: u32, maximizing: bool, root: Color, weights: &EvalWeights) -> i32 {
    let remaining = depth as i32;
    match grid.winner() {
        Some(color) if color == root => return WIN_SCORE + remaining,
        Some(_) => return -WIN_SCORE - remaining,
        None => {}
    }
    if depth == 0 || grid.is_draw() {
        return evaluate(grid, root, weights);
    }

    let scores = grid.legal_columns().into_iter().map(|col| {
        let mut child = grid.clone();
        child.place(col);
        minimax(&child, depth - 1, !maximizing, root, weights)
    });
    if maximizing {
        scores.max().unwrap_or(0)
    } else {
        scores.min().unwrap_or(0)
    }
}
