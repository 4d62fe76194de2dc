//! Static evaluation.
//!
//! Scores a position from one side's point of view by summing a center
//! column bonus for every disc and a tiered bonus for every four-cell window
//! along the four line directions. Heuristic totals are clamped well inside
//! `WIN_SCORE` so no estimate can pass for a proven result.

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::search::WIN_SCORE;
use super::{Color, Grid, COLS, CONNECT, DIRECTIONS, ROWS};

/// Tunable evaluation weights.
///
/// Only the ordering matters: four > three-plus-gap > two-plus-two-gaps on
/// each side, and each opponent tier weighs at least as much as the own tier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvalWeights {
    /// Per-column bonus for each disc, highest at the center.
    pub center: [i32; COLS],
    pub four: i32,
    pub three: i32,
    pub two: i32,
    /// Penalties are stored as positive magnitudes.
    pub opp_four: i32,
    pub opp_three: i32,
    pub opp_two: i32,
    /// Bound on the absolute heuristic score.
    pub max_heuristic: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            center: [1, 2, 3, 6, 3, 2, 1],
            four: 20_000,
            three: 500,
            two: 40,
            opp_four: 20_000,
            opp_three: 700,
            opp_two: 60,
            max_heuristic: WIN_SCORE / 10,
        }
    }
}

impl EvalWeights {
    /// Score one window from its own/opponent/empty counts.
    #[must_use]
    pub fn score_window(&self, own: usize, opp: usize, empty: usize) -> i32 {
        match (own, opp, empty) {
            (4, 0, 0) => self.four,
            (3, 0, 1) => self.three,
            (2, 0, 2) => self.two,
            (0, 4, 0) => -self.opp_four,
            (0, 3, 1) => -self.opp_three,
            (0, 2, 2) => -self.opp_two,
            _ => 0,
        }
    }
}

type Window = [(usize, usize); CONNECT];

/// Every run of four contiguous cells along the four directions.
static WINDOWS: Lazy<Vec<Window>> = Lazy::new(|| {
    let mut windows = Vec::new();
    for row in 0..ROWS {
        for col in 0..COLS {
            for &(dr, dc) in &DIRECTIONS {
                let end_row = row as isize + dr * (CONNECT as isize - 1);
                let end_col = col as isize + dc * (CONNECT as isize - 1);
                if end_row < 0 || end_row >= ROWS as isize || end_col < 0 || end_col >= COLS as isize {
                    continue;
                }
                let mut window = [(0, 0); CONNECT];
                for (i, cell) in window.iter_mut().enumerate() {
                    let i = i as isize;
                    *cell = ((row as isize + dr * i) as usize, (col as isize + dc * i) as usize);
                }
                windows.push(window);
            }
        }
    }
    windows
});

/// Number of scoring windows on the grid.
#[must_use]
pub fn window_count() -> usize {
    WINDOWS.len()
}

/// Evaluate `grid` from `perspective`'s point of view.
///
/// A decided grid scores exactly `±WIN_SCORE`; anything else stays within
/// `±weights.max_heuristic`.
#[must_use]
pub fn evaluate(grid: &Grid, perspective: Color, weights: &EvalWeights) -> i32 {
    match grid.winner() {
        Some(color) if color == perspective => return WIN_SCORE,
        Some(_) => return -WIN_SCORE,
        None => {}
    }

    let score = center_score(grid, perspective, weights) + window_score(grid, perspective, weights);
    score.clamp(-weights.max_heuristic, weights.max_heuristic)
}

fn center_score(grid: &Grid, perspective: Color, weights: &EvalWeights) -> i32 {
    let mut score = 0;
    for row in &grid.cells {
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Some(color) if *color == perspective => score += weights.center[col],
                Some(_) => score -= weights.center[col],
                None => {}
            }
        }
    }
    score
}

fn window_score(grid: &Grid, perspective: Color, weights: &EvalWeights) -> i32 {
    WINDOWS
        .iter()
        .map(|window| {
            let (mut own, mut opp, mut empty) = (0, 0, 0);
            for &(row, col) in window {
                match grid.cells[row][col] {
                    Some(color) if color == perspective => own += 1,
                    Some(_) => opp += 1,
                    None => empty += 1,
                }
            }
            weights.score_window(own, opp, empty)
        })
        .sum()
}
