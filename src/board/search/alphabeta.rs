//! Core search implementation.
//!
//! This module implements:
//! - Minimax with alpha-beta pruning over grid clones
//! - Transposition table probes and stores with bound types
//! - Cooperative deadline checks at every node
//!
//! Scores are always from the root side's point of view: maximizing nodes
//! have the root side to move, minimizing nodes the opponent.

mod iterative;

use rand::rngs::StdRng;

use super::constants::{INFINITY, WIN_SCORE};
use super::move_order::ordered_moves;
use super::SearchInfoCallback;
use crate::board::{evaluate, Color, EvalWeights, Grid};
use crate::timer::Deadline;
use crate::tt::{BoundType, NodeKind, TranspositionTable, TtKey};

/// Search context for a single top-level call
pub struct SearchContext<'a> {
    pub tt: &'a mut TranspositionTable,
    pub weights: &'a EvalWeights,
    pub rng: &'a mut StdRng,
    pub deadline: Deadline,
    pub use_tt: bool,
    /// Side whose score is maximized
    pub root: Color,
    pub nodes: u64,
    pub tt_hits: u64,
    /// Set once the deadline fires; every score computed afterwards is an estimate
    pub aborted: bool,
    /// Optional callback for reporting iteration info
    pub info_callback: Option<SearchInfoCallback>,
}

impl<'a> SearchContext<'a> {
    pub fn new(
        tt: &'a mut TranspositionTable,
        weights: &'a EvalWeights,
        rng: &'a mut StdRng,
        deadline: Deadline,
        root: Color,
    ) -> Self {
        SearchContext {
            tt,
            weights,
            rng,
            deadline,
            use_tt: true,
            root,
            nodes: 0,
            tt_hits: 0,
            aborted: false,
            info_callback: None,
        }
    }

    #[inline]
    fn evaluate(&self, grid: &Grid) -> i32 {
        evaluate(grid, self.root, self.weights)
    }

    fn store(&mut self, grid: &Grid, key: TtKey, score: i32, bound_type: BoundType) {
        if self.use_tt && !self.aborted {
            self.tt.store(grid.hash(), key, score, bound_type);
        }
    }

    /// Value of `grid` searched `depth` plies deep within `(alpha, beta)`.
    ///
    /// Fail-soft: a result at or below `alpha` is an upper bound, a result
    /// at or above `beta` a lower bound, anything between is exact.
    pub fn alphabeta(
        &mut self,
        grid: &Grid,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if self.deadline.expired() {
            self.aborted = true;
            return self.evaluate(grid);
        }

        let key = TtKey::new(grid.canonical_key(), depth, NodeKind::from_maximizing(maximizing));
        let (original_alpha, original_beta) = (alpha, beta);

        // --- Transposition Table Probe ---
        if self.use_tt {
            if let Some(entry) = self.tt.probe(grid.hash(), &key) {
                self.tt_hits += 1;
                let score = entry.score;
                match entry.bound_type {
                    BoundType::Exact => return score,
                    BoundType::LowerBound => alpha = alpha.max(score),
                    BoundType::UpperBound => beta = beta.min(score),
                }
                if alpha >= beta {
                    return score;
                }
            }
        }

        // --- Terminal positions ---
        let remaining = depth as i32;
        match grid.winner() {
            Some(color) if color == self.root => return WIN_SCORE + remaining,
            Some(_) => return -WIN_SCORE - remaining,
            None => {}
        }

        if depth == 0 || grid.is_draw() {
            let score = self.evaluate(grid);
            self.store(grid, key, score, BoundType::Exact);
            return score;
        }

        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for col in ordered_moves(grid) {
            let mut child = grid.clone();
            child.place(col);
            let score = self.alphabeta(&child, depth - 1, !maximizing, alpha, beta);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.aborted || beta <= alpha {
                break;
            }
        }

        // --- Transposition Table Store ---
        let bound_type = if best <= original_alpha {
            BoundType::UpperBound
        } else if best >= original_beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        };
        self.store(grid, key, best, bound_type);

        best
    }
}
