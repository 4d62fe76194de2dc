use rand::seq::SliceRandom;

use super::SearchContext;
use crate::board::search::constants::INFINITY;
use crate::board::search::move_order::{ordered_moves, reorder_best_first};
use crate::board::search::threats::partition_by_safety;
use crate::board::search::{SearchIterationInfo, SearchParams};
use crate::board::Grid;

/// Best move of the deepest fully completed depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthOutcome {
    pub best_move: usize,
    pub score: i32,
    pub depth: u32,
}

impl SearchContext<'_> {
    /// Iterative deepening bounded by the context deadline.
    ///
    /// Moves that hand the opponent an immediate win are searched only when
    /// nothing else is left. A depth interrupted by the deadline is thrown
    /// away; `None` means no depth completed.
    pub fn iterative_deepening(&mut self, grid: &Grid, params: &SearchParams) -> Option<DepthOutcome> {
        let ordered = ordered_moves(grid);
        let (safe, unsafe_moves) = partition_by_safety(grid, &ordered);
        let mut candidates = if safe.is_empty() { unsafe_moves } else { safe };
        if candidates.is_empty() {
            return None;
        }

        let mut outcome = None;
        for depth in params.depth_range() {
            let Some((score, ties)) = self.search_root(grid, &candidates, depth) else {
                search_trace!("depth {} abandoned at deadline after {} nodes", depth, self.nodes);
                break;
            };
            let Some(&best_move) = ties.choose(&mut *self.rng) else {
                break;
            };

            outcome = Some(DepthOutcome {
                best_move,
                score,
                depth,
            });
            search_debug!(
                "depth {} best {} score {} ties {} nodes {}",
                depth,
                best_move,
                score,
                ties.len(),
                self.nodes
            );
            self.report(depth, score, best_move);

            reorder_best_first(&mut candidates, best_move);
        }

        outcome
    }

    /// One full pass over the root candidates.
    ///
    /// Each child is searched with alpha one below the running best, so a
    /// child that ties the best comes back exact and joins `ties`. Returns
    /// `None` if the deadline fired during the pass.
    fn search_root(&mut self, grid: &Grid, candidates: &[usize], depth: u32) -> Option<(i32, Vec<usize>)> {
        let mut best = -INFINITY;
        let mut ties = Vec::with_capacity(candidates.len());

        for &col in candidates {
            if self.deadline.expired() {
                self.aborted = true;
                return None;
            }

            let mut child = grid.clone();
            child.place(col);
            let alpha = if ties.is_empty() { -INFINITY } else { best - 1 };
            let score = self.alphabeta(&child, depth - 1, false, alpha, INFINITY);
            if self.aborted {
                return None;
            }

            if score > best {
                best = score;
                ties.clear();
                ties.push(col);
            } else if score == best {
                ties.push(col);
            }
        }

        Some((best, ties))
    }

    fn report(&self, depth: u32, score: i32, best_move: usize) {
        if let Some(cb) = &self.info_callback {
            let info = SearchIterationInfo {
                depth,
                score,
                best_move,
                nodes: self.nodes,
                tt_hits: self.tt_hits,
                time_ms: self.deadline.elapsed().as_millis() as u64,
            };
            cb(&info);
        }
    }
}
