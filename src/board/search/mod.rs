//! Move selection: short-circuits, opening book and alpha-beta search.
//!
//! Features:
//! - Immediate win / immediate block scans ahead of any search
//! - Opening book for the first plies
//! - Late-game forced-win shortcut
//! - Iterative deepening under a wall-clock deadline
//! - Alpha-beta minimax with a transposition table
//! - Seeded random tie-breaking and fallback

mod alphabeta;
pub mod book;
mod constants;
pub mod move_order;
mod params;
pub mod threats;

use std::fmt;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::timer::Deadline;
use crate::tt::TranspositionTable;

use super::{EvalWeights, Grid, CENTER_COL};
pub(crate) use alphabeta::SearchContext;
pub use constants::{DEFAULT_TT_MB, WIN_SCORE};
pub(crate) use constants::INFINITY;
pub use params::SearchParams;

/// Pipeline stage that produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveSource {
    /// Empty grid: center column
    Opening,
    ImmediateWin,
    Block,
    Book,
    ForcedWin,
    Search,
    /// No search depth completed in time
    Random,
    /// No legal column
    NoMove,
}

impl fmt::Display for MoveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveSource::Opening => "opening",
            MoveSource::ImmediateWin => "win",
            MoveSource::Block => "block",
            MoveSource::Book => "book",
            MoveSource::ForcedWin => "forced",
            MoveSource::Search => "search",
            MoveSource::Random => "random",
            MoveSource::NoMove => "none",
        };
        f.write_str(name)
    }
}

/// Result of a move selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen column, `None` when the grid is full
    pub best_move: Option<usize>,
    /// Score of the deepest completed search depth
    pub score: Option<i32>,
    /// Deepest completed depth (0 when search did not run)
    pub depth: u32,
    pub source: MoveSource,
}

impl SearchResult {
    fn shortcut(col: usize, source: MoveSource) -> Self {
        SearchResult {
            best_move: Some(col),
            score: None,
            depth: 0,
            source,
        }
    }
}

/// Information about a completed search iteration.
#[derive(Debug, Clone)]
pub struct SearchIterationInfo {
    pub depth: u32,
    pub score: i32,
    pub best_move: usize,
    pub nodes: u64,
    pub tt_hits: u64,
    pub time_ms: u64,
}

/// Callback type for iteration info.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchIterationInfo) + Send + Sync>;

/// Statistics of the last search
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub tt_hits: u64,
    pub completed_depth: u32,
    pub total_nodes: u64,
}

/// Search state persisted across calls within one game.
///
/// Owns the transposition table and the random source. Call
/// [`SearchState::new_game`] before reusing it for another game.
pub struct SearchState {
    pub stats: SearchStats,
    tt: TranspositionTable,
    params: SearchParams,
    weights: EvalWeights,
    rng: StdRng,
    info_callback: Option<SearchInfoCallback>,
}

impl SearchState {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        Self::with_rng(params, StdRng::from_entropy())
    }

    /// State with a seeded generator, for reproducible tie-breaks.
    #[must_use]
    pub fn with_seed(params: SearchParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn with_rng(params: SearchParams, rng: StdRng) -> Self {
        SearchState {
            stats: SearchStats::default(),
            tt: TranspositionTable::new(params.tt_mb),
            params,
            weights: EvalWeights::default(),
            rng,
            info_callback: None,
        }
    }

    /// Forget everything learned in the previous game.
    pub fn new_game(&mut self) {
        self.tt.clear();
        self.stats = SearchStats::default();
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Replace the search parameters, reallocating the table if its size changed.
    pub fn set_params(&mut self, params: SearchParams) {
        if params.tt_mb != self.params.tt_mb {
            self.tt = TranspositionTable::new(params.tt_mb);
        }
        self.params = params;
    }

    #[must_use]
    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Replace the evaluation weights. Cached scores depend on them, so the
    /// table is cleared.
    pub fn set_weights(&mut self, weights: EvalWeights) {
        self.weights = weights;
        self.tt.clear();
    }

    pub fn set_rng(&mut self, rng: StdRng) {
        self.rng = rng;
    }

    pub fn set_info_callback(&mut self, callback: Option<SearchInfoCallback>) {
        self.info_callback = callback;
    }

    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        self.tt.hashfull_per_mille()
    }

    /// Column to play in `grid`, or `None` if no column is legal.
    pub fn select_move(&mut self, grid: &Grid) -> Option<usize> {
        self.analyze(grid).best_move
    }

    /// Run the full selection pipeline; the first stage that yields a column wins.
    ///
    /// `grid` is never modified; every simulation runs on a clone.
    pub fn analyze(&mut self, grid: &Grid) -> SearchResult {
        let legal = grid.legal_columns();
        if legal.is_empty() {
            return SearchResult {
                best_move: None,
                score: None,
                depth: 0,
                source: MoveSource::NoMove,
            };
        }

        if grid.is_empty() {
            return SearchResult::shortcut(CENTER_COL, MoveSource::Opening);
        }

        let me = grid.side_to_move();
        if let Some(col) = threats::find_winning_move(grid, me) {
            search_debug!("immediate win in column {}", col);
            return SearchResult::shortcut(col, MoveSource::ImmediateWin);
        }
        if let Some(col) = threats::find_winning_move(grid, me.opponent()) {
            search_debug!("blocking column {}", col);
            return SearchResult::shortcut(col, MoveSource::Block);
        }

        if self.params.use_book {
            if let Some(col) = book::lookup(grid) {
                search_debug!("book move {}", col);
                return SearchResult::shortcut(col, MoveSource::Book);
            }
        }

        if grid.piece_count() >= self.params.late_game_threshold {
            if let Some(col) = threats::find_forced_win(grid) {
                search_debug!("late-game forced move {}", col);
                return SearchResult::shortcut(col, MoveSource::ForcedWin);
            }
        }

        if let Some(result) = self.run_search(grid) {
            return result;
        }

        search_debug!("no depth completed, falling back to a random column");
        let col = legal.choose(&mut self.rng).copied();
        SearchResult {
            best_move: col,
            score: None,
            depth: 0,
            source: MoveSource::Random,
        }
    }

    fn run_search(&mut self, grid: &Grid) -> Option<SearchResult> {
        self.tt.new_generation();

        let mut ctx = SearchContext::new(
            &mut self.tt,
            &self.weights,
            &mut self.rng,
            Deadline::after(self.params.time_limit),
            grid.side_to_move(),
        );
        ctx.use_tt = self.params.use_tt;
        ctx.info_callback = self.info_callback.clone();

        let outcome = ctx.iterative_deepening(grid, &self.params);

        self.stats.nodes = ctx.nodes;
        self.stats.tt_hits = ctx.tt_hits;
        self.stats.total_nodes = self.stats.total_nodes.saturating_add(ctx.nodes);
        self.stats.completed_depth = outcome.map_or(0, |o| o.depth);

        outcome.map(|o| SearchResult {
            best_move: Some(o.best_move),
            score: Some(o.score),
            depth: o.depth,
            source: MoveSource::Search,
        })
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new(SearchParams::default())
    }
}

/// Select a move for the side to move; an absent grid yields no move.
pub fn select_move(state: &mut SearchState, grid: Option<&Grid>) -> Option<usize> {
    grid.and_then(|grid| state.select_move(grid))
}
