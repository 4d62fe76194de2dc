//! Engine controller implementation.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::board::search::SearchInfoCallback;
use crate::board::{EvalWeights, Grid, SearchParams, SearchResult, SearchState, SearchStats};

/// Background search started by [`EngineController::start_search`].
pub struct SearchJob {
    handle: JoinHandle<SearchResult>,
}

impl SearchJob {
    /// Block until the search finishes.
    ///
    /// Returns `None` if the search thread panicked.
    pub fn wait(self) -> Option<SearchResult> {
        self.handle.join().ok()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Cloneable, thread-safe handle to one engine.
///
/// Every clone shares the same search state, so the transposition table is
/// only ever touched by one search at a time.
#[derive(Clone)]
pub struct EngineController {
    search_state: Arc<Mutex<SearchState>>,
}

impl EngineController {
    /// Create a new engine controller
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        Self::from_state(SearchState::new(params))
    }

    /// Controller with a seeded generator, for reproducible play.
    #[must_use]
    pub fn with_seed(params: SearchParams, seed: u64) -> Self {
        Self::from_state(SearchState::with_seed(params, seed))
    }

    #[must_use]
    pub fn from_state(state: SearchState) -> Self {
        EngineController {
            search_state: Arc::new(Mutex::new(state)),
        }
    }

    /// Forget cached results from the previous game
    pub fn new_game(&self) {
        self.search_state.lock().new_game();
    }

    /// Column to play in `grid`, or `None` if no column is legal.
    pub fn select_move(&self, grid: &Grid) -> Option<usize> {
        self.search_state.lock().select_move(grid)
    }

    pub fn analyze(&self, grid: &Grid) -> SearchResult {
        self.search_state.lock().analyze(grid)
    }

    /// Run [`EngineController::analyze`] on a named background thread.
    pub fn start_search(&self, grid: &Grid) -> io::Result<SearchJob> {
        let grid = grid.clone();
        let search_state = Arc::clone(&self.search_state);
        let handle = thread::Builder::new()
            .name("search".to_string())
            .spawn(move || search_state.lock().analyze(&grid))?;
        Ok(SearchJob { handle })
    }

    #[must_use]
    pub fn params(&self) -> SearchParams {
        self.search_state.lock().params().clone()
    }

    pub fn set_params(&self, params: SearchParams) {
        self.search_state.lock().set_params(params);
    }

    pub fn set_weights(&self, weights: EvalWeights) {
        self.search_state.lock().set_weights(weights);
    }

    /// Set callback for iteration info reporting.
    pub fn set_info_callback(&self, cb: Option<SearchInfoCallback>) {
        self.search_state.lock().set_info_callback(cb);
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.search_state.lock().stats
    }

    /// Execute a closure with mutable access to the search state.
    pub fn with_search_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SearchState) -> R,
    {
        f(&mut self.search_state.lock())
    }
}

impl Default for EngineController {
    fn default() -> Self {
        Self::new(SearchParams::default())
    }
}
