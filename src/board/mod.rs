//! Grid representation, terminal detection and move selection.
//!
//! The grid is a 6×7 array of cells filled under gravity. Everything the
//! engine needs (win/draw checks, canonical keys, evaluation and search)
//! operates on independent clones of it.
//!
//! # Example
//! ```
//! use connect_four_engine::board::{Grid, SearchParams, SearchState};
//!
//! let grid = Grid::new();
//! let mut state = SearchState::new(SearchParams::default());
//! assert_eq!(state.select_move(&grid), Some(3));
//! ```

mod builder;
mod encoding;
mod error;
pub mod eval;
mod layout;
pub mod prelude;
pub mod search;
mod state;
mod terminal;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::GridBuilder;
pub use encoding::{canonical_encode, CanonicalKey};
pub use error::LayoutError;
pub use eval::{evaluate, EvalWeights};
pub use state::Grid;
pub use types::{Cell, Color, Placement, CELLS, CENTER_COL, COLS, CONNECT, ROWS};

// Public API - search functions and configuration
pub use search::{
    select_move, MoveSource, SearchIterationInfo, SearchParams, SearchResult, SearchState,
    SearchStats, WIN_SCORE,
};

pub(crate) use types::{cell_index, DIRECTIONS};
