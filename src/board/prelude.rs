//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use connect_four_engine::board::prelude::*;
//!
//! let grid = Grid::from_moves(&[3, 3]).unwrap();
//! assert_eq!(grid.side_to_move(), Color::Red);
//! ```

pub use super::{
    canonical_encode, select_move, Color, Grid, GridBuilder, LayoutError, MoveSource,
    SearchParams, SearchResult, SearchState,
};
