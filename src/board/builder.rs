//! Fluent builder for constructing grid positions.
//!
//! Allows setting up positions disc by disc, including sequences where one
//! side drops several discs in a row, which a replayed move list cannot
//! express.
//!
//! # Example
//! ```
//! use connect_four_engine::board::{Color, GridBuilder};
//!
//! let grid = GridBuilder::new()
//!     .drop(0, Color::Yellow)
//!     .drop(1, Color::Yellow)
//!     .drop(2, Color::Yellow)
//!     .side_to_move(Color::Red)
//!     .build();
//! assert_eq!(grid.piece_count(), 3);
//! ```

use super::{Color, Grid};

/// A fluent builder for constructing `Grid` positions.
#[derive(Clone, Debug)]
pub struct GridBuilder {
    drops: Vec<(usize, Color)>,
    side_to_move: Option<Color>,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GridBuilder {
    /// Create a builder for an empty grid.
    #[must_use]
    pub fn new() -> Self {
        GridBuilder {
            drops: Vec::new(),
            side_to_move: None,
        }
    }

    /// Drop a disc of `color` into `col`. Drops into full or out-of-range
    /// columns are skipped when building.
    #[must_use]
    pub fn drop(mut self, col: usize, color: Color) -> Self {
        self.drops.push((col, color));
        self
    }

    /// Drop discs into the given columns, alternating colors starting with `first`.
    #[must_use]
    pub fn alternate(mut self, columns: &[usize], first: Color) -> Self {
        let mut color = first;
        for &col in columns {
            self.drops.push((col, color));
            color = color.opponent();
        }
        self
    }

    /// Set the side to move. Defaults to the opponent of the last dropped
    /// disc, or red for an empty grid.
    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = Some(color);
        self
    }

    /// Build the grid. The last successful drop is the last placement.
    #[must_use]
    pub fn build(self) -> Grid {
        let mut grid = Grid::new();
        for (col, color) in self.drops {
            grid.drop_disc(col, color);
        }
        if let Some(color) = self.side_to_move {
            grid.set_side_to_move(color);
        }
        grid
    }
}
