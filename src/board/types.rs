//! Disc colors and grid geometry.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of rows in the grid. Row 0 is the top row.
pub const ROWS: usize = 6;

/// Number of columns in the grid.
pub const COLS: usize = 7;

/// Total number of cells.
pub const CELLS: usize = ROWS * COLS;

/// Index of the center column.
pub const CENTER_COL: usize = COLS / 2;

/// Length of a winning line.
pub const CONNECT: usize = 4;

/// The two sides of the game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Red,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Red, Color::Yellow];

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Yellow,
            Color::Yellow => Color::Red,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Yellow => 1,
        }
    }

    /// Symbol used in text layouts.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
        }
    }

    /// Parse a color symbol. Accepts `R`/`X` for red and `Y`/`O` for yellow.
    #[must_use]
    pub fn from_char(c: char) -> Option<Color> {
        match c.to_ascii_uppercase() {
            'R' | 'X' => Some(Color::Red),
            'Y' | 'O' => Some(Color::Yellow),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Yellow => write!(f, "yellow"),
        }
    }
}

/// Contents of a single cell.
pub type Cell = Option<Color>;

/// Row and column of a placed disc.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    pub row: usize,
    pub col: usize,
}

/// The four line directions as (row delta, column delta).
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal \
    (1, -1), // diagonal /
];

#[inline]
pub(crate) const fn cell_index(row: usize, col: usize) -> usize {
    row * COLS + col
}
