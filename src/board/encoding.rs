//! Canonical position keys.
//!
//! Every cell contributes one base-3 digit (0 empty, 1 red, 2 yellow) in
//! row-major order, and the side to move contributes a final binary digit.
//! 3^42 * 2 fits in a `u128`, so the mapping is fixed-width and injective.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Cell, Color, Grid, CELLS};

const fn powers_of_three() -> [u128; CELLS] {
    let mut table = [0u128; CELLS];
    let mut value = 1u128;
    let mut i = 0;
    while i < CELLS {
        table[i] = value;
        value *= 3;
        i += 1;
    }
    table
}

/// 3^i for each cell index.
pub(crate) const POW3: [u128; CELLS] = powers_of_three();

#[inline]
pub(crate) const fn cell_digit(cell: Cell) -> u128 {
    match cell {
        None => 0,
        Some(Color::Red) => 1,
        Some(Color::Yellow) => 2,
    }
}

/// Collision-free encoding of occupancy plus side to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CanonicalKey(u128);

impl CanonicalKey {
    #[inline]
    pub(crate) const fn from_parts(cells: u128, side_to_move: Color) -> Self {
        CanonicalKey(cells * 2 + side_to_move.index() as u128)
    }

    #[inline]
    #[must_use]
    pub const fn as_u128(self) -> u128 {
        self.0
    }

    /// Side to move recorded in the key.
    #[must_use]
    pub const fn side_to_move(self) -> Color {
        if self.0 % 2 == 0 {
            Color::Red
        } else {
            Color::Yellow
        }
    }
}

/// Writes the 42 cell digits in row-major order followed by the turn digit.
impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells = self.0 / 2;
        let mut digits = [b'0'; CELLS];
        for digit in &mut digits {
            *digit = b'0' + (cells % 3) as u8;
            cells /= 3;
        }
        for digit in digits {
            write!(f, "{}", digit as char)?;
        }
        write!(f, "{}", self.0 % 2)
    }
}

/// Canonical key of a grid, used for cache and opening-book lookups.
#[must_use]
pub fn canonical_encode(grid: &Grid) -> CanonicalKey {
    grid.canonical_key()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_key_is_zero() {
        let grid = Grid::new();
        assert_eq!(canonical_encode(&grid).as_u128(), 0);
        assert_eq!(grid.canonical_key().side_to_move(), Color::Red);
    }

    #[test]
    fn key_tracks_side_to_move() {
        let mut grid = Grid::new();
        assert!(grid.place(3));
        let key = grid.canonical_key();
        assert_eq!(key.side_to_move(), Color::Yellow);
        assert_eq!(key.as_u128() % 2, 1);
    }

    #[test]
    fn display_lists_cells_then_turn() {
        let mut grid = Grid::new();
        assert!(grid.place(0));
        let text = grid.canonical_key().to_string();
        assert_eq!(text.len(), CELLS + 1);
        // bottom-left cell is index 35
        assert_eq!(&text[35..36], "1");
        assert!(text.ends_with('1'));
    }

    #[test]
    fn transpositions_share_a_key() {
        let a = Grid::from_moves(&[3, 2, 4]).unwrap();
        let b = Grid::from_moves(&[4, 2, 3]).unwrap();
        assert_eq!(a.canonical_key(), b.canonical_key());

        let c = Grid::from_moves(&[2, 3, 4]).unwrap();
        assert_ne!(a.canonical_key(), c.canonical_key());
    }
}
