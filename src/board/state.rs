use super::encoding::{cell_digit, CanonicalKey, POW3};
use super::error::LayoutError;
use super::{cell_index, Cell, Color, Placement, COLS, ROWS};
use crate::zobrist;

/// The playing grid: occupancy, side to move and the most recent placement.
///
/// Columns fill from the bottom row (`ROWS - 1`) upward. The Zobrist hash and
/// the canonical key are maintained incrementally by [`Grid::place`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: [[Cell; COLS]; ROWS],
    pub(crate) heights: [usize; COLS],
    pub(crate) side_to_move: Color,
    pub(crate) last_move: Option<Placement>,
    pub(crate) hash: u64,
    pub(crate) cells_key: u128,
    pub(crate) pieces: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Empty grid with red to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_first_player(Color::Red)
    }

    /// Empty grid with the given side to move first.
    #[must_use]
    pub fn with_first_player(first: Color) -> Self {
        let mut grid = Grid {
            cells: [[None; COLS]; ROWS],
            heights: [0; COLS],
            side_to_move: Color::Red,
            last_move: None,
            hash: 0,
            cells_key: 0,
            pieces: 0,
        };
        grid.set_side_to_move(first);
        grid
    }

    /// Replay a sequence of columns from the empty grid, red first.
    pub fn from_moves(columns: &[usize]) -> Result<Self, LayoutError> {
        let mut grid = Grid::new();
        for (ply, &col) in columns.iter().enumerate() {
            if !grid.place(col) {
                return Err(LayoutError::IllegalMove { ply, col });
            }
        }
        Ok(grid)
    }

    /// Drop a disc for the side to move.
    ///
    /// Returns `false` without touching the grid when the column is out of
    /// range or full. On success the turn passes to the other side.
    pub fn place(&mut self, col: usize) -> bool {
        let color = self.side_to_move;
        self.drop_disc(col, color)
    }

    /// Drop a disc of an explicit color; the opposite color moves next.
    pub(crate) fn drop_disc(&mut self, col: usize, color: Color) -> bool {
        let Some(row) = self.landing_row(col) else {
            return false;
        };

        let idx = cell_index(row, col);
        self.cells[row][col] = Some(color);
        self.heights[col] += 1;
        self.pieces += 1;
        self.hash ^= zobrist::disc_key(color, idx);
        self.cells_key += POW3[idx] * cell_digit(Some(color));
        self.last_move = Some(Placement { row, col });
        self.set_side_to_move(color.opponent());
        true
    }

    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        if self.side_to_move != color {
            self.hash ^= zobrist::side_key();
            self.side_to_move = color;
        }
    }

    /// Row a disc dropped into `col` would land on.
    #[inline]
    #[must_use]
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS || self.heights[col] >= ROWS {
            None
        } else {
            Some(ROWS - 1 - self.heights[col])
        }
    }

    #[inline]
    #[must_use]
    pub fn is_legal(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col].is_none()
    }

    /// Playable columns in ascending order.
    #[must_use]
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_legal(col)).collect()
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<Placement> {
        self.last_move
    }

    #[inline]
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces == 0
    }

    /// True when the top row has no empty cell.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(Option::is_some)
    }

    /// Incrementally maintained Zobrist hash.
    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn canonical_key(&self) -> CanonicalKey {
        CanonicalKey::from_parts(self.cells_key, self.side_to_move)
    }

    /// Zobrist hash recomputed from scratch.
    #[must_use]
    pub fn calculate_hash(&self) -> u64 {
        let mut hash = 0;
        for row in 0..ROWS {
            for col in 0..COLS {
                if let Some(color) = self.cells[row][col] {
                    hash ^= zobrist::disc_key(color, cell_index(row, col));
                }
            }
        }
        if self.side_to_move == Color::Yellow {
            hash ^= zobrist::side_key();
        }
        hash
    }

    /// Canonical key recomputed from scratch.
    #[must_use]
    pub fn calculate_canonical_key(&self) -> CanonicalKey {
        let mut cells = 0u128;
        for row in 0..ROWS {
            for col in 0..COLS {
                let idx = cell_index(row, col);
                cells += POW3[idx] * cell_digit(self.cells[row][col]);
            }
        }
        CanonicalKey::from_parts(cells, self.side_to_move)
    }
}
