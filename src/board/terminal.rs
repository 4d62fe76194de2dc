//! Win and draw detection.
//!
//! Only the most recent placement is examined, so these checks are valid
//! exactly when called right after a placement. A grid built from a layout
//! has no last placement and therefore never reports a winner.

use super::{Color, Grid, Placement, COLS, CONNECT, DIRECTIONS, ROWS};

impl Grid {
    /// Owner of a line of four through the last placed disc, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        let Placement { row, col } = self.last_move?;
        let color = self.cells[row][col]?;
        self.completes_line(row, col, color).then_some(color)
    }

    /// True iff the grid is full and nobody has won.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Whether dropping a `color` disc into `col` would complete a line.
    ///
    /// Equivalent to cloning, placing and calling [`Grid::winner`], without
    /// the copy.
    #[must_use]
    pub fn is_winning_drop(&self, col: usize, color: Color) -> bool {
        self.landing_row(col)
            .is_some_and(|row| self.completes_line(row, col, color))
    }

    fn completes_line(&self, row: usize, col: usize, color: Color) -> bool {
        DIRECTIONS.iter().any(|&(dr, dc)| {
            1 + self.run_length(row, col, dr, dc, color) + self.run_length(row, col, -dr, -dc, color)
                >= CONNECT
        })
    }

    /// Consecutive `color` discs starting next to (row, col) along (dr, dc).
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, color: Color) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0
            && r < ROWS as isize
            && c >= 0
            && c < COLS as isize
            && self.cells[r as usize][c as usize] == Some(color)
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}
