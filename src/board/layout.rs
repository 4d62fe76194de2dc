//! Text layouts for grids.
//!
//! A layout is six lines of seven symbols, top row first: `.` for an empty
//! cell, `R`/`X` for red, `Y`/`O` for yellow. An optional seventh line holds
//! the side to move. Blank lines and surrounding whitespace are ignored.
//!
//! ```text
//! .......
//! .......
//! .......
//! ...Y...
//! ...R...
//! ..RYR..
//! Y
//! ```

use super::encoding::{cell_digit, POW3};
use super::error::LayoutError;
use super::{cell_index, Cell, Color, Grid, COLS, ROWS};
use crate::zobrist;

impl Grid {
    /// Parse a text layout.
    ///
    /// Without a side-to-move line, red moves when it does not have more
    /// discs than yellow. The parsed grid has no last placement.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() != ROWS && lines.len() != ROWS + 1 {
            return Err(LayoutError::WrongRowCount { found: lines.len() });
        }

        let mut cells = [[None; COLS]; ROWS];
        for (row, line) in lines.iter().take(ROWS).enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != COLS {
                return Err(LayoutError::WrongRowWidth {
                    row,
                    found: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                cells[row][col] = match symbol {
                    '.' | '-' | '_' => None,
                    other => Some(Color::from_char(other).ok_or(LayoutError::InvalidSymbol {
                        row,
                        col,
                        symbol: other,
                    })?),
                };
            }
        }

        let side_to_move = match lines.get(ROWS) {
            Some(line) => parse_side(line)?,
            None => infer_side(&cells),
        };

        Self::from_cells(cells, side_to_move)
    }

    /// Build a grid from raw cells, checking that every column obeys gravity.
    pub fn from_cells(cells: [[Cell; COLS]; ROWS], side_to_move: Color) -> Result<Self, LayoutError> {
        let mut grid = Grid::with_first_player(side_to_move);
        for col in 0..COLS {
            let mut height = 0;
            for row in (0..ROWS).rev() {
                match cells[row][col] {
                    Some(color) if height == ROWS - 1 - row => {
                        let idx = cell_index(row, col);
                        grid.hash ^= zobrist::disc_key(color, idx);
                        grid.cells_key += POW3[idx] * cell_digit(Some(color));
                        height += 1;
                    }
                    Some(_) => return Err(LayoutError::FloatingDisc { row, col }),
                    None => {}
                }
            }
            grid.heights[col] = height;
            grid.pieces += height;
        }
        grid.cells = cells;
        Ok(grid)
    }

    /// Format the grid as a layout, including the side-to-move line.
    #[must_use]
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity((COLS + 1) * (ROWS + 1));
        for row in &self.cells {
            for cell in row {
                out.push(cell.map_or('.', Color::symbol));
            }
            out.push('\n');
        }
        out.push(self.side_to_move.symbol());
        out.push('\n');
        out
    }
}

fn parse_side(line: &str) -> Result<Color, LayoutError> {
    let mut chars = line.chars();
    match (chars.next().and_then(Color::from_char), chars.next()) {
        (Some(color), None) => Ok(color),
        _ => Err(LayoutError::InvalidSideToMove {
            found: line.to_string(),
        }),
    }
}

fn infer_side(cells: &[[Cell; COLS]; ROWS]) -> Color {
    let count = |color: Color| {
        cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(color))
            .count()
    };
    if count(Color::Red) <= count(Color::Yellow) {
        Color::Red
    } else {
        Color::Yellow
    }
}
