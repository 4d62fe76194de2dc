//! Error types for grid construction.

use std::fmt;

/// Error type for layout parsing and move replay failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A replayed column was out of range or full
    IllegalMove { ply: usize, col: usize },
    /// Layout does not have one line per row
    WrongRowCount { found: usize },
    /// A row does not have one symbol per column
    WrongRowWidth { row: usize, found: usize },
    /// Unknown cell symbol
    InvalidSymbol { row: usize, col: usize, symbol: char },
    /// A disc sits above an empty cell
    FloatingDisc { row: usize, col: usize },
    /// Side-to-move line is not a single color symbol
    InvalidSideToMove { found: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::IllegalMove { ply, col } => {
                write!(f, "Illegal move at ply {ply}: column {col} is out of range or full")
            }
            LayoutError::WrongRowCount { found } => {
                write!(f, "Layout must have {} rows, found {found}", super::ROWS)
            }
            LayoutError::WrongRowWidth { row, found } => {
                write!(f, "Row {row} must have {} cells, found {found}", super::COLS)
            }
            LayoutError::InvalidSymbol { row, col, symbol } => {
                write!(f, "Invalid cell symbol '{symbol}' at row {row}, column {col}")
            }
            LayoutError::FloatingDisc { row, col } => {
                write!(f, "Disc at row {row}, column {col} has an empty cell below it")
            }
            LayoutError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'R' or 'Y'")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
