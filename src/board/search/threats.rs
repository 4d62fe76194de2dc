//! One-ply threat scans and the late-game forced-win check.
//!
//! These run before the heuristic search and win over it whenever they
//! produce a column.

use crate::board::{Color, Grid};

/// First legal column (ascending) where `color` would complete a line.
#[must_use]
pub fn find_winning_move(grid: &Grid, color: Color) -> Option<usize> {
    grid.legal_columns()
        .into_iter()
        .find(|&col| grid.is_winning_drop(col, color))
}

/// Whether playing `col` for the side to move lets the opponent win at once.
///
/// A move that wins outright is never suicidal.
#[must_use]
pub fn hands_opponent_win(grid: &Grid, col: usize) -> bool {
    let mut sim = grid.clone();
    if !sim.place(col) || sim.winner().is_some() {
        return false;
    }
    find_winning_move(&sim, sim.side_to_move()).is_some()
}

/// Split candidates into (safe, unsafe), preserving order.
#[must_use]
pub fn partition_by_safety(grid: &Grid, candidates: &[usize]) -> (Vec<usize>, Vec<usize>) {
    candidates
        .iter()
        .copied()
        .partition(|&col| !hands_opponent_win(grid, col))
}

/// Late-game shortcut: the first legal column that either wins outright or
/// leaves the opponent without an immediate winning reply.
#[must_use]
pub fn find_forced_win(grid: &Grid) -> Option<usize> {
    let me = grid.side_to_move();
    grid.legal_columns().into_iter().find(|&col| {
        let mut sim = grid.clone();
        sim.place(col);
        sim.winner() == Some(me) || find_winning_move(&sim, me.opponent()).is_none()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GridBuilder;

    #[test]
    fn finds_horizontal_win() {
        let grid = GridBuilder::new()
            .drop(0, Color::Red)
            .drop(1, Color::Red)
            .drop(2, Color::Red)
            .side_to_move(Color::Red)
            .build();
        assert_eq!(find_winning_move(&grid, Color::Red), Some(3));
        assert_eq!(find_winning_move(&grid, Color::Yellow), None);
    }

    #[test]
    fn scan_matches_clone_and_place() {
        let grid = Grid::from_moves(&[3, 2, 3, 2, 3]).unwrap();
        for color in Color::ALL {
            for col in grid.legal_columns() {
                let mut sim = grid.clone();
                sim.set_side_to_move(color);
                sim.place(col);
                assert_eq!(grid.is_winning_drop(col, color), sim.winner() == Some(color));
            }
        }
    }

    #[test]
    fn suicidal_move_is_detected() {
        // Yellow holds row 4 at columns 0..=2; column 3 is empty.
        let grid = GridBuilder::new()
            .drop(0, Color::Red)
            .drop(1, Color::Yellow)
            .drop(2, Color::Red)
            .drop(0, Color::Yellow)
            .drop(1, Color::Yellow)
            .drop(2, Color::Yellow)
            .side_to_move(Color::Red)
            .build();
        assert!(hands_opponent_win(&grid, 3));
        assert!(!hands_opponent_win(&grid, 6));

        let (safe, unsafe_) = partition_by_safety(&grid, &[3, 6]);
        assert_eq!(safe, vec![6]);
        assert_eq!(unsafe_, vec![3]);
    }

    #[test]
    fn forced_win_only_accepts_the_block() {
        let grid = GridBuilder::new()
            .drop(6, Color::Yellow)
            .drop(6, Color::Yellow)
            .drop(6, Color::Yellow)
            .drop(0, Color::Red)
            .drop(0, Color::Red)
            .side_to_move(Color::Red)
            .build();
        assert_eq!(find_forced_win(&grid), Some(6));
    }

    #[test]
    fn forced_win_takes_an_outright_win() {
        let grid = GridBuilder::new()
            .drop(2, Color::Red)
            .drop(2, Color::Red)
            .drop(2, Color::Red)
            .drop(5, Color::Yellow)
            .drop(5, Color::Yellow)
            .drop(5, Color::Yellow)
            .side_to_move(Color::Red)
            .build();
        assert_eq!(find_forced_win(&grid), Some(2));
    }
}
