//! Move ordering utilities for search.

use super::constants::PREFERRED_COLUMNS;
use crate::board::Grid;

/// Legal columns in center-outward preference order.
#[must_use]
pub fn ordered_moves(grid: &Grid) -> Vec<usize> {
    PREFERRED_COLUMNS
        .iter()
        .copied()
        .filter(|&col| grid.is_legal(col))
        .collect()
}

/// Move `best` to the front, keeping the relative order of the rest.
pub fn reorder_best_first(columns: &mut [usize], best: usize) {
    if let Some(pos) = columns.iter().position(|&col| col == best) {
        columns[..=pos].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_orders_center_out() {
        assert_eq!(ordered_moves(&Grid::new()), vec![3, 2, 4, 1, 5, 0, 6]);
    }

    #[test]
    fn full_columns_are_skipped() {
        let grid = Grid::from_moves(&[3, 3, 3, 3, 3, 3]).unwrap();
        assert_eq!(ordered_moves(&grid), vec![2, 4, 1, 5, 0, 6]);
    }

    #[test]
    fn reorder_moves_best_to_front() {
        let mut cols = vec![3, 2, 4, 1, 5];
        reorder_best_first(&mut cols, 1);
        assert_eq!(cols, vec![1, 3, 2, 4, 5]);

        reorder_best_first(&mut cols, 6);
        assert_eq!(cols, vec![1, 3, 2, 4, 5]);
    }
}
