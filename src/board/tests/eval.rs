//! Static evaluation tests.

use crate::board::eval::window_count;
use crate::board::{evaluate, Color, EvalWeights, Grid, GridBuilder, WIN_SCORE};

fn red_three_bottom_left() -> Grid {
    GridBuilder::new()
        .drop(0, Color::Red)
        .drop(1, Color::Red)
        .drop(2, Color::Red)
        .side_to_move(Color::Red)
        .build()
}

#[test]
fn default_weights_keep_tier_ordering() {
    let w = EvalWeights::default();
    assert!(w.four > w.three && w.three > w.two && w.two > 0);
    assert!(w.opp_four > w.opp_three && w.opp_three > w.opp_two);
    assert!(w.opp_four >= w.four);
    assert!(w.opp_three > w.three);
    assert!(w.opp_two >= w.two);
    assert!(w.max_heuristic < WIN_SCORE);
}

#[test]
fn grid_has_69_windows() {
    // 24 horizontal, 21 vertical, 12 per diagonal direction
    assert_eq!(window_count(), 69);
}

#[test]
fn empty_grid_is_neutral() {
    let weights = EvalWeights::default();
    assert_eq!(evaluate(&Grid::new(), Color::Red, &weights), 0);
    assert_eq!(evaluate(&Grid::new(), Color::Yellow, &weights), 0);
}

#[test]
fn center_disc_scores_column_weight() {
    let weights = EvalWeights::default();
    let grid = Grid::from_moves(&[3]).unwrap();
    assert_eq!(evaluate(&grid, Color::Red, &weights), 6);
    assert_eq!(evaluate(&grid, Color::Yellow, &weights), -6);
}

#[test]
fn open_three_scores_by_tier() {
    let weights = EvalWeights::default();
    let grid = red_three_bottom_left();

    // center 1 + 2 + 3, one three-plus-gap window, one two-plus-two-gaps window
    assert_eq!(evaluate(&grid, Color::Red, &weights), 6 + 500 + 40);
    // The opponent view weighs the same windows more heavily.
    assert_eq!(evaluate(&grid, Color::Yellow, &weights), -6 - 700 - 60);
}

#[test]
fn decided_grid_scores_win_constant() {
    let weights = EvalWeights::default();
    let grid = Grid::from_moves(&[0, 6, 1, 6, 2, 6, 3]).unwrap();
    assert_eq!(grid.winner(), Some(Color::Red));
    assert_eq!(evaluate(&grid, Color::Red, &weights), WIN_SCORE);
    assert_eq!(evaluate(&grid, Color::Yellow, &weights), -WIN_SCORE);
}

#[test]
fn heuristic_is_clamped() {
    let weights = EvalWeights {
        max_heuristic: 100,
        ..EvalWeights::default()
    };
    let grid = red_three_bottom_left();
    assert_eq!(evaluate(&grid, Color::Red, &weights), 100);
    assert_eq!(evaluate(&grid, Color::Yellow, &weights), -100);
}

#[test]
fn retuned_weights_change_magnitude_only() {
    let weights = EvalWeights {
        three: 1_000,
        opp_three: 1_500,
        ..EvalWeights::default()
    };
    let grid = red_three_bottom_left();
    assert_eq!(evaluate(&grid, Color::Red, &weights), 6 + 1_000 + 40);
}
