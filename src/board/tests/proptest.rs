//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{minimax, scan_winner};
use crate::board::search::{SearchContext, INFINITY};
use crate::board::{
    canonical_encode, evaluate, EvalWeights, Grid, SearchParams, SearchState, CELLS, WIN_SCORE,
};
use crate::timer::Deadline;
use crate::tt::TranspositionTable;

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play random legal moves until the game ends or `plies` moves were made.
fn random_game(seed: u64, plies: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new();
    for _ in 0..plies {
        if grid.winner().is_some() {
            break;
        }
        let legal = grid.legal_columns();
        let Some(&col) = legal.choose(&mut rng) else {
            break;
        };
        grid.place(col);
    }
    grid
}

proptest! {
    /// Property: after every placement, winner() agrees with a full-board scan
    #[test]
    fn prop_winner_matches_full_scan(seed in seed_strategy()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = Grid::new();
        loop {
            let legal = grid.legal_columns();
            let Some(&col) = legal.choose(&mut rng) else { break };
            prop_assert!(grid.place(col));
            prop_assert_eq!(grid.winner(), scan_winner(&grid));
            if grid.winner().is_some() {
                break;
            }
        }
    }

    /// Property: is_draw() holds exactly for full grids without a winner
    #[test]
    fn prop_draw_iff_full_without_winner(seed in seed_strategy(), plies in 0..=CELLS) {
        let grid = random_game(seed, plies);
        let full = grid.legal_columns().is_empty();
        prop_assert_eq!(full, grid.is_full());
        prop_assert_eq!(grid.is_draw(), full && grid.winner().is_none());
        if !full {
            prop_assert!(!grid.is_draw());
        }
    }

    /// Property: incremental hash and key always equal a recomputation
    #[test]
    fn prop_keys_consistent(seed in seed_strategy(), plies in 0..=CELLS) {
        let grid = random_game(seed, plies);
        prop_assert_eq!(grid.hash(), grid.calculate_hash());
        prop_assert_eq!(canonical_encode(&grid), grid.calculate_canonical_key());
        let parsed = Grid::from_layout(&grid.to_layout()).unwrap();
        prop_assert_eq!(canonical_encode(&parsed), canonical_encode(&grid));
    }

    /// Property: heuristic scores never reach the win constant
    #[test]
    fn prop_heuristic_stays_below_win(seed in seed_strategy(), plies in 0..=CELLS) {
        let grid = random_game(seed, plies);
        let weights = EvalWeights::default();
        for color in crate::board::Color::ALL {
            let score = evaluate(&grid, color, &weights);
            if grid.winner().is_none() {
                prop_assert!(score.abs() <= weights.max_heuristic);
            } else {
                prop_assert_eq!(score.abs(), WIN_SCORE);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: pruning and caching never change the search value
    #[test]
    fn prop_alphabeta_equals_minimax(seed in seed_strategy(), plies in 0..20usize, depth in 1..=3u32) {
        let grid = random_game(seed, plies);
        prop_assume!(grid.winner().is_none());
        let weights = EvalWeights::default();
        let root = grid.side_to_move();
        let expected = minimax(&grid, depth, true, root, &weights);

        for use_tt in [false, true] {
            let mut tt = TranspositionTable::new(1);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut ctx = SearchContext::new(&mut tt, &weights, &mut rng, Deadline::unlimited(), root);
            ctx.use_tt = use_tt;
            prop_assert_eq!(ctx.alphabeta(&grid, depth, true, -INFINITY, INFINITY), expected);
        }
    }

    /// Property: the selector returns a legal column, or None only on a full grid
    #[test]
    fn prop_selector_returns_legal_column(seed in seed_strategy(), plies in 0..=CELLS) {
        let grid = random_game(seed, plies);
        prop_assume!(grid.winner().is_none());
        let before = grid.clone();
        let mut state = SearchState::with_seed(SearchParams::depth(3), seed);
        match state.select_move(&grid) {
            Some(col) => prop_assert!(grid.is_legal(col)),
            None => prop_assert!(grid.legal_columns().is_empty()),
        }
        prop_assert_eq!(grid, before);
    }

    /// Property: disabling the cache does not change the decision
    #[test]
    fn prop_cache_is_neutral(seed in seed_strategy(), plies in 4..16usize) {
        let grid = random_game(seed, plies);
        prop_assume!(grid.winner().is_none());
        let with = SearchState::with_seed(SearchParams::depth(4), seed).analyze(&grid);
        let without = SearchState::with_seed(SearchParams::depth(4).with_tt(false), seed).analyze(&grid);
        prop_assert_eq!(with, without);
    }
}
