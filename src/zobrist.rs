//! Zobrist hashing for grid positions.
//!
//! Provides incrementally-updatable 64-bit hashes used to pick transposition
//! table buckets. Identity is always confirmed with the canonical key.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, CELLS};

pub(crate) struct ZobristKeys {
    // disc_keys[color][cell_index]
    pub(crate) disc_keys: [[u64; CELLS]; 2],
    pub(crate) yellow_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(0x00C4_F0D5_2024_u64); // fixed seed for reproducibility
        let mut disc_keys = [[0; CELLS]; 2];

        for color in &mut disc_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        ZobristKeys {
            disc_keys,
            yellow_to_move_key: rng.gen(),
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[inline]
pub(crate) fn disc_key(color: Color, cell: usize) -> u64 {
    ZOBRIST.disc_keys[color.index()][cell]
}

#[inline]
pub(crate) fn side_key() -> u64 {
    ZOBRIST.yellow_to_move_key
}
