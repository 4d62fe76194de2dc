//! Transposition table for caching search results.
//!
//! Entries are keyed by the exact canonical position, the remaining search
//! depth and the node kind; the Zobrist hash only selects the bucket. A
//! stored score is never returned for a depth or node kind it was not
//! stored under, so a cold table and a warm one give the same answers.

use std::mem;

use crate::board::CanonicalKey;

/// Whether a node maximizes or minimizes the root side's score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Max,
    Min,
}

impl NodeKind {
    #[inline]
    #[must_use]
    pub fn from_maximizing(maximizing: bool) -> Self {
        if maximizing {
            NodeKind::Max
        } else {
            NodeKind::Min
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

/// Full lookup key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TtKey {
    pub position: CanonicalKey,
    pub depth: u32,
    pub kind: NodeKind,
}

impl TtKey {
    #[must_use]
    pub fn new(position: CanonicalKey, depth: u32, kind: NodeKind) -> Self {
        TtKey {
            position,
            depth,
            kind,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TTEntry {
    pub key: TtKey,
    pub score: i32,
    pub bound_type: BoundType,
    pub generation: u16,
}

/// Number of slots per bucket for collision resolution
const BUCKET_SIZE: usize = 4;

type Bucket = [Option<TTEntry>; BUCKET_SIZE];

pub struct TranspositionTable {
    buckets: Vec<Bucket>,
    mask: usize,
    generation: u16,
}

impl TranspositionTable {
    /// Create a new transposition table with the given size in megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let bucket_size = mem::size_of::<Bucket>();
        let mut num_buckets = (size_mb * 1024 * 1024) / bucket_size;

        num_buckets = num_buckets.next_power_of_two() / 2;
        if num_buckets == 0 {
            num_buckets = 1024;
        }

        TranspositionTable {
            buckets: vec![[None; BUCKET_SIZE]; num_buckets],
            mask: num_buckets - 1,
            generation: 0,
        }
    }

    fn index(&self, hash: u64, key: &TtKey) -> usize {
        let kind_bit = match key.kind {
            NodeKind::Max => 0,
            NodeKind::Min => 1u64 << 63,
        };
        let mixed = hash ^ u64::from(key.depth).wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ kind_bit;
        (mixed as usize) & self.mask
    }

    /// Probe for an entry stored under exactly `key`.
    #[must_use]
    pub fn probe(&self, hash: u64, key: &TtKey) -> Option<&TTEntry> {
        self.buckets[self.index(hash, key)]
            .iter()
            .flatten()
            .find(|entry| entry.key == *key)
    }

    /// Store an entry.
    ///
    /// An exact entry written during the current generation is kept as is.
    /// Otherwise the slot holding the same key, an empty slot, or the slot
    /// with the lowest priority (shallow and old) is overwritten.
    pub fn store(&mut self, hash: u64, key: TtKey, score: i32, bound_type: BoundType) {
        let generation = self.generation;
        let entry = TTEntry {
            key,
            score,
            bound_type,
            generation,
        };
        let index = self.index(hash, &key);
        let bucket = &mut self.buckets[index];

        if let Some(slot) = bucket
            .iter_mut()
            .find(|slot| slot.is_some_and(|existing| existing.key == key))
        {
            let keep = slot.is_some_and(|existing| {
                existing.bound_type == BoundType::Exact && existing.generation == generation
            });
            if !keep {
                *slot = Some(entry);
            }
            return;
        }

        if let Some(slot) = bucket.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some(entry);
            return;
        }

        let mut replace_idx = 0;
        let mut worst_priority = i64::MAX;
        for (idx, slot) in bucket.iter().enumerate() {
            if let Some(existing) = slot {
                let age = generation.wrapping_sub(existing.generation);
                let priority = i64::from(existing.key.depth) * 2 - i64::from(age);
                if priority < worst_priority {
                    replace_idx = idx;
                    worst_priority = priority;
                }
            }
        }
        bucket[replace_idx] = Some(entry);
    }

    /// Start a new search generation; older entries become cheaper to evict.
    pub fn new_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    #[must_use]
    pub fn generation(&self) -> u16 {
        self.generation
    }

    /// Returns hash table fullness in per mille (0-1000).
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        // Sample first 1000 buckets for efficiency
        let sample_size = self.buckets.len().min(1000);
        let occupied = self
            .buckets
            .iter()
            .take(sample_size)
            .flatten()
            .filter(|slot| slot.is_some())
            .count();

        let total_slots = sample_size * BUCKET_SIZE;
        ((occupied as u64 * 1000) / total_slots as u64) as u32
    }

    /// Clear all entries from the table.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            *bucket = [None; BUCKET_SIZE];
        }
        self.generation = 0;
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(crate::board::search::DEFAULT_TT_MB)
    }
}
