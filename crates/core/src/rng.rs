//! RNG module - bag piece generation
//!
//! Implements the "bag" randomization algorithm: the bag holds one of each
//! piece kind in shuffled order and is drawn front to back; once empty it is
//! reshuffled. Every kind therefore appears exactly once per aligned run of
//! [`PieceKind::COUNT`] draws, bounding any drought to `2 * COUNT - 1` draws.
//!
//! The bag owns a single seeded `ChaCha8Rng` for its whole lifetime, so a
//! seed fully determines the piece sequence.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::PieceKind;

/// Unbiased Fisher-Yates shuffle.
pub fn shuffle<R: Rng, T>(rng: &mut R, slice: &mut [T]) {
    for i in (1..slice.len()).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

/// Bag piece generator
#[derive(Debug, Clone)]
pub struct Bag {
    /// Private working copy of the catalog; never aliases `PieceKind::ALL`.
    order: [PieceKind; PieceKind::COUNT],
    /// Index of the next kind to hand out
    index: usize,
    rng: ChaCha8Rng,
    seed: u64,
}

impl Bag {
    /// Create a new bag with the given seed, already shuffled.
    pub fn new(seed: u64) -> Self {
        let mut bag = Self {
            order: PieceKind::ALL,
            index: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        shuffle(&mut self.rng, &mut self.order);
        self.index = 0;
    }

    /// Draw the next piece kind, reshuffling once the bag is exhausted.
    pub fn draw(&mut self) -> PieceKind {
        if self.index >= self.order.len() {
            self.refill();
        }

        let kind = self.order[self.index];
        self.index += 1;
        kind
    }

    /// Kinds not yet drawn from the current bag.
    pub fn remaining(&self) -> &[PieceKind] {
        &self.order[self.index..]
    }

    /// The seed this bag was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
