//! Uniformly random move selection, used for the easiest level.

use chess_core::{legal_moves_into, Engine, Position, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Picks any legal move with equal probability.
#[derive(Debug, Clone)]
pub struct RandomMover {
    rng: StdRng,
    nodes: u64,
}

impl RandomMover {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Reproducible sequence of choices, for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomMover {
    fn search(&mut self, pos: &Position, _depth: u8) -> SearchResult {
        let mut pos_copy = pos.clone();
        let mut moves = Vec::with_capacity(64);
        legal_moves_into(&mut pos_copy, &mut moves);

        self.nodes = 1;

        SearchResult {
            best_move: moves.choose(&mut self.rng).copied(),
            score: 0,
            depth: 0,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
#[path = "random_tests.rs"]
mod random_tests;
