//! Seeded random choices shared by every stage of generation
//!
//! All randomness in a generation run flows through one `RandomSelector`
//! so that a seed and a configuration fully determine the output. The draw
//! order is: empty cell, target length, direction shuffle, then per body
//! step an optional curve coin flip followed by the move index.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::spatial::{Cell, Direction, OccupancyGrid};

/// Seeded random selector for reproducible stochastic choices
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform index in `0..len`, `None` when `len` is zero
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    /// Bernoulli trial succeeding with `probability`
    ///
    /// Probabilities at or below zero never succeed and at or above one
    /// always succeed; one value is drawn either way.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.random::<f64>() < probability
    }

    /// Uniform length in `min..=max`
    pub fn length_between(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// The four directions in a random order
    pub fn shuffled_directions(&mut self) -> [Direction; 4] {
        let mut directions = Direction::ALL;
        directions.shuffle(&mut self.rng);
        directions
    }

    /// Uniformly chosen empty cell of `grid`
    pub fn empty_cell(&mut self, grid: &OccupancyGrid) -> Option<Cell> {
        grid.random_empty_cell(&mut self.rng)
    }
}
