use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Randomness seam for the simulated outcomes (verdicts, scores, badges).
/// Everything that would reach for a global RNG draws through this instead,
/// so tests and demos can pin the sequence.
pub trait RandomSource: Send {
    /// Uniform draw in [0, 1).
    fn next_unit(&mut self) -> f64;

    /// Bernoulli trial with the given pass probability.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_unit() < probability
    }

    /// Uniform integer in the closed range [0, upper].
    fn uniform_inclusive(&mut self, upper: u8) -> u8 {
        let scaled = (self.next_unit() * (upper as f64 + 1.0)) as u16;
        scaled.min(upper as u16) as u8
    }
}

/// Seedable source backing production and reproducible demo runs.
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Scripted source for tests: pops queued draws, then repeats the fallback.
#[derive(Debug, Default)]
pub struct FixedRandom {
    queued: VecDeque<f64>,
    fallback: f64,
}

impl FixedRandom {
    pub fn with_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            queued: values.into_iter().collect(),
            fallback: 0.0,
        }
    }

    pub fn repeating(fallback: f64) -> Self {
        Self {
            queued: VecDeque::new(),
            fallback,
        }
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.queued.pop_front().unwrap_or(self.fallback)
    }
}
