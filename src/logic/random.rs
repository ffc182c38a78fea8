use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of the yield estimator's perturbation draw.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Thread-local system randomness.
#[derive(Default)]
pub struct SystemRandom {
    rng: ThreadRng,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl RandomSource for SystemRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Reproducible draws from a fixed seed.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct FixedRandom {
    draws: Vec<f64>,
    next: usize,
}

impl FixedRandom {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, next: 0 }
    }

    /// Always draws 0.5, the midpoint that leaves the yield unperturbed.
    pub fn neutral() -> Self {
        Self::new(vec![0.5])
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.5;
        }
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value
    }
}
