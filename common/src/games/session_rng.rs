use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded source of randomness owned by one match, so a match can be replayed from its seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Draws uniformly from `0..=max` and reports whether the draw was zero.
    pub fn hits_zero_in(&mut self, max: u32) -> bool {
        self.rng.random_range(0..=max) == 0
    }
}
