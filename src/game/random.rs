//! Randomness used for food placement.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform floats in `[0, 1)`.
pub trait RandomSource: Send + Sync {
    fn unit(&mut self) -> f32;
}

/// [`RandomSource`] backed by a `rand` generator.
pub struct RngSource<R>(R);

impl RngSource<StdRng> {
    /// Seeded from the operating system.
    pub fn from_os() -> Self {
        RngSource(StdRng::from_os_rng())
    }

    /// Reproducible sequence.
    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send + Sync> RandomSource for RngSource<R> {
    fn unit(&mut self) -> f32 {
        self.0.random::<f32>()
    }
}

/// Replays a fixed list of values, then repeats the last one.
#[cfg(test)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        ScriptedRandom {
            values: values.into(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f32 {
        let value = self
            .values
            .get(self.next)
            .or(self.values.last())
            .copied()
            .unwrap_or(0.0);
        self.next += 1;
        value
    }
}
