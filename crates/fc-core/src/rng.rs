//! The simulation's single seedable random source.
//!
//! # Determinism strategy
//!
//! Every stochastic draw in a run (trait sampling, initial placement,
//! activation order, random steps, drop and collect rolls, cup soiling) goes
//! through one [`SimRng`] owned by the model.  Execution is strictly
//! sequential, so the same seed and configuration always replay the same
//! run.  There is deliberately no per-agent RNG: the draw order *is* the
//! activation order.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Draw from a normal distribution via the Box-Muller transform.
    ///
    /// Always consumes exactly two uniform draws, even when `sd == 0`, so
    /// changing a spread parameter never shifts the rest of the stream.
    pub fn normal(&mut self, mean: f64, sd: f64) -> f64 {
        // 1 - u keeps the argument of ln in (0, 1].
        let u1: f64 = 1.0 - self.0.r#gen::<f64>();
        let u2: f64 = self.0.r#gen::<f64>();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mean + sd * z
    }

    /// Normal draw clamped at zero.
    pub fn normal_non_negative(&mut self, mean: f64, sd: f64) -> f64 {
        self.normal(mean, sd).max(0.0)
    }
}
