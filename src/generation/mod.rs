//! # Generation Module
//!
//! Procedural spawning of wild creatures.
//!
//! Generators draw every random value through [`RandomSource`], so sessions can
//! run on entropy in production, on a seeded [`StdRng`] for reproducible runs,
//! or on a [`FixedRoll`] when a test needs to force an outcome.

pub mod encounters;

pub use encounters::*;

use crate::PokeHuntResult;
use rand::rngs::StdRng;
use rand::Rng;

/// Source of uniform random draws.
///
/// Implemented for every [`rand::Rng`], so any rand generator plugs in directly.
pub trait RandomSource {
    /// Uniform draw in [0, 1).
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in [0, bound). `bound` must be non-zero.
    fn next_below(&mut self, bound: u32) -> u32 {
        let scaled = (self.next_unit() * f64::from(bound)) as u32;
        scaled.min(bound.saturating_sub(1))
    }
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        self.gen_range(0..bound)
    }
}

/// Random source that returns the same roll forever.
///
/// Handy for forcing capture outcomes: a roll of `0.99` beats every threshold,
/// a roll of `0.0` beats none.
///
/// # Examples
///
/// ```
/// use pokehunt::{FixedRoll, RandomSource};
///
/// let mut roll = FixedRoll::new(0.25);
/// assert_eq!(roll.next_unit(), 0.25);
/// assert_eq!(roll.next_below(8), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRoll(f64);

impl FixedRoll {
    /// Creates a fixed source. The roll is clamped into [0, 1).
    pub fn new(roll: f64) -> Self {
        Self(roll.clamp(0.0, 1.0 - f64::EPSILON))
    }

    /// A roll above every capture threshold.
    pub fn always_high() -> Self {
        Self::new(0.99)
    }

    /// A roll at or below every capture threshold.
    pub fn always_low() -> Self {
        Self::new(0.0)
    }
}

impl RandomSource for FixedRoll {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Trait for procedural generators.
pub trait Generator<T> {
    /// Generates content using the provided random source.
    fn generate(&self, rng: &mut dyn RandomSource) -> PokeHuntResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T) -> PokeHuntResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates a seeded random number generator, or an entropy-seeded one.
    pub fn create_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
