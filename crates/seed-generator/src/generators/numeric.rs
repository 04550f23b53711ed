//! Numeric value generators.

use rand::Rng;
use seed_core::round_cents;

/// Generate a random amount in the given range (inclusive), rounded to cents.
pub fn money_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    round_cents(rng.gen_range(min..=max))
}

/// Pick a sample size in `min..=max`, clamped to the pool size.
pub fn sample_size<R: Rng>(rng: &mut R, min: usize, max: usize, pool: usize) -> usize {
    rng.gen_range(min..=max).min(pool)
}
