//! Pseudo-random input values.
//!
//! Every generator takes its RNG as an argument. Drivers seed one `StdRng`
//! from the wall clock; tests seed from a constant to get identical arrays
//! across runs.

use chrono::Utc;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{VALUE_MAX, VALUE_MIN};

/// Draws one value uniformly from `[VALUE_MIN, VALUE_MAX]`.
#[inline(always)]
pub fn random_value<R: Rng>(rng: &mut R) -> f32 {
    rng.random_range(VALUE_MIN..=VALUE_MAX)
}

/// Builds a deterministic generator.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Builds a generator seeded from the current time.
pub fn time_seeded_rng() -> StdRng {
    let now = Utc::now();
    let seed = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp()) as u64;

    debug!("seeding generator with {seed} ({now})");

    seeded_rng(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_stay_in_range() {
        let mut rng = seeded_rng(7);
        for _ in 0..10_000 {
            let v = random_value(&mut rng);
            assert!((VALUE_MIN..=VALUE_MAX).contains(&v), "{v} out of range");
        }
    }

    #[test]
    fn test_values_cover_both_signs() {
        let mut rng = seeded_rng(11);
        let values: Vec<f32> = (0..1000).map(|_| random_value(&mut rng)).collect();
        assert!(values.iter().any(|&v| v < 0.0));
        assert!(values.iter().any(|&v| v > 0.0));
    }
}
