//! Mean-parameterized discrete size distributions.
//!
//! A distribution here answers one question: "give me a count whose
//! expectation is this mean". Support is the positive integers in every
//! implementation, so a sampled app never has zero instances.
//!
//! Each sampler owns its RNG. A fresh `from_entropy()` sampler per run
//! keeps concurrent runs independent; `seeded()` makes a run reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::error::DistributionError;

/// Hard cap on Bernoulli trials per sample. Bounds worst-case latency;
/// hitting it with any mean in the validated range is astronomically
/// unlikely.
pub const MAX_TRIALS: u32 = 1 << 16;

/// The "mean → count" capability the engine depends on.
///
/// Implementations must reject means below 1 with
/// [`DistributionError::InvalidMean`] and keep their support on the
/// positive integers.
pub trait AppSizeDistribution {
    fn sample(&mut self, desired_mean: f64) -> Result<u32, DistributionError>;
}

// ── Geometric ──────────────────────────────────────────────────────

/// Geometric distribution with support on the positive integers.
///
/// With per-trial success probability `p = 1 / desired_mean`, the
/// 1-indexed count of trials up to and including the first success is
/// geometric with mean exactly `desired_mean`.
pub struct Geometric {
    rng: Pcg64,
}

impl Geometric {
    /// Sampler with an entropy-seeded RNG.
    pub fn from_entropy() -> Self {
        Self { rng: Pcg64::from_entropy() }
    }

    /// Sampler with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: Pcg64::seed_from_u64(seed) }
    }
}

impl AppSizeDistribution for Geometric {
    fn sample(&mut self, desired_mean: f64) -> Result<u32, DistributionError> {
        if desired_mean < 1.0 {
            return Err(DistributionError::InvalidMean(desired_mean));
        }
        let prob_success = 1.0 / desired_mean;
        for trial in 1..MAX_TRIALS {
            if self.rng.gen_range(0.0..1.0) < prob_success {
                return Ok(trial);
            }
        }
        Err(DistributionError::Exhausted { max_trials: MAX_TRIALS })
    }
}

// ── Shifted Poisson ────────────────────────────────────────────────

/// `1 + Poisson(desired_mean - 1)`, an alternative law for comparison.
///
/// A plain Poisson puts mass on zero, which would violate the
/// positive-support contract; shifting by one keeps the requested mean
/// and the minimum sample of 1. Sampled by sequential inversion.
pub struct ShiftedPoisson {
    rng: Pcg64,
}

impl ShiftedPoisson {
    pub fn from_entropy() -> Self {
        Self { rng: Pcg64::from_entropy() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: Pcg64::seed_from_u64(seed) }
    }
}

impl AppSizeDistribution for ShiftedPoisson {
    fn sample(&mut self, desired_mean: f64) -> Result<u32, DistributionError> {
        if desired_mean < 1.0 {
            return Err(DistributionError::InvalidMean(desired_mean));
        }
        let lambda = desired_mean - 1.0;
        let mut x: u32 = 0;
        let mut p = (-lambda).exp();
        let mut cumulative = p;
        let u: f64 = self.rng.gen_range(0.0..1.0);
        while u > cumulative {
            x += 1;
            if x >= MAX_TRIALS {
                return Err(DistributionError::Exhausted { max_trials: MAX_TRIALS });
            }
            p = p * lambda / f64::from(x);
            cumulative += p;
        }
        Ok(1 + x)
    }
}
