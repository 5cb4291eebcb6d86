// ABOUTME: Injectable random source for the stochastic planning algorithms
// ABOUTME: Adapts rand generators and plain closures; seeded ChaCha8 for reproducible runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Random number injection.
//!
//! The scheduler never reaches for a global generator. Callers pass a
//! `&mut dyn RandomSource`, so a seeded source makes a whole optimisation
//! run reproducible.

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed floats in `[0, 1)`
pub trait RandomSource {
    /// Next value in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`; `len` must be non-zero
    fn next_index(&mut self, len: usize) -> usize {
        let index = (self.next_f64() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }

    /// `true` with the given probability
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

/// Adapter for any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: RngCore> RngSource<R> {
    /// Wrap an existing generator
    pub const fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<ChaCha8Rng> {
    /// Deterministic source for reproducible runs
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RngSource<StdRng> {
    /// Platform-seeded source used when the caller supplies none
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Adapter for a `() -> f64` closure
///
/// Values are clamped into `[0, 1)` so a misbehaving closure cannot push
/// draws outside the documented domain.
pub struct FnSource<F>(F);

impl<F: FnMut() -> f64> FnSource<F> {
    /// Wrap a closure
    pub const fn new(source: F) -> Self {
        Self(source)
    }
}

impl<F: FnMut() -> f64> RandomSource for FnSource<F> {
    fn next_f64(&mut self) -> f64 {
        let value = (self.0)();
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
