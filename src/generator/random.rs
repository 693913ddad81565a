//! Randomness sources for password generation
//!
//! The generator never constructs its own source: callers hand one in, so
//! tests can use a seeded or scripted source and production code can use
//! the operating system RNG.

use log::warn;
use rand::rngs::OsRng;
use rand::{Rng, RngCore, TryRngCore};

use crate::error::{PasswordError, Result};

/// A source of uniformly distributed indices
pub trait RandomSource {
    /// Return an index uniformly distributed in `0..bound`.
    ///
    /// `bound` must be non-zero; a zero bound is reported as
    /// [`PasswordError::InvalidConfig`].
    fn next_index(&mut self, bound: usize) -> Result<usize>;
}

/// Any infallible `rand` generator is a valid source (e.g. a seeded `StdRng`)
impl<R: RngCore> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(PasswordError::InvalidConfig("empty index range".to_string()));
        }
        Ok(self.random_range(0..bound))
    }
}

/// Operating system randomness, the default source.
///
/// Failures of the OS generator are reported to the caller rather than
/// replaced with a weaker generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_index(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(PasswordError::InvalidConfig("empty index range".to_string()));
        }
        let range = u64::try_from(bound)
            .ok()
            .filter(|r| *r <= u64::from(u32::MAX))
            .ok_or_else(|| PasswordError::InvalidConfig(format!("index range too large: {}", bound)))?;

        // Reject the tail of the u32 space so every index is equally likely
        let span = 1u64 << 32;
        let limit = span - span % range;
        loop {
            let value = OsRng.try_next_u32().map_err(|e| {
                warn!("OS random source failed: {}", e);
                PasswordError::RandomSourceUnavailable(e.to_string())
            })?;
            let value = u64::from(value);
            if value < limit {
                return Ok((value % range) as usize);
            }
        }
    }
}
