//! Uniform random generation core
//!
//! This module provides the public API for unbiased random integer
//! generation: the rejection-sampling range sampler and the fixed-width
//! integer draws derived from it.
//!
//! A uniform 64-bit value reduced modulo a range width `w` is only uniform
//! over `[0, w)` when `w` evenly divides the 64-bit value space. For every
//! other width the low residues are overrepresented. The sampler removes
//! this modulo bias by rejecting candidates at or above the largest multiple
//! of `w` representable in 64 bits, so the retained candidates are exactly
//! uniform.
//!
//! ## Provided operations
//!
//! - [`SecureRandom::uniform`]
//!   Unbiased integer in the half-open range `[start, end)`.
//!
//! - [`SecureRandom::uniform_inclusive`]
//!   Unbiased integer in the closed range `[start, end]`, derived from the
//!   half-open form.
//!
//! - `uint8` through `uint64` and `int8` through `int64`
//!   Fixed-width draws over the entire width, expressed through the same
//!   sampler (or, for the full 64-bit width, a direct draw).
//!
//! - [`SecureRandom::bytes`]
//!   Raw bytes straight from the entropy source.
//!
//! ## Properties
//!
//! - Output is exactly uniform over the requested range.
//! - The redraw loop has no iteration cap; uniformity takes priority over
//!   worst-case latency. Rejection probability per draw is strictly below
//!   one, so termination is expected after O(1) draws.
//! - Entropy failure propagates immediately, with no retry and no fallback.
//!
//! ## Scope and limitations
//!
//! This module provides **uniformity and secrecy of the draws only**. It
//! does not provide reproducibility, seeding, or any non-cryptographic
//! fast path; callers needing those properties want a PRNG, not this crate.

use crate::entropy::{EntropySource, EntropyUnavailable, OsEntropy};
use crate::random::conv::be_uint;

use thiserror::Error;

/// Errors that may occur during random value generation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RandomError {
    /// The range start was not strictly below its end.
    ///
    /// A caller bug; the bounds are never silently swapped.
    #[error("range start must be less than range end")]
    InvalidRange,

    /// A byte buffer had a length outside 1..=8.
    #[error("byte buffer length must be between 1 and 8, got {0}")]
    InvalidLength(usize),

    /// The supplied character set contained no characters.
    #[error("charset cannot be empty")]
    EmptyCharset,

    /// A string of length zero was requested.
    #[error("requested string length cannot be zero")]
    ZeroLength,

    /// The entropy source failed; see [`EntropyUnavailable`].
    #[error(transparent)]
    Entropy(#[from] EntropyUnavailable),
}

/// Generator of uniformly distributed random values.
///
/// The generator holds nothing but its entropy source: every operation is a
/// pure function of its arguments plus fresh entropy draws, so instances are
/// cheap to construct and independent instances may be used concurrently
/// without any locking.
///
/// Production code uses [`SecureRandom::new`], which reads from the
/// operating system. Tests inject a deterministic source through
/// [`SecureRandom::with_source`] to exercise the sampling logic exactly.
pub struct SecureRandom<S: EntropySource = OsEntropy> {
    source: S,
}

impl SecureRandom<OsEntropy> {
    /// Creates a generator backed by the operating system's entropy source.
    pub fn new() -> Self {
        Self::with_source(OsEntropy)
    }
}

impl Default for SecureRandom<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EntropySource> SecureRandom<S> {
    /// Creates a generator backed by the given entropy source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Draws a full-width 64-bit value: 8 fresh bytes, big-endian.
    fn draw(&mut self) -> Result<u64, RandomError> {
        let mut buf = [0u8; 8];
        self.source.fill(&mut buf)?;

        be_uint(&buf)
    }

    /// Returns a random integer uniformly distributed over `[start, end)`.
    ///
    /// Fails with [`RandomError::InvalidRange`] unless `start < end`, and
    /// propagates entropy failure immediately without retrying.
    ///
    /// Candidates at or above the largest multiple of the range width
    /// representable in 64 bits are discarded and redrawn; accepting them
    /// would overrepresent the low residues after the modulo reduction.
    /// The expected number of draws is below two for every width.
    pub fn uniform(&mut self, start: u64, end: u64) -> Result<u64, RandomError> {
        if start >= end {
            return Err(RandomError::InvalidRange);
        }

        let width = end - start;

        // Largest multiple of `width` not exceeding u64::MAX. Everything at
        // or above it maps onto an incomplete final cycle of residues.
        let limit = u64::MAX - (u64::MAX % width);

        let value = loop {
            let candidate = self.draw()?;

            if candidate < limit {
                break candidate;
            }
        };

        Ok(start + (value % width))
    }

    /// Returns a random integer uniformly distributed over `[start, end]`.
    ///
    /// Convenience over [`SecureRandom::uniform`]: the half-open form is
    /// canonical, and this widens the upper bound by one on the caller's
    /// behalf, handling the bounds that would overflow a plain `end + 1`.
    pub fn uniform_inclusive(&mut self, start: u64, end: u64) -> Result<u64, RandomError> {
        if start > end {
            return Err(RandomError::InvalidRange);
        }

        if end == u64::MAX {
            if start == 0 {
                // Full 64-bit range: every bit pattern is valid.
                return self.draw();
            }

            // Sample the range shifted down by one so the widened upper
            // bound stays representable, then shift back.
            return Ok(self.uniform(start - 1, end)? + 1);
        }

        self.uniform(start, end + 1)
    }

    /// Returns `n` raw bytes from the entropy source.
    ///
    /// No bias removal applies to raw bytes; this is a direct fetch.
    pub fn bytes(&mut self, n: usize) -> Result<Vec<u8>, RandomError> {
        let mut buf = vec![0u8; n];
        self.source.fill(&mut buf)?;

        Ok(buf)
    }

    /// Returns a random 8-bit unsigned integer.
    pub fn uint8(&mut self) -> Result<u8, RandomError> {
        Ok(self.uniform(0, 1 << 8)? as u8)
    }

    /// Returns a random 8-bit signed integer.
    ///
    /// The unsigned bit pattern is reinterpreted as two's complement, so
    /// negative values are as likely as non-negative ones.
    pub fn int8(&mut self) -> Result<i8, RandomError> {
        Ok(self.uint8()? as i8)
    }

    /// Returns a random 16-bit unsigned integer.
    pub fn uint16(&mut self) -> Result<u16, RandomError> {
        Ok(self.uniform(0, 1 << 16)? as u16)
    }

    /// Returns a random 16-bit signed integer.
    pub fn int16(&mut self) -> Result<i16, RandomError> {
        Ok(self.uint16()? as i16)
    }

    /// Returns a random 32-bit unsigned integer.
    pub fn uint32(&mut self) -> Result<u32, RandomError> {
        Ok(self.uniform(0, 1 << 32)? as u32)
    }

    /// Returns a random 32-bit signed integer.
    pub fn int32(&mut self) -> Result<i32, RandomError> {
        Ok(self.uint32()? as i32)
    }

    /// Returns a random 64-bit unsigned integer.
    ///
    /// The full 64-bit width cannot be expressed as a range width without
    /// overflow, so this draws directly; every bit pattern is valid and
    /// no rejection is needed.
    pub fn uint64(&mut self) -> Result<u64, RandomError> {
        self.draw()
    }

    /// Returns a random 64-bit signed integer.
    pub fn int64(&mut self) -> Result<i64, RandomError> {
        Ok(self.uint64()? as i64)
    }
}
