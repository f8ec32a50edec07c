//! Entropy source capability
//!
//! This module defines the [`EntropySource`] trait and the OS-backed
//! implementation used in production.
//!
//! The contract is deliberately narrow: fill a buffer with uniformly random
//! bytes or fail. There is no internal retry and no fallback; masking an
//! entropy failure by substituting a weaker source would silently defeat the
//! cryptographic guarantee of everything built on top.

use crate::os::sys_random;

use thiserror::Error;

/// The operating system's secure random facility could not produce bytes.
///
/// This is an environment failure, not a caller bug. It is surfaced
/// immediately; any retry policy belongs to the caller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("operating system entropy is unavailable")]
pub struct EntropyUnavailable;

/// A provider of cryptographically secure random bytes.
///
/// Implementations must either fill the entire buffer with uniformly random
/// bytes or return an error; a partially filled buffer is never exposed as
/// success. Each call is independent of every other call.
pub trait EntropySource {
    /// Fills `dest` with uniformly random bytes.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyUnavailable>;
}

/// The operating system's secure random device.
///
/// Stateless from the caller's perspective: every call delegates directly to
/// the platform facility, so instances are free to construct and safe to use
/// from any number of independent threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyUnavailable> {
        sys_random(dest)
    }
}
