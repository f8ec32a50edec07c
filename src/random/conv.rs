//! Conversion between raw byte buffers and 64-bit integers
//!
//! This module defines the explicit conversion from a transient entropy
//! buffer to an unsigned 64-bit candidate value, preserving big-endian
//! semantics and preventing implicit truncation.
//!
//! The conversion must be injective and deterministic: identical byte
//! sequences always yield identical integers, and byte `i` of an `L`-byte
//! buffer contributes exactly `byte[i] << (8 * (L - 1 - i))`.

use crate::random::RandomError;

/// Interprets a buffer of 1 to 8 bytes as a big-endian unsigned integer.
///
/// The most significant byte comes first. Buffers shorter than 8 bytes are
/// treated as if zero-extended on the left, so `[0, 0, 0, 5]` yields `5`.
///
/// Fails with [`RandomError::InvalidLength`] if the buffer is empty or
/// longer than 8 bytes.
pub fn be_uint(bytes: &[u8]) -> Result<u64, RandomError> {
    if bytes.is_empty() || bytes.len() > 8 {
        return Err(RandomError::InvalidLength(bytes.len()));
    }

    let mut out = [0u8; 8];
    out[8 - bytes.len()..].copy_from_slice(bytes);

    Ok(u64::from_be_bytes(out))
}
