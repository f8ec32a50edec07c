//! Random value generation module
//!
//! This module provides the public generator surface of the crate: uniformly
//! distributed integers over arbitrary ranges, fixed-width integer draws,
//! charset-based strings, raw byte buffers, and opaque session tokens.
//!
//! Everything ranged is built on a single rejection-sampling core that
//! removes modulo bias; the fixed-width and string operations are thin
//! compositions over it and inherit its contract exactly, including error
//! propagation.
//!
//! ## Provided operations
//!
//! - [`SecureRandom::uniform`]
//!   Unbiased integer in a half-open range. The algorithmic heart.
//!
//! - [`SecureRandom::uniform_inclusive`]
//!   Convenience for closed ranges, derived from the half-open form.
//!
//! - `uint8`..`uint64`, `int8`..`int64`
//!   Fixed-width integer draws over the full width.
//!
//! - [`SecureRandom::chars`], [`SecureRandom::alpha`],
//!   [`SecureRandom::alphanumeric`]
//!   Strings drawn uniformly from a character set.
//!
//! - [`SecureRandom::bytes`], [`SecureRandom::token`]
//!   Raw bytes and base64-encoded session tokens, straight from the
//!   entropy source.

pub(crate) mod conv;

mod core;
mod string;

pub use self::core::{RandomError, SecureRandom};

pub use conv::be_uint;
