//! Cryptographically secure, unbiased random values
//!
//! This crate produces random integers and strings whose distribution is
//! exactly uniform over a caller-chosen range or character set. All output
//! derives from a cryptographically secure entropy source; there is no
//! seeding, no reproducibility, and no non-cryptographic fast path.
//!
//! The focus is on **correctness of the distribution** rather than raw
//! throughput: reducing a uniform 64-bit draw modulo a range width that does
//! not evenly divide the 64-bit value space overrepresents the low residues
//! (modulo bias), and every ranged operation in this crate removes that bias
//! through rejection sampling.
//!
//! # Module overview
//!
//! - `os`
//!   Platform abstraction over the operating system's secure random
//!   facility. The implementation is selected at compile time; each platform
//!   module exposes the same surface so higher layers stay portable.
//!
//! - `entropy`
//!   The [`EntropySource`] capability and its OS-backed implementation.
//!   Entropy is an injected collaborator rather than a hidden singleton,
//!   which keeps the sampling code testable against deterministic sources.
//!
//! - `random`
//!   The public generator surface: the uniform range sampler, fixed-width
//!   integer draws, charset-based string generation, raw byte fetch, and
//!   opaque session tokens.
//!
//! # Design goals
//!
//! - Exactly uniform output over arbitrary ranges and charsets
//! - Explicit, `Result`-based failure on every operation
//! - No fallback to a weaker source when OS entropy is unavailable
//! - No shared mutable state; generators are independent and cheap
//!
//! Every operation is a pure function of its inputs plus entropy draws.
//! Failures are never masked: an entropy outage surfaces to the caller
//! instead of being papered over with a zero or a partial result.

mod os;

pub mod entropy;
pub mod random;

pub use entropy::{EntropySource, EntropyUnavailable, OsEntropy};
pub use random::{RandomError, SecureRandom};
