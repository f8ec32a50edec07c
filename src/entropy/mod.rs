//! Entropy acquisition module
//!
//! This module defines the capability through which the rest of the crate
//! obtains cryptographically secure random bytes.
//!
//! The source is modeled as a trait rather than a hidden process-wide
//! singleton: production code injects [`OsEntropy`], which reads from the
//! operating system, while tests can inject a deterministic source to
//! exercise the sampling logic byte by byte.

/// Design goals:
/// - Cryptographic security of the production source
/// - Explicit failure, never a silent fallback to weaker randomness
/// - Minimal and explicit API surface
mod source;

pub use source::{EntropySource, EntropyUnavailable, OsEntropy};
