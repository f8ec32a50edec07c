//! Random string generation
//!
//! Strings drawn uniformly from a caller-supplied character set, plus the
//! fixed-charset conveniences and base64 session tokens.
//!
//! Each output position is an independent draw from the uniform range
//! sampler over the charset's indices, so the bias guarantees of the core
//! carry over position by position. A failed draw aborts the whole string;
//! no partial output is ever returned.

use crate::entropy::EntropySource;
use crate::random::{RandomError, SecureRandom};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

const ALPHA: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Byte length of the raw material behind a session token.
const TOKEN_BYTES: usize = 32;

impl<S: EntropySource> SecureRandom<S> {
    /// Returns a random string of `n` characters drawn from `charset`.
    ///
    /// Every position is an independent uniform draw over the charset, so
    /// all characters are equally likely at every position. The charset is
    /// treated as a sequence of `char`s, which keeps multi-byte characters
    /// intact.
    ///
    /// Fails with [`RandomError::ZeroLength`] if `n` is zero and
    /// [`RandomError::EmptyCharset`] if `charset` has no characters; both
    /// are detected before any entropy is consumed. An entropy failure
    /// mid-string discards the partial output.
    pub fn chars(&mut self, charset: &str, n: u64) -> Result<String, RandomError> {
        if n == 0 {
            return Err(RandomError::ZeroLength);
        }

        let symbols: Vec<char> = charset.chars().collect();

        if symbols.is_empty() {
            return Err(RandomError::EmptyCharset);
        }

        let mut out = String::with_capacity(n as usize);

        for _ in 0..n {
            let index = self.uniform(0, symbols.len() as u64)?;
            out.push(symbols[index as usize]);
        }

        Ok(out)
    }

    /// Returns a random string of `n` ASCII letters, both cases.
    pub fn alpha(&mut self, n: u64) -> Result<String, RandomError> {
        self.chars(ALPHA, n)
    }

    /// Returns a random string of `n` ASCII letters and digits.
    pub fn alphanumeric(&mut self, n: u64) -> Result<String, RandomError> {
        self.chars(ALPHANUMERIC, n)
    }

    /// Returns an opaque token suitable for session identifiers.
    ///
    /// The token encodes 32 bytes taken straight from the entropy source in
    /// standard base64. Raw bytes carry no modulo bias, so the range
    /// sampler is bypassed; the encoding is reversible, and decoding always
    /// yields exactly 32 bytes.
    pub fn token(&mut self) -> Result<String, RandomError> {
        let material = self.bytes(TOKEN_BYTES)?;

        Ok(STANDARD.encode(material))
    }
}
