//! Error taxonomy for preference construction, parsing and verification.
//!
//! The matcher itself is infallible once a [`PreferenceModel`](crate::PreferenceModel)
//! exists, so every variant here originates either in input construction
//! or in verification of a supplied matching.

use thiserror::Error;

use crate::types::Side;
use crate::verifier::{BlockingPair, InvalidMatching};

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatchError>;

#[derive(Debug, Error)]
pub enum MatchError {
    /// Wrong line count, non-integer tokens, empty input.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// A preference list omits, repeats or goes outside the `[1, n]` range.
    #[error("{side} {agent} preference list is not a permutation of 1..{n}: {reason}")]
    InvalidPermutation {
        side: Side,
        agent: usize,
        n: usize,
        reason: String,
    },

    /// Declared `n` disagrees with a side's list count or a list's length.
    #[error("{side} preferences do not match n = {n}: {reason}")]
    SizeMismatch {
        side: Side,
        n: usize,
        reason: String,
    },

    /// The matching is not a bijection over `[1, n]`.
    #[error("invalid matching: {0}")]
    InvalidMatching(InvalidMatching),

    /// The matching is a bijection but admits a blocking pair.
    #[error("unstable matching: {0}")]
    UnstableMatching(BlockingPair),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Receipt encoding failed.
    #[error("encoding error: {0}")]
    Encoding(String),
}
