//! # Stable Match
//!
//! Hospital-proposing Gale-Shapley stable matching, plus an independent
//! verifier for any proposed matching.
//!
//! ## Architecture
//!
//! - **Types**: Preference model, rank tables, matchings, receipts
//! - **Engine**: Deterministic Gale-Shapley matcher
//! - **Verifier**: Bijection check, then exhaustive blocking-pair search
//! - **Format / Generator / Harness**: text I/O, seeded instances, timing
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same preferences always produce the same matching,
//!    proposal count and receipt digest
//! 2. **Validated Input**: A `PreferenceModel` only exists if every list is
//!    a permutation of `[1, n]`
//! 3. **Flat Rank Tables**: O(1) preference comparisons, no hashing
//! 4. **Synchronous Execution**: No I/O in the matcher or verifier
//!
//! ## Example
//!
//! ```
//! use stable_match::{gale_shapley, verify, PreferenceModel};
//!
//! let model = PreferenceModel::build(
//!     3,
//!     vec![vec![1, 2, 3], vec![1, 3, 2], vec![2, 1, 3]],
//!     vec![vec![2, 1, 3], vec![1, 2, 3], vec![3, 2, 1]],
//! ).unwrap();
//!
//! let outcome = gale_shapley(&model);
//! assert!(outcome.proposals <= 9);
//! assert!(verify(&model, &outcome.matching).is_stable());
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: PreferenceModel, RankTable, Matching, MatchReceipt
pub mod types;

/// Matching engine: Gale-Shapley
pub mod engine;

/// Verifier: validity and stability
pub mod verifier;

/// Error taxonomy
pub mod error;

/// Text formats for preferences and matchings
pub mod format;

/// Seeded random instances
pub mod generator;

/// Configuration loading
pub mod config;

/// Timing sweep across problem sizes
pub mod harness;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{gale_shapley, MatchOutcome, Matcher};
pub use error::{MatchError, Result};
pub use types::{
    AgentId, MatchReceipt, Matching, Pair, PreferenceList, PreferenceModel, RankTable, Side,
};
pub use verifier::{verify, BlockingPair, InvalidMatching, VerificationResult, Verifier};
