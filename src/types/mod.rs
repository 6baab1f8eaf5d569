//! Core data types for stable matching
//!
//! ## Types
//!
//! - [`Side`]: Hospital or Student
//! - [`PreferenceList`]: One agent's strict ranking of the other side
//! - [`PreferenceModel`]: Validated, read-only preferences for both sides
//! - [`RankTable`]: Flat O(1) rank lookup derived from a model
//! - [`Matching`]: Hospital -> student pairs
//! - [`MatchReceipt`]: Digest of a matcher run
//!
//! ## Identifiers
//!
//! Agents are identified by dense 1-indexed integers in `[1, n]`.

mod agent;
mod matching;
mod preference;
mod rank;
mod receipt;

// Re-export all types at module level
pub use agent::{AgentId, Side};
pub use matching::{Matching, Pair};
pub use preference::{PreferenceList, PreferenceModel};
pub use rank::RankTable;
pub use receipt::MatchReceipt;
