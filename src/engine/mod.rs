//! Matching engine: hospital-proposing Gale-Shapley.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same preferences always produce the same matching
//!    and the same proposal count
//! 2. **Owned Run State**: Working arrays live for exactly one run
//! 3. **Synchronous Execution**: No I/O or logging inside the proposal loop
//! 4. **Ascending Tie-Break**: The lowest free hospital id proposes next
//!
//! ## Guarantees
//!
//! - Every hospital and student is matched (n > 0)
//! - The result is stable and hospital-optimal
//! - At most `n^2` proposals are made
//!
//! ## Example
//!
//! ```
//! use stable_match::engine::Matcher;
//! use stable_match::PreferenceModel;
//!
//! let model = PreferenceModel::build(
//!     2,
//!     vec![vec![1, 2], vec![1, 2]],
//!     vec![vec![2, 1], vec![1, 2]],
//! ).unwrap();
//!
//! let outcome = Matcher::new().run(&model);
//! assert_eq!(outcome.matching.student_of(2), Some(1));
//! assert_eq!(outcome.proposals, 3);
//! ```

pub mod gale_shapley;

pub use gale_shapley::{gale_shapley, MatchOutcome, Matcher};
