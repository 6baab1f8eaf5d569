//! Independent validity and stability verification.
//!
//! ## Checks
//!
//! 1. **Validity**: the matching is a total bijection over `[1, n]`
//! 2. **Stability**: no blocking pair exists (only checked when valid)
//!
//! The verifier never mutates its inputs. A [`Verifier`] holds the rank
//! tables for one model and can check any number of matchings, from any
//! number of threads, against it.
//!
//! ## Example
//!
//! ```
//! use stable_match::verifier::{verify, VerificationResult};
//! use stable_match::{Matching, PreferenceModel};
//!
//! let model = PreferenceModel::build(
//!     2,
//!     vec![vec![2, 1], vec![1, 2]],
//!     vec![vec![1, 2], vec![1, 2]],
//! ).unwrap();
//!
//! let result = verify(&model, &Matching::from_pairs([(1, 1), (2, 2)]));
//! assert_eq!(result.to_string(), "UNSTABLE: blocking pair (1, 2)");
//!
//! let result = verify(&model, &Matching::from_pairs([(1, 2), (2, 1)]));
//! assert!(result.is_stable());
//! ```

pub mod stability;
pub mod validity;

use std::fmt;

use tracing::debug;

use crate::error::{MatchError, Result};
use crate::types::{Matching, PreferenceModel, RankTable};

pub use stability::{find_blocking_pair, BlockingPair};
pub use validity::{check_validity, IdDefects, InvalidMatching};

/// Tri-state verdict for a candidate matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    /// Bijection with no blocking pair
    Stable,
    /// Not a bijection over `[1, n]`
    Invalid(InvalidMatching),
    /// Bijection, but the first blocking pair found is attached
    Unstable(BlockingPair),
}

impl VerificationResult {
    #[inline]
    pub fn is_stable(&self) -> bool {
        matches!(self, VerificationResult::Stable)
    }

    /// True for both stable and unstable bijections
    #[inline]
    pub fn is_valid(&self) -> bool {
        !matches!(self, VerificationResult::Invalid(_))
    }

    /// Convert into the crate error taxonomy.
    pub fn into_result(self) -> Result<()> {
        match self {
            VerificationResult::Stable => Ok(()),
            VerificationResult::Invalid(reason) => Err(MatchError::InvalidMatching(reason)),
            VerificationResult::Unstable(pair) => Err(MatchError::UnstableMatching(pair)),
        }
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationResult::Stable => f.write_str("VALID STABLE"),
            VerificationResult::Invalid(reason) => write!(f, "INVALID: {}", reason),
            VerificationResult::Unstable(pair) => write!(f, "UNSTABLE: {}", pair),
        }
    }
}

/// Verifier bound to one preference model.
#[derive(Debug, Clone)]
pub struct Verifier<'a> {
    model: &'a PreferenceModel,
    hospital_rank: RankTable,
    student_rank: RankTable,
}

impl<'a> Verifier<'a> {
    /// Precompute rank tables for `model`
    pub fn new(model: &'a PreferenceModel) -> Self {
        Self {
            model,
            hospital_rank: model.hospital_ranks(),
            student_rank: model.student_ranks(),
        }
    }

    /// Check `matching` for validity, then stability.
    pub fn verify(&self, matching: &Matching) -> VerificationResult {
        let n = self.model.n();

        if let Err(reason) = check_validity(n, matching) {
            debug!(n, %reason, "matching is not a bijection");
            return VerificationResult::Invalid(reason);
        }

        match find_blocking_pair(n, matching, &self.hospital_rank, &self.student_rank) {
            Some(pair) => {
                debug!(n, hospital = pair.hospital, student = pair.student, "blocking pair found");
                VerificationResult::Unstable(pair)
            }
            None => {
                debug!(n, "matching is stable");
                VerificationResult::Stable
            }
        }
    }
}

/// One-shot verification; builds rank tables for this call only.
pub fn verify(model: &PreferenceModel, matching: &Matching) -> VerificationResult {
    Verifier::new(model).verify(matching)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook() -> PreferenceModel {
        PreferenceModel::build(
            2,
            vec![vec![2, 1], vec![1, 2]],
            vec![vec![1, 2], vec![1, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_unstable_matching_reported() {
        let result = verify(&textbook(), &Matching::from_pairs([(1, 1), (2, 2)]));
        assert_eq!(
            result,
            VerificationResult::Unstable(BlockingPair { hospital: 1, student: 2 })
        );
        assert!(result.is_valid());
        assert!(!result.is_stable());
    }

    #[test]
    fn test_stable_matching_accepted() {
        let result = verify(&textbook(), &Matching::from_pairs([(2, 1), (1, 2)]));
        assert_eq!(result, VerificationResult::Stable);
        assert_eq!(result.to_string(), "VALID STABLE");
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_invalid_skips_stability() {
        let result = verify(&textbook(), &Matching::from_pairs([(1, 1)]));
        assert!(!result.is_valid());
        assert!(result.to_string().starts_with("INVALID: "));

        match result.into_result() {
            Err(MatchError::InvalidMatching(reason)) => {
                assert_eq!(reason.hospitals.missing, vec![2]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_model_accepts_only_empty_matching() {
        let model = PreferenceModel::empty();
        assert!(verify(&model, &Matching::new()).is_stable());
        assert!(!verify(&model, &Matching::from_pairs([(1, 1)])).is_valid());
    }

    #[test]
    fn test_unstable_into_error() {
        let err = verify(&textbook(), &Matching::from_pairs([(1, 1), (2, 2)]))
            .into_result()
            .unwrap_err();
        assert!(matches!(
            err,
            MatchError::UnstableMatching(BlockingPair { hospital: 1, student: 2 })
        ));
    }

    #[test]
    fn test_verifier_reusable_across_matchings() {
        let model = textbook();
        let verifier = Verifier::new(&model);

        let candidates = [
            Matching::from_pairs([(1, 1), (2, 2)]),
            Matching::from_pairs([(1, 2), (2, 1)]),
            Matching::from_pairs([(1, 2), (2, 2)]),
        ];
        let verdicts: Vec<_> = candidates.iter().map(|m| verifier.verify(m)).collect();

        assert!(!verdicts[0].is_stable() && verdicts[0].is_valid());
        assert!(verdicts[1].is_stable());
        assert!(!verdicts[2].is_valid());
    }
}
