//! Match receipt summarizing one matcher run.
//!
//! The receipt carries a SHA-256 digest of the produced matching so that
//! two runs (or two machines) can be compared without shipping the whole
//! assignment around.

use ssz_rs::prelude::*;
use sha2::{Digest, Sha256};

use crate::error::MatchError;
use crate::types::Matching;

/// Execution receipt for a single Gale-Shapley run.
///
/// ## Digest
///
/// The digest is SHA-256 over the matching sorted by hospital, each pair
/// encoded as two little-endian `u64`s (hospital, then student). The same
/// matching always yields the same digest regardless of pair order.
///
/// ## Example
///
/// ```
/// use stable_match::types::{MatchReceipt, Matching};
///
/// let matching = Matching::from_pairs([(1, 2), (2, 1)]);
/// let receipt = MatchReceipt::for_matching(2, 3, &matching);
///
/// assert_eq!(receipt.proposals, 3);
/// assert_eq!(receipt.digest_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchReceipt {
    /// Problem size
    pub n: u64,

    /// Number of proposals made by the matcher
    pub proposals: u64,

    /// SHA-256 digest of the sorted matching
    pub digest: [u8; 32],
}

impl MatchReceipt {
    pub fn new(n: u64, proposals: u64, digest: [u8; 32]) -> Self {
        Self {
            n,
            proposals,
            digest,
        }
    }

    /// Create a receipt with the digest computed from `matching`
    pub fn for_matching(n: usize, proposals: u64, matching: &Matching) -> Self {
        Self::new(n as u64, proposals, Self::compute_digest(matching))
    }

    /// SHA-256 of the matching in canonical (hospital-sorted) order
    pub fn compute_digest(matching: &Matching) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for pair in matching.sorted().iter() {
            hasher.update((pair.hospital as u64).to_le_bytes());
            hasher.update((pair.student as u64).to_le_bytes());
        }
        let result = hasher.finalize();

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&result);
        digest
    }

    /// Get the digest as a hex string
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// Whether `matching` hashes to this receipt's digest
    pub fn matches(&self, matching: &Matching) -> bool {
        self.digest == Self::compute_digest(matching)
    }

    /// Deterministic SSZ encoding of the receipt
    pub fn encode(&self) -> crate::Result<Vec<u8>> {
        ssz_rs::serialize(self).map_err(|e| MatchError::Encoding(format!("{e:?}")))
    }

    /// Decode a receipt previously produced by [`encode`](Self::encode)
    pub fn decode(bytes: &[u8]) -> crate::Result<Self> {
        ssz_rs::deserialize(bytes).map_err(|e| MatchError::Encoding(format!("{e:?}")))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
