//! Preference lists and the immutable two-sided preference model.
//!
//! ## Invariants
//!
//! Every agent's list is a permutation of exactly `[1, n]` over the
//! opposite side: no omissions, no repeats, no out-of-range values.
//! Position 0 is the most preferred agent.
//!
//! A [`PreferenceModel`] is validated once in [`PreferenceModel::build`]
//! and is read-only afterwards, so the matcher and verifier can share it
//! by reference.

use crate::error::{MatchError, Result};
use crate::types::{AgentId, RankTable, Side};

// ============================================================================
// PreferenceList
// ============================================================================

/// One agent's strict ranking of the opposite side.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreferenceList {
    ranked: Vec<AgentId>,
}

impl PreferenceList {
    /// Validate `ranked` as a permutation of `[1, n]`.
    ///
    /// `side` and `agent` identify the owner of the list for diagnostics.
    pub fn new(side: Side, agent: AgentId, n: usize, ranked: Vec<AgentId>) -> Result<Self> {
        if ranked.len() != n {
            return Err(MatchError::SizeMismatch {
                side,
                n,
                reason: format!(
                    "{} {} lists {} entries, expected {}",
                    side,
                    agent,
                    ranked.len(),
                    n
                ),
            });
        }

        let other = side.opposite();
        let mut seen = vec![false; n + 1];
        for &id in &ranked {
            if id == 0 || id > n {
                return Err(MatchError::InvalidPermutation {
                    side,
                    agent,
                    n,
                    reason: format!("{} id {} is out of range", other, id),
                });
            }
            if seen[id] {
                return Err(MatchError::InvalidPermutation {
                    side,
                    agent,
                    n,
                    reason: format!("{} id {} appears more than once", other, id),
                });
            }
            seen[id] = true;
        }

        Ok(Self { ranked })
    }

    /// Number of ranked agents
    #[inline]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Agent at preference position `rank` (0 = most preferred)
    #[inline]
    pub fn at(&self, rank: usize) -> Option<AgentId> {
        self.ranked.get(rank).copied()
    }

    /// Ranked agents, most preferred first
    #[inline]
    pub fn as_slice(&self) -> &[AgentId] {
        &self.ranked
    }
}

// ============================================================================
// PreferenceModel
// ============================================================================

/// Validated preferences for `n` hospitals and `n` students.
///
/// ## Example
///
/// ```
/// use stable_match::PreferenceModel;
///
/// let model = PreferenceModel::build(
///     2,
///     vec![vec![2, 1], vec![1, 2]],
///     vec![vec![1, 2], vec![1, 2]],
/// ).unwrap();
///
/// assert_eq!(model.n(), 2);
/// assert_eq!(model.hospital_prefs(1).as_slice(), &[2, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreferenceModel {
    n: usize,
    hospitals: Vec<PreferenceList>,
    students: Vec<PreferenceList>,
}

impl PreferenceModel {
    /// Build a model from raw 1-indexed lists.
    ///
    /// `hospital_lists[i]` belongs to hospital `i + 1`, likewise for students.
    ///
    /// # Errors
    ///
    /// * [`MatchError::SizeMismatch`] if either side does not supply exactly
    ///   `n` lists, or any list does not have exactly `n` entries
    /// * [`MatchError::InvalidPermutation`] if a list is not a permutation
    ///   of `[1, n]`
    pub fn build(
        n: usize,
        hospital_lists: Vec<Vec<AgentId>>,
        student_lists: Vec<Vec<AgentId>>,
    ) -> Result<Self> {
        let hospitals = Self::build_side(Side::Hospital, n, hospital_lists)?;
        let students = Self::build_side(Side::Student, n, student_lists)?;
        Ok(Self {
            n,
            hospitals,
            students,
        })
    }

    /// The empty `n = 0` instance
    pub fn empty() -> Self {
        Self::default()
    }

    fn build_side(side: Side, n: usize, lists: Vec<Vec<AgentId>>) -> Result<Vec<PreferenceList>> {
        if lists.len() != n {
            return Err(MatchError::SizeMismatch {
                side,
                n,
                reason: format!("expected {} lists, got {}", n, lists.len()),
            });
        }

        lists
            .into_iter()
            .enumerate()
            .map(|(i, ranked)| PreferenceList::new(side, i + 1, n, ranked))
            .collect()
    }

    /// Problem size (agents per side)
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Preference list of hospital `h`.
    ///
    /// # Panics
    ///
    /// Panics if `h` is not in `[1, n]`.
    #[inline]
    pub fn hospital_prefs(&self, h: AgentId) -> &PreferenceList {
        &self.hospitals[h - 1]
    }

    /// Preference list of student `s`.
    ///
    /// # Panics
    ///
    /// Panics if `s` is not in `[1, n]`.
    #[inline]
    pub fn student_prefs(&self, s: AgentId) -> &PreferenceList {
        &self.students[s - 1]
    }

    /// Preference lists for one side, indexed by `id - 1`
    pub fn side(&self, side: Side) -> &[PreferenceList] {
        match side {
            Side::Hospital => &self.hospitals,
            Side::Student => &self.students,
        }
    }

    /// Rank table for hospitals: `rank(h, s)`
    pub fn hospital_ranks(&self) -> RankTable {
        RankTable::from_lists(self.n, &self.hospitals)
    }

    /// Rank table for students: `rank(s, h)`
    pub fn student_ranks(&self) -> RankTable {
        RankTable::from_lists(self.n, &self.students)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
