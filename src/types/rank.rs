//! Flat rank lookup tables.
//!
//! ## Layout
//!
//! Ranks for one side are stored row-major in a single `Vec<u32>`:
//!
//! ```text
//! ranks[(agent - 1) * n + (other - 1)] = position of `other` in `agent`'s list
//! ```
//!
//! Identifiers are already dense in `[1, n]`, so the table is an arena
//! indexed directly by id. Lookup is O(1) with no hashing.

use crate::types::{AgentId, PreferenceList};

/// Immutable `agent -> (opposite agent -> rank)` table for one side.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankTable {
    n: usize,
    ranks: Vec<u32>,
}

impl RankTable {
    /// Build from validated preference lists, `lists[i]` owned by agent `i + 1`.
    pub(crate) fn from_lists(n: usize, lists: &[PreferenceList]) -> Self {
        let mut ranks = vec![0u32; n * n];
        for (row, list) in lists.iter().enumerate() {
            let base = row * n;
            for (rank, &other) in list.as_slice().iter().enumerate() {
                ranks[base + other - 1] = rank as u32;
            }
        }
        Self { n, ranks }
    }

    /// Rank of `other` in `agent`'s list; lower is more preferred.
    ///
    /// Both ids must lie in `[1, n]`.
    #[inline]
    pub fn rank(&self, agent: AgentId, other: AgentId) -> usize {
        self.ranks[(agent - 1) * self.n + (other - 1)] as usize
    }

    /// Whether `agent` strictly prefers `a` over `b`.
    #[inline]
    pub fn prefers(&self, agent: AgentId, a: AgentId, b: AgentId) -> bool {
        self.rank(agent, a) < self.rank(agent, b)
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PreferenceModel;

    #[test]
    fn test_rank_lookup_matches_list_positions() {
        let model = PreferenceModel::build(
            3,
            vec![vec![3, 1, 2], vec![1, 2, 3], vec![2, 3, 1]],
            vec![vec![1, 2, 3], vec![1, 2, 3], vec![1, 2, 3]],
        )
        .unwrap();
        let table = model.hospital_ranks();

        for h in 1..=3 {
            for (rank, &s) in model.hospital_prefs(h).as_slice().iter().enumerate() {
                assert_eq!(table.rank(h, s), rank);
            }
        }
        assert_eq!(table.rank(1, 3), 0);
        assert_eq!(table.rank(1, 2), 2);
    }

    #[test]
    fn test_prefers_is_strict() {
        let model = PreferenceModel::build(
            2,
            vec![vec![1, 2], vec![1, 2]],
            vec![vec![2, 1], vec![1, 2]],
        )
        .unwrap();
        let table = model.student_ranks();

        assert!(table.prefers(1, 2, 1));
        assert!(!table.prefers(1, 1, 2));
        assert!(!table.prefers(1, 2, 2));
    }

    #[test]
    fn test_empty_table() {
        let table = PreferenceModel::empty().student_ranks();
        assert_eq!(table.n(), 0);
    }
}
