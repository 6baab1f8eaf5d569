//! Exhaustive blocking-pair search.

use std::fmt;

use crate::types::{AgentId, Matching, RankTable};

/// A hospital and student who both strictly prefer each other over their
/// current partners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockingPair {
    pub hospital: AgentId,
    pub student: AgentId,
}

impl fmt::Display for BlockingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blocking pair ({}, {})", self.hospital, self.student)
    }
}

/// First blocking pair in hospital-ascending, then student-ascending order.
///
/// `matching` must already be a valid bijection over `[1, n]`; the rank
/// tables must come from the same model. Runs in O(n^2).
pub fn find_blocking_pair(
    n: usize,
    matching: &Matching,
    hospital_rank: &RankTable,
    student_rank: &RankTable,
) -> Option<BlockingPair> {
    let mut hospital_partner = vec![0; n];
    let mut student_partner = vec![0; n];
    for pair in matching {
        hospital_partner[pair.hospital - 1] = pair.student;
        student_partner[pair.student - 1] = pair.hospital;
    }

    for h in 1..=n {
        let current = hospital_partner[h - 1];
        let current_rank = hospital_rank.rank(h, current);

        for s in 1..=n {
            if s == current || hospital_rank.rank(h, s) >= current_rank {
                continue;
            }
            if student_rank.prefers(s, h, student_partner[s - 1]) {
                return Some(BlockingPair {
                    hospital: h,
                    student: s,
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PreferenceModel;

    fn textbook() -> PreferenceModel {
        PreferenceModel::build(
            2,
            vec![vec![2, 1], vec![1, 2]],
            vec![vec![1, 2], vec![1, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_blocking_pair_found() {
        let model = textbook();
        let matching = Matching::from_pairs([(1, 1), (2, 2)]);
        let found = find_blocking_pair(
            2,
            &matching,
            &model.hospital_ranks(),
            &model.student_ranks(),
        );
        assert_eq!(found, Some(BlockingPair { hospital: 1, student: 2 }));
    }

    #[test]
    fn test_stable_matching_has_no_blocking_pair() {
        let model = textbook();
        let matching = Matching::from_pairs([(1, 2), (2, 1)]);
        let found = find_blocking_pair(
            2,
            &matching,
            &model.hospital_ranks(),
            &model.student_ranks(),
        );
        assert_eq!(found, None);
    }

    #[test]
    fn test_first_pair_in_enumeration_order() {
        // Everyone ranks the other side 1..3 and the matching is reversed,
        // so several pairs block; (1, 1) comes first.
        let lists = vec![vec![1, 2, 3]; 3];
        let model = PreferenceModel::build(3, lists.clone(), lists).unwrap();
        let matching = Matching::from_pairs([(1, 3), (2, 2), (3, 1)]);
        let found = find_blocking_pair(
            3,
            &matching,
            &model.hospital_ranks(),
            &model.student_ranks(),
        );
        assert_eq!(found, Some(BlockingPair { hospital: 1, student: 1 }));
    }

    #[test]
    fn test_display() {
        let pair = BlockingPair { hospital: 1, student: 2 };
        assert_eq!(pair.to_string(), "blocking pair (1, 2)");
    }
}
