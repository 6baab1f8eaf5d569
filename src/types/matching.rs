//! Hospital -> student assignments.
//!
//! A [`Matching`] is stored as a plain list of pairs rather than a map so
//! that externally supplied matchings keep any duplicated or foreign ids
//! intact for the verifier to diagnose.

use std::fmt;

use crate::types::AgentId;

/// One `(hospital, student)` assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pair {
    pub hospital: AgentId,
    pub student: AgentId,
}

impl Pair {
    pub fn new(hospital: AgentId, student: AgentId) -> Self {
        Self { hospital, student }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.hospital, self.student)
    }
}

/// A set of hospital -> student assignments.
///
/// Matchings produced by the matcher are perfect and sorted by hospital id.
/// Matchings read from elsewhere are arbitrary until verified.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matching {
    pairs: Vec<Pair>,
}

impl Matching {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    /// Build from `(hospital, student)` tuples, preserving order and duplicates.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (AgentId, AgentId)>,
    {
        pairs.into_iter().collect()
    }

    pub fn push(&mut self, hospital: AgentId, student: AgentId) {
        self.pairs.push(Pair::new(hospital, student));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[inline]
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.iter()
    }

    /// Student assigned to `hospital`, first occurrence if duplicated.
    pub fn student_of(&self, hospital: AgentId) -> Option<AgentId> {
        self.pairs
            .iter()
            .find(|p| p.hospital == hospital)
            .map(|p| p.student)
    }

    /// Copy of this matching ordered by hospital, then student.
    pub fn sorted(&self) -> Self {
        let mut pairs = self.pairs.clone();
        pairs.sort_unstable();
        Self { pairs }
    }
}

impl FromIterator<(AgentId, AgentId)> for Matching {
    fn from_iter<T: IntoIterator<Item = (AgentId, AgentId)>>(iter: T) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(h, s)| Pair::new(h, s))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Matching {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
