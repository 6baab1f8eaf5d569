//! Hospital-proposing Gale-Shapley.
//!
//! ## Round Structure
//!
//! Each round the lowest-numbered hospital that is unmatched and still has
//! unproposed students proposes to the next student on its list:
//!
//! - a free student accepts tentatively
//! - an engaged student switches only if the proposer ranks strictly better,
//!   freeing the previous hospital
//! - otherwise the student rejects and nothing changes
//!
//! Free hospitals sit in a min-heap so the lowest eligible id is found in
//! O(log n) instead of a linear scan. A rejected hospital stays at the top
//! of the heap and proposes again next round, which is exactly the
//! "first eligible in ascending order" rule.
//!
//! ## Bounds
//!
//! `next_index[h]` strictly increases with each proposal by `h` and never
//! exceeds `n`, so a run makes at most `n^2` proposals.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::types::{AgentId, MatchReceipt, Matching, PreferenceModel, RankTable};

/// Result of one matcher run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Perfect matching sorted by hospital id
    pub matching: Matching,

    /// Total proposals made
    pub proposals: u64,
}

impl MatchOutcome {
    /// Receipt fingerprinting this outcome
    pub fn receipt(&self) -> MatchReceipt {
        MatchReceipt::for_matching(self.matching.len(), self.proposals, &self.matching)
    }
}

/// Stateless entry point for running the algorithm.
///
/// Each call to [`run`](Matcher::run) owns its working state for the
/// duration of the run, so one `Matcher` can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Compute the hospital-optimal stable matching for `model`.
    ///
    /// Deterministic: the same model always yields the same matching and
    /// the same proposal count.
    pub fn run(&self, model: &PreferenceModel) -> MatchOutcome {
        let mut state = RunState::new(model);
        while let Some(h) = state.next_proposer() {
            state.propose(h);
        }
        let outcome = state.finish();

        debug!(
            n = model.n(),
            proposals = outcome.proposals,
            "gale-shapley run complete"
        );
        outcome
    }
}

/// Shorthand for `Matcher::new().run(model)`.
pub fn gale_shapley(model: &PreferenceModel) -> MatchOutcome {
    Matcher::new().run(model)
}

// ============================================================================
// Run state
// ============================================================================

/// Working state of a single run, indexed by `id - 1`.
struct RunState<'a> {
    model: &'a PreferenceModel,
    student_rank: RankTable,
    hospital_match: Vec<Option<AgentId>>,
    student_match: Vec<Option<AgentId>>,
    next_index: Vec<usize>,
    free: BinaryHeap<Reverse<AgentId>>,
    proposals: u64,
}

impl<'a> RunState<'a> {
    fn new(model: &'a PreferenceModel) -> Self {
        let n = model.n();
        Self {
            model,
            student_rank: model.student_ranks(),
            hospital_match: vec![None; n],
            student_match: vec![None; n],
            next_index: vec![0; n],
            free: (1..=n).map(Reverse).collect(),
            proposals: 0,
        }
    }

    /// Lowest-numbered unmatched hospital with students left to propose to.
    fn next_proposer(&mut self) -> Option<AgentId> {
        let n = self.model.n();
        while let Some(&Reverse(h)) = self.free.peek() {
            if self.next_index[h - 1] < n {
                return Some(h);
            }
            // Exhausted; cannot happen with complete lists but never loop on it.
            self.free.pop();
        }
        None
    }

    fn propose(&mut self, h: AgentId) {
        let idx = self.next_index[h - 1];
        let Some(s) = self.model.hospital_prefs(h).at(idx) else {
            return;
        };
        self.next_index[h - 1] = idx + 1;
        self.proposals += 1;

        match self.student_match[s - 1] {
            None => self.engage(h, s),
            Some(current) => {
                if self.student_rank.prefers(s, h, current) {
                    self.engage(h, s);
                    self.hospital_match[current - 1] = None;
                    self.free.push(Reverse(current));
                }
                // Otherwise rejected: h stays free and at the top of the heap.
            }
        }
    }

    /// `h` must be the current top of the free heap.
    fn engage(&mut self, h: AgentId, s: AgentId) {
        self.free.pop();
        self.hospital_match[h - 1] = Some(s);
        self.student_match[s - 1] = Some(h);
    }

    fn finish(self) -> MatchOutcome {
        let mut matching = Matching::with_capacity(self.hospital_match.len());
        for (i, student) in self.hospital_match.iter().enumerate() {
            if let Some(s) = student {
                matching.push(i + 1, *s);
            }
        }
        MatchOutcome {
            matching,
            proposals: self.proposals,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
