//! Bijection check over `[1, n]`.
//!
//! A matching is valid when every hospital id in `[1, n]` appears exactly
//! once as a key and every student id in `[1, n]` appears exactly once as a
//! value. For `n = 0` that means the matching must be empty: any pair at all
//! carries ids outside the empty range and is reported as extra.

use std::fmt;

use crate::types::{AgentId, Matching, Side};

/// Which ids broke the bijection, per side.
///
/// All lists are sorted ascending and free of repeats.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvalidMatching {
    pub n: usize,
    pub hospitals: IdDefects,
    pub students: IdDefects,
}

/// Defects found among one side's ids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdDefects {
    /// In range but never used
    pub missing: Vec<AgentId>,
    /// Outside `[1, n]`
    pub extra: Vec<AgentId>,
    /// In range and used more than once
    pub duplicated: Vec<AgentId>,
}

impl IdDefects {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty() && self.duplicated.is_empty()
    }

    fn collect<I>(n: usize, ids: I) -> Self
    where
        I: Iterator<Item = AgentId>,
    {
        let mut counts = vec![0u32; n + 1];
        let mut extra = Vec::new();
        for id in ids {
            if id == 0 || id > n {
                extra.push(id);
            } else {
                counts[id] += 1;
            }
        }
        extra.sort_unstable();
        extra.dedup();

        let mut missing = Vec::new();
        let mut duplicated = Vec::new();
        for (id, &count) in counts.iter().enumerate().skip(1) {
            match count {
                0 => missing.push(id),
                1 => {}
                _ => duplicated.push(id),
            }
        }

        Self {
            missing,
            extra,
            duplicated,
        }
    }

    fn describe(&self, side: Side, parts: &mut Vec<String>) {
        let mut push = |kind: &str, ids: &[AgentId]| {
            if !ids.is_empty() {
                parts.push(format!("{} {}s {:?}", kind, side, ids));
            }
        };
        push("missing", &self.missing);
        push("extra", &self.extra);
        push("duplicate", &self.duplicated);
    }
}

impl InvalidMatching {
    pub fn is_empty(&self) -> bool {
        self.hospitals.is_empty() && self.students.is_empty()
    }
}

impl fmt::Display for InvalidMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.n == 0 {
            write!(f, "expected empty matching for n=0; ")?;
        }
        let mut parts = Vec::new();
        self.hospitals.describe(Side::Hospital, &mut parts);
        self.students.describe(Side::Student, &mut parts);
        f.write_str(&parts.join("; "))
    }
}

/// Check that `matching` is a total bijection over `[1, n]`.
pub fn check_validity(n: usize, matching: &Matching) -> Result<(), InvalidMatching> {
    let report = InvalidMatching {
        n,
        hospitals: IdDefects::collect(n, matching.iter().map(|p| p.hospital)),
        students: IdDefects::collect(n, matching.iter().map(|p| p.student)),
    };

    if report.is_empty() {
        Ok(())
    } else {
        Err(report)
    }
}
