//! Agent identifiers and the two sides of the market.

use std::fmt;

/// Agent identifier, 1-indexed and dense in `[1, n]`.
///
/// Hospital and student identifiers share the numeric range but are
/// distinct namespaces.
pub type AgentId = usize;

// ============================================================================
// Side enum
// ============================================================================

/// Which side of the market an agent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Proposing side
    #[default]
    Hospital,
    /// Receiving side
    Student,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Hospital => Side::Student,
            Side::Student => Side::Hospital,
        }
    }

    /// Lowercase label used in diagnostics
    pub fn label(self) -> &'static str {
        match self {
            Side::Hospital => "hospital",
            Side::Student => "student",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Hospital.opposite(), Side::Student);
        assert_eq!(Side::Student.opposite(), Side::Hospital);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Hospital.to_string(), "hospital");
        assert_eq!(Side::Student.to_string(), "student");
    }
}
