//! Flat text formats for preferences and matchings.
//!
//! ## Preferences
//!
//! ```text
//! 3           <- n
//! 1 2 3       <- hospital 1
//! 2 3 1       <- hospital 2
//! 3 1 2       <- hospital 3
//! 2 1 3       <- student 1
//! 1 2 3       <- student 2
//! 3 2 1       <- student 3
//! ```
//!
//! Blank lines are ignored everywhere. For `n > 0` exactly `2n + 1`
//! non-blank lines are required; for `n = 0` anything after the first line
//! is ignored. Reported line numbers refer to the raw input, blank lines
//! included.
//!
//! ## Matchings
//!
//! One `hospital student` pair per non-blank line. Written hospital-ascending.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{MatchError, Result};
use crate::types::{AgentId, Matching, PreferenceModel, Side};

/// Non-blank lines paired with their 1-based line numbers.
fn content_lines(text: &str) -> Vec<(usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect()
}

fn parse_ids(line_no: usize, line: &str) -> Result<Vec<AgentId>> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<AgentId>().map_err(|_| MatchError::MalformedInput {
                line: line_no,
                reason: format!("token '{}' is not a non-negative integer", token),
            })
        })
        .collect()
}

// ============================================================================
// Preferences
// ============================================================================

/// Parse a preferences document into a validated model.
pub fn parse_preferences(text: &str) -> Result<PreferenceModel> {
    let lines = content_lines(text);
    let Some(&(first_no, first)) = lines.first() else {
        return Err(MatchError::MalformedInput {
            line: 1,
            reason: "input is empty".to_string(),
        });
    };

    let n: usize = first.parse().map_err(|_| MatchError::MalformedInput {
        line: first_no,
        reason: format!("'{}' is not a valid problem size", first),
    })?;

    if n == 0 {
        return Ok(PreferenceModel::empty());
    }

    let Some(expected) = n.checked_mul(2).and_then(|v| v.checked_add(1)) else {
        return Err(MatchError::MalformedInput {
            line: first_no,
            reason: format!("problem size {} is too large", n),
        });
    };
    if lines.len() != expected {
        let line = lines.last().map(|&(no, _)| no).unwrap_or(first_no);
        return Err(MatchError::MalformedInput {
            line,
            reason: format!("expected {} non-blank lines, got {}", expected, lines.len()),
        });
    }

    // n < lines.len() from here on, so these allocations are bounded by the input.
    let mut hospital_lists = Vec::with_capacity(n);
    let mut student_lists = Vec::with_capacity(n);
    for (i, &(line_no, line)) in lines[1..].iter().enumerate() {
        let ids = parse_ids(line_no, line)?;
        if i < n {
            hospital_lists.push(ids);
        } else {
            student_lists.push(ids);
        }
    }

    PreferenceModel::build(n, hospital_lists, student_lists)
}

/// Render a model in the preferences format.
pub fn format_preferences(model: &PreferenceModel) -> String {
    let mut out = format!("{}\n", model.n());
    for list in model
        .side(Side::Hospital)
        .iter()
        .chain(model.side(Side::Student))
    {
        let row: Vec<String> = list.as_slice().iter().map(|id| id.to_string()).collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

pub fn read_preferences<P: AsRef<Path>>(path: P) -> Result<PreferenceModel> {
    let text = fs::read_to_string(path)?;
    parse_preferences(&text)
}

// ============================================================================
// Matchings
// ============================================================================

/// Parse `hospital student` lines. Ids are not range-checked here; that is
/// the verifier's job.
pub fn parse_matching(text: &str) -> Result<Matching> {
    let mut matching = Matching::new();
    for (line_no, line) in content_lines(text) {
        let ids = parse_ids(line_no, line)?;
        if ids.len() != 2 {
            return Err(MatchError::MalformedInput {
                line: line_no,
                reason: format!("expected 'hospital student', got '{}'", line),
            });
        }
        matching.push(ids[0], ids[1]);
    }
    Ok(matching)
}

/// Write `matching` one pair per line, hospital-ascending.
pub fn write_matching<W: Write>(matching: &Matching, mut out: W) -> io::Result<()> {
    for pair in matching.sorted().iter() {
        writeln!(out, "{}", pair)?;
    }
    out.flush()
}

pub fn read_matching<P: AsRef<Path>>(path: P) -> Result<Matching> {
    let text = fs::read_to_string(path)?;
    parse_matching(&text)
}

pub fn write_matching_file<P: AsRef<Path>>(matching: &Matching, path: P) -> Result<()> {
    let file = fs::File::create(path)?;
    write_matching(matching, io::BufWriter::new(file))?;
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "2\n2 1\n1 2\n\n1 2\n1 2\n";

    #[test]
    fn test_parse_preferences() {
        let model = parse_preferences(SAMPLE).unwrap();
        assert_eq!(model.n(), 2);
        assert_eq!(model.hospital_prefs(1).as_slice(), &[2, 1]);
        assert_eq!(model.student_prefs(2).as_slice(), &[1, 2]);
    }

    #[test]
    fn test_format_preferences_reparses() {
        let model = parse_preferences(SAMPLE).unwrap();
        let text = format_preferences(&model);
        assert_eq!(text, "2\n2 1\n1 2\n1 2\n1 2\n");
        assert_eq!(parse_preferences(&text).unwrap(), model);
    }

    #[test]
    fn test_zero_ignores_trailing_lines() {
        let model = parse_preferences("0\n1 2\n").unwrap();
        assert!(model.is_empty());
    }

    #[test]
    fn test_empty_input_is_malformed() {
        let err = parse_preferences("\n  \n").unwrap_err();
        assert!(matches!(err, MatchError::MalformedInput { .. }));
    }

    #[test]
    fn test_bad_size_line() {
        for text in ["-1\n", "three\n"] {
            let err = parse_preferences(text).unwrap_err();
            assert!(matches!(err, MatchError::MalformedInput { line: 1, .. }));
        }
    }

    #[test]
    fn test_wrong_line_count() {
        let err = parse_preferences("2\n1 2\n2 1\n1 2\n").unwrap_err();
        match err {
            MatchError::MalformedInput { reason, .. } => {
                assert!(reason.contains("expected 5 non-blank lines, got 4"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_oversized_problem_size_is_malformed() {
        for text in ["18446744073709551615\n", "9223372036854775808\n"] {
            let err = parse_preferences(text).unwrap_err();
            assert!(
                matches!(err, MatchError::MalformedInput { line: 1, .. }),
                "unexpected error for {text:?}: {err:?}"
            );
        }

        // Representable line count, far more lines than supplied.
        let err = parse_preferences("4611686018427387903\n1\n").unwrap_err();
        assert!(matches!(err, MatchError::MalformedInput { .. }));
    }

    #[test]
    fn test_non_integer_token_names_raw_line() {
        // Blank line 2 still counts toward the reported line number.
        let err = parse_preferences("2\n\n1 x\n2 1\n1 2\n1 2\n").unwrap_err();
        assert!(matches!(err, MatchError::MalformedInput { line: 3, .. }));
    }

    #[test]
    fn test_permutation_errors_surface() {
        let err = parse_preferences("3\n1 2 2\n1 2 3\n1 2 3\n1 2 3\n1 2 3\n1 2 3\n").unwrap_err();
        assert!(matches!(
            err,
            MatchError::InvalidPermutation { side: Side::Hospital, agent: 1, .. }
        ));

        let err = parse_preferences("3\n1 2 3\n1 2\n1 2 3\n1 2 3\n1 2 3\n1 2 3\n").unwrap_err();
        assert!(matches!(err, MatchError::SizeMismatch { side: Side::Hospital, .. }));
    }

    #[test]
    fn test_parse_matching() {
        let matching = parse_matching("1 2\n\n2 1\n").unwrap();
        assert_eq!(matching, Matching::from_pairs([(1, 2), (2, 1)]));
    }

    #[test]
    fn test_parse_matching_rejects_bad_lines() {
        let err = parse_matching("1 2\n3\n").unwrap_err();
        assert!(matches!(err, MatchError::MalformedInput { line: 2, .. }));

        let err = parse_matching("1 a\n").unwrap_err();
        assert!(matches!(err, MatchError::MalformedInput { line: 1, .. }));
    }

    #[test]
    fn test_write_matching_sorted() {
        let matching = Matching::from_pairs([(2, 1), (1, 2)]);
        let mut buf = Vec::new();
        write_matching(&matching, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 2\n2 1\n");
    }
}
