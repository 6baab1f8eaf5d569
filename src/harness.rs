//! Scalability harness: times the matcher and verifier across problem sizes.
//!
//! For every configured size the harness generates a seeded instance, runs
//! the matcher `runs` times and the verifier `runs` times on the matcher's
//! output, and records the mean wall time of each. Any matcher output that
//! fails verification aborts the sweep.
//!
//! ## Output
//!
//! `scalability_data.csv` with columns
//! `n,matcher_time_ms,verifier_time_ms,proposals,digest`. Times are exact
//! fixed-point milliseconds with three decimals (microsecond resolution).

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rust_decimal::Decimal;
use tracing::info;

use crate::config::ScalabilitySettings;
use crate::engine::{MatchOutcome, Matcher};
use crate::error::Result;
use crate::generator::random_instance;
use crate::types::MatchReceipt;
use crate::verifier::Verifier;

/// CSV file name inside the output directory
pub const CSV_FILE: &str = "scalability_data.csv";

/// Timing for one problem size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub n: usize,
    pub matcher_time: Duration,
    pub verifier_time: Duration,
    pub receipt: MatchReceipt,
}

impl Sample {
    pub fn matcher_ms(&self) -> Decimal {
        to_millis(self.matcher_time)
    }

    pub fn verifier_ms(&self) -> Decimal {
        to_millis(self.verifier_time)
    }
}

/// Duration as milliseconds with three fixed decimals.
pub fn to_millis(d: Duration) -> Decimal {
    let micros = i64::try_from(d.as_micros()).unwrap_or(i64::MAX);
    Decimal::new(micros, 3)
}

/// Time matcher and verifier for every size in `settings`.
pub fn run_scalability(settings: &ScalabilitySettings) -> Result<Vec<Sample>> {
    let runs = settings.runs.max(1);
    let matcher = Matcher::new();
    let mut samples = Vec::with_capacity(settings.sizes.len());

    for &n in &settings.sizes {
        let model = random_instance(n, settings.seed);

        let mut outcome: Option<MatchOutcome> = None;
        let start = Instant::now();
        for _ in 0..runs {
            outcome = Some(matcher.run(&model));
        }
        let matcher_time = start.elapsed() / runs;
        let Some(outcome) = outcome else {
            continue;
        };

        let verifier = Verifier::new(&model);
        let mut verdict = None;
        let start = Instant::now();
        for _ in 0..runs {
            verdict = Some(verifier.verify(&outcome.matching));
        }
        let verifier_time = start.elapsed() / runs;
        if let Some(verdict) = verdict {
            verdict.into_result()?;
        }

        let sample = Sample {
            n,
            matcher_time,
            verifier_time,
            receipt: outcome.receipt(),
        };
        info!(
            n,
            matcher_ms = %sample.matcher_ms(),
            verifier_ms = %sample.verifier_ms(),
            proposals = sample.receipt.proposals,
            "size complete"
        );
        samples.push(sample);
    }

    Ok(samples)
}

/// Write samples as CSV.
pub fn write_csv<W: Write>(samples: &[Sample], mut out: W) -> io::Result<()> {
    writeln!(out, "n,matcher_time_ms,verifier_time_ms,proposals,digest")?;
    for s in samples {
        writeln!(
            out,
            "{},{},{},{},{}",
            s.n,
            s.matcher_ms(),
            s.verifier_ms(),
            s.receipt.proposals,
            s.receipt.digest_hex()
        )?;
    }
    out.flush()
}

/// Create the output directory and write the CSV into it.
pub fn save_results(samples: &[Sample], settings: &ScalabilitySettings) -> Result<PathBuf> {
    fs::create_dir_all(&settings.output_dir)?;
    let path = settings.output_dir.join(CSV_FILE);
    let file = fs::File::create(&path)?;
    write_csv(samples, io::BufWriter::new(file))?;
    info!(path = %path.display(), "scalability data saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_settings() -> ScalabilitySettings {
        ScalabilitySettings {
            sizes: vec![0, 1, 4, 16],
            runs: 2,
            seed: 42,
            output_dir: PathBuf::from("unused"),
        }
    }

    #[test]
    fn test_to_millis_is_exact() {
        assert_eq!(to_millis(Duration::from_micros(12_345)).to_string(), "12.345");
        assert_eq!(to_millis(Duration::from_micros(7)).to_string(), "0.007");
        assert_eq!(to_millis(Duration::ZERO).to_string(), "0.000");
    }

    #[test]
    fn test_sweep_covers_every_size() {
        let samples = run_scalability(&small_settings()).unwrap();
        let sizes: Vec<_> = samples.iter().map(|s| s.n).collect();
        assert_eq!(sizes, vec![0, 1, 4, 16]);

        for s in &samples {
            assert!(s.receipt.proposals <= (s.n * s.n) as u64);
        }
    }

    #[test]
    fn test_sweep_is_reproducible() {
        let a = run_scalability(&small_settings()).unwrap();
        let b = run_scalability(&small_settings()).unwrap();
        let receipts = |v: &[Sample]| v.iter().map(|s| s.receipt.clone()).collect::<Vec<_>>();
        assert_eq!(receipts(&a), receipts(&b));
    }

    #[test]
    fn test_csv_layout() {
        let sample = Sample {
            n: 2,
            matcher_time: Duration::from_micros(1_500),
            verifier_time: Duration::from_micros(250),
            receipt: MatchReceipt::new(2, 3, [0u8; 32]),
        };
        let mut buf = Vec::new();
        write_csv(&[sample], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("n,matcher_time_ms,verifier_time_ms,proposals,digest")
        );
        assert_eq!(
            lines.next(),
            Some(format!("2,1.500,0.250,3,{}", "0".repeat(64)).as_str())
        );
    }
}
