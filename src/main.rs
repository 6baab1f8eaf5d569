//! Stable Match - Binary Entry Point
//!
//! # Usage
//!
//! ```bash
//! # Compute a matching
//! stable-match match prefs.in matching.out
//!
//! # Verify any matching (exit code 0 only for VALID STABLE)
//! stable-match verify prefs.in matching.out
//!
//! # Generate a random instance
//! stable-match generate 64 prefs.in --seed 7
//!
//! # Time matcher and verifier across sizes
//! stable-match scalability --output-dir results
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use stable_match::config::{LoggingSettings, Settings};
use stable_match::{format, generator, harness, verify, Matcher, Result};

#[derive(Parser)]
#[command(name = "stable-match")]
#[command(
    about = "Hospital-proposing Gale-Shapley matcher and stability verifier",
    long_about = None
)]
struct Cli {
    /// Override the configured log level (e.g. debug, info, warn)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the hospital-optimal stable matching
    Match {
        /// Preferences file
        input: PathBuf,

        /// Where to write the matching
        output: PathBuf,
    },

    /// Check a matching for validity and stability
    Verify {
        /// Preferences file
        preferences: PathBuf,

        /// Matching file (one "hospital student" pair per line)
        matching: PathBuf,
    },

    /// Write a random instance
    Generate {
        /// Agents per side
        n: usize,

        /// Output preferences file
        output: PathBuf,

        /// Base seed; the instance uses seed + n
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Time matcher and verifier across problem sizes
    Scalability {
        /// Settings file (defaults to config/default.toml + environment)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

fn init_logging(logging: &LoggingSettings, override_level: Option<&str>) {
    let level = override_level.unwrap_or(logging.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.command {
        Commands::Scalability {
            config: Some(path), ..
        } => Settings::load_from(path),
        _ => Settings::load(),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging, cli.log_level.as_deref());

    match run(cli.command, settings) {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, settings: Settings) -> Result<ExitCode> {
    match command {
        Commands::Match { input, output } => {
            let model = format::read_preferences(&input)?;
            info!(n = model.n(), "parsed preferences");

            let outcome = Matcher::new().run(&model);
            format::write_matching_file(&outcome.matching, &output)?;

            let receipt = outcome.receipt();
            info!(
                output = %output.display(),
                proposals = receipt.proposals,
                digest = %receipt.digest_hex(),
                "matching complete"
            );
            println!("Total proposals: {}", outcome.proposals);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Verify {
            preferences,
            matching,
        } => {
            let parsed = format::read_preferences(&preferences)
                .and_then(|model| Ok((model, format::read_matching(&matching)?)));
            let (model, matching) = match parsed {
                Ok(inputs) => inputs,
                Err(e) => {
                    println!("INVALID: {e}");
                    return Ok(ExitCode::FAILURE);
                }
            };

            let result = verify(&model, &matching);
            println!("{result}");
            Ok(if result.is_stable() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Commands::Generate { n, output, seed } => {
            let model = generator::random_instance(n, seed);
            std::fs::write(&output, format::format_preferences(&model))?;
            info!(n, seed, output = %output.display(), "instance written");
            Ok(ExitCode::SUCCESS)
        }

        Commands::Scalability { output_dir, .. } => {
            let mut scalability = settings.scalability;
            if let Some(dir) = output_dir {
                scalability.output_dir = dir;
            }

            info!(
                sizes = ?scalability.sizes,
                runs = scalability.runs,
                "starting scalability sweep"
            );
            let samples = harness::run_scalability(&scalability)?;
            let path = harness::save_results(&samples, &scalability)?;
            println!("Data saved to: {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}
