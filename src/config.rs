//! Application settings.
//!
//! Loaded from `config/default.toml`, an optional `config/local.toml`, then
//! `STABLE_MATCH__*` environment variables. Every field has a default.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub scalability: ScalabilitySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    /// `pretty` or `compact`
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

/// Timing sweep parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScalabilitySettings {
    /// Problem sizes to time, in order
    pub sizes: Vec<usize>,
    /// Timed repetitions per size; the mean is reported
    pub runs: u32,
    /// Base seed; each size uses `seed + n`
    pub seed: u64,
    pub output_dir: PathBuf,
}

impl Default for ScalabilitySettings {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            runs: 3,
            seed: 42,
            output_dir: PathBuf::from("scalability_results"),
        }
    }
}

fn default_sizes() -> Vec<usize> {
    (0..10).map(|i| 1usize << i).collect()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with STABLE_MATCH__)
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., STABLE_MATCH__SCALABILITY__RUNS -> scalability.runs
            .add_source(env_source())
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("STABLE_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes() {
        let settings = ScalabilitySettings::default();
        assert_eq!(settings.sizes, vec![1, 2, 4, 8, 16, 32, 64, 128, 256, 512]);
        assert_eq!(settings.runs, 3);
        assert_eq!(settings.seed, 42);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "compact");
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("stable-match-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "[scalability]\nsizes = [3, 5]\nruns = 1\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.scalability.sizes, vec![3, 5]);
        assert_eq!(settings.scalability.runs, 1);
        assert_eq!(settings.scalability.seed, 42);
        assert_eq!(settings.logging.level, "info");

        std::fs::remove_dir_all(&dir).ok();
    }
}
