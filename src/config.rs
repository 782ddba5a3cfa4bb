//! Command-line configuration
//!
//! [`Cli`] is the raw `clap` surface; [`Cli::into_config`] validates it into a
//! [`Config`] before the terminal is touched, so bad flags are reported on a
//! normal stderr.

use crate::playback::DEFAULT_SPEED;
use crate::registry::Registry;
use crate::snapshot::Value;
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

/// Number of bars in a freshly generated array
pub const DEFAULT_ARRAY_SIZE: usize = 10;

/// Largest array the bars pane is expected to lay out
pub const MAX_ARRAY_SIZE: usize = 200;

/// Random values are drawn from `1..=DEFAULT_MAX_VALUE`
pub const DEFAULT_MAX_VALUE: Value = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("array size must be between 1 and {max}, got {got}")]
    InvalidSize { got: usize, max: usize },

    #[error("speed must be positive")]
    InvalidSpeed,

    #[error("max value must be positive")]
    InvalidMaxValue,

    #[error("unknown algorithm '{id}' (expected one of: {known})")]
    UnknownAlgorithm { id: String, known: String },
}

#[derive(Debug, Parser)]
#[command(
    name = "sortty",
    about = "Step through sorting algorithms one array mutation at a time",
    version
)]
pub struct Cli {
    /// Algorithm to select on startup (see --list)
    #[arg(short, long, value_name = "ID")]
    pub algorithm: Option<String>,

    /// Number of elements in each random array
    #[arg(short = 'n', long, default_value_t = DEFAULT_ARRAY_SIZE)]
    pub size: usize,

    /// Auto-play speed; one step every 3000/speed milliseconds
    #[arg(short, long, default_value_t = DEFAULT_SPEED)]
    pub speed: u32,

    /// Largest value in a random array
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE)]
    pub max_value: Value,

    /// Seed for reproducible arrays
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start auto-playing immediately
    #[arg(long)]
    pub autoplay: bool,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the available algorithms and exit
    #[arg(long)]
    pub list: bool,
}

/// Validated runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub algorithm: Option<String>,
    pub size: usize,
    pub speed: u32,
    pub max_value: Value,
    pub seed: Option<u64>,
    pub autoplay: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: None,
            size: DEFAULT_ARRAY_SIZE,
            speed: DEFAULT_SPEED,
            max_value: DEFAULT_MAX_VALUE,
            seed: None,
            autoplay: false,
            log_file: None,
        }
    }
}

impl Cli {
    /// Validate the flags against the registry
    pub fn into_config(self, registry: &Registry) -> Result<Config, ConfigError> {
        if self.size == 0 || self.size > MAX_ARRAY_SIZE {
            return Err(ConfigError::InvalidSize {
                got: self.size,
                max: MAX_ARRAY_SIZE,
            });
        }
        if self.speed == 0 {
            return Err(ConfigError::InvalidSpeed);
        }
        if self.max_value == 0 {
            return Err(ConfigError::InvalidMaxValue);
        }
        if let Some(id) = &self.algorithm {
            if registry.get(id).is_none() {
                return Err(ConfigError::UnknownAlgorithm {
                    id: id.clone(),
                    known: registry.ids().collect::<Vec<_>>().join(", "),
                });
            }
        }

        Ok(Config {
            algorithm: self.algorithm,
            size: self.size,
            speed: self.speed,
            max_value: self.max_value,
            seed: self.seed,
            autoplay: self.autoplay,
            log_file: self.log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        let cli = Cli::try_parse_from(std::iter::once("sortty").chain(args.iter().copied()))
            .expect("arguments should parse");
        cli.into_config(&Registry::new())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse(&[]), Ok(Config::default()));
    }

    #[test]
    fn test_all_flags() {
        let config = parse(&[
            "-a",
            "quick-sort",
            "-n",
            "25",
            "-s",
            "120",
            "--max-value",
            "9",
            "--seed",
            "3",
            "--autoplay",
            "--log-file",
            "sortty.log",
        ])
        .unwrap();

        assert_eq!(config.algorithm.as_deref(), Some("quick-sort"));
        assert_eq!(config.size, 25);
        assert_eq!(config.speed, 120);
        assert_eq!(config.max_value, 9);
        assert_eq!(config.seed, Some(3));
        assert!(config.autoplay);
        assert_eq!(config.log_file, Some(PathBuf::from("sortty.log")));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            parse(&["-n", "0"]),
            Err(ConfigError::InvalidSize { got: 0, max: 200 })
        );
        assert_eq!(parse(&["-s", "0"]), Err(ConfigError::InvalidSpeed));
        assert_eq!(parse(&["--max-value", "0"]), Err(ConfigError::InvalidMaxValue));
        assert!(matches!(
            parse(&["-a", "bogo-sort"]),
            Err(ConfigError::UnknownAlgorithm { .. })
        ));
    }
}
