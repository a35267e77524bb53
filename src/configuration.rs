use std::fs::File;
use std::io::BufReader;

use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

pub const MIN_THREADS: usize = 1;
pub const MAX_THREADS: usize = 50;
pub const DEFAULT_TOTAL_INTERVALS: u64 = 100_000_000;

fn default_total_intervals() -> u64 {
    DEFAULT_TOTAL_INTERVALS
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Liczba watkow musi byc w przedziale {min}-{max}.")]
    ThreadCountOutOfRange {
        num_threads: i64,
        min: usize,
        max: usize
    },
    #[error("total_intervals must be positive")]
    ZeroIntervals,
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    JsonParseError(#[from] serde_json::Error)
}

impl ConfigurationError {
    fn thread_count_out_of_range(num_threads: i64) -> ConfigurationError {
        ConfigurationError::ThreadCountOutOfRange {
            num_threads,
            min: MIN_THREADS,
            max: MAX_THREADS
        }
    }
}

/// Parameters of one π estimation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default = "default_total_intervals")]
    total_intervals: u64,
    num_threads: usize
}

impl Configuration {
    /// Builds and validates a configuration.
    pub fn new(total_intervals: u64, num_threads: usize) -> Result<Configuration, ConfigurationError> {
        let config = Configuration { total_intervals, num_threads };
        config.validate()?;
        Ok(config)
    }

    pub fn with_default_intervals(num_threads: usize) -> Result<Configuration, ConfigurationError> {
        Configuration::new(DEFAULT_TOTAL_INTERVALS, num_threads)
    }

    /// Accepts a signed thread count as typed by a user.
    pub fn from_thread_count(total_intervals: u64, num_threads: i64) -> Result<Configuration, ConfigurationError> {
        let in_range = num_threads >= MIN_THREADS as i64 && num_threads <= MAX_THREADS as i64;
        if !in_range {
            return Err(ConfigurationError::thread_count_out_of_range(num_threads));
        }
        Configuration::new(total_intervals, num_threads as usize)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(MIN_THREADS..=MAX_THREADS).contains(&self.num_threads) {
            return Err(ConfigurationError::thread_count_out_of_range(self.num_threads as i64));
        }
        if self.total_intervals == 0 {
            return Err(ConfigurationError::ZeroIntervals);
        }
        Ok(())
    }

    pub fn total_intervals(&self) -> u64 {
        self.total_intervals
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        let config: Configuration = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_reader(file_path: &str) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let config: Configuration = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
