//! Configuration for the UUID generator

mod builder;

use std::error::Error;
use std::fmt;
use std::time::Duration;

pub use builder::GeneratorConfigBuilder;
use builder::DEFAULT_RETRY_INTERVAL;

/// Errors related to `GeneratorConfig` builder validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Provided retry interval is below the 1 ms tick-advance granularity
    InvalidRetryInterval { interval: Duration },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRetryInterval { interval } => {
                write!(f, "retry interval {interval:?} must be at least 1 ms")
            }
        }
    }
}

impl Error for ConfigError {}

/// Configuration for the UUID generator retry behavior.
///
/// The clock sequence can only be exhausted by minting more than 0x4000 ids
/// within one timestamp; when that happens the generator sleeps for the retry
/// interval and tries again until the clock advances past the exhausted tick,
/// or until the optional deadline runs out.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    retry_interval: Duration,
    max_wait: Option<Duration>,
}

impl GeneratorConfig {
    /// Create config from builder
    pub(crate) fn from_builder(b: GeneratorConfigBuilder) -> Self {
        Self {
            retry_interval: b.retry_interval,
            max_wait: b.max_wait,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Sleep between retries after clock-sequence exhaustion
    #[inline(always)]
    pub const fn retry_interval(&self) -> Duration {
        self.retry_interval
    }

    /// Total time budget for retries; `None` retries until the clock advances
    #[inline(always)]
    pub const fn max_wait(&self) -> Option<Duration> {
        self.max_wait
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            retry_interval: DEFAULT_RETRY_INTERVAL,
            max_wait: None,
        }
    }
}
