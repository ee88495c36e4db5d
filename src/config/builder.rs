//! GeneratorConfig builder for constructing configuration

use std::time::Duration;

use super::{ConfigError, GeneratorConfig};

/// Default configuration values
pub(super) const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_millis(1);

/// Builder for GeneratorConfig
#[derive(Debug)]
pub struct GeneratorConfigBuilder {
    pub(super) retry_interval: Duration,
    pub(super) max_wait: Option<Duration>,
}

impl GeneratorConfigBuilder {
    /// Create a new GeneratorConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            retry_interval: DEFAULT_RETRY_INTERVAL,
            max_wait: None,
        }
    }

    /// Set the sleep between retry attempts after clock-sequence exhaustion.
    /// Must be at least 1 ms, one tick's worth of clock granularity.
    pub fn retry_interval(mut self, interval: Duration) -> Result<Self, ConfigError> {
        if interval < Duration::from_millis(1) {
            return Err(ConfigError::InvalidRetryInterval { interval });
        }
        self.retry_interval = interval;
        Ok(self)
    }

    /// Set a deadline on the total time spent retrying; exceeding it surfaces
    /// [`UuidError::GenerationTimeout`](crate::UuidError::GenerationTimeout)
    pub const fn max_wait(mut self, deadline: Duration) -> Self {
        self.max_wait = Some(deadline);
        self
    }

    /// Build the final GeneratorConfig
    pub fn build(self) -> GeneratorConfig {
        GeneratorConfig::from_builder(self)
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
