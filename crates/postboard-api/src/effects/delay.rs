use std::fmt;
use std::time::Duration;

use crate::core::should_fail;
use crate::data::{ApiOptions, FailureSampler};
use crate::error::{Error, Result};

/// Artificial wait that fails a share of the time, standing in for an
/// unreliable network.
#[derive(Clone)]
pub struct FlakyDelay {
    duration:     Duration,
    failure_rate: f64,
    sampler:      Option<FailureSampler>,
}

impl fmt::Debug for FlakyDelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlakyDelay")
            .field("duration", &self.duration)
            .field("failure_rate", &self.failure_rate)
            .finish_non_exhaustive()
    }
}

impl FlakyDelay {
    pub fn new(duration: Duration, failure_rate: f64) -> Self {
        Self {
            duration,
            failure_rate,
            sampler: None,
        }
    }

    pub fn from_options(options: &ApiOptions) -> Self {
        Self {
            duration:     options.artificial_delay,
            failure_rate: options.failure_rate,
            sampler:      options.failure_sampler.clone(),
        }
    }

    #[must_use]
    pub fn with_sampler(mut self, sampler: FailureSampler) -> Self {
        self.sampler = Some(sampler);
        self
    }

    /// Sleep for the configured duration, then fail with
    /// [`Error::SimulatedFailure`] if the draw does not exceed the failure
    /// rate.
    pub async fn wait(&self) -> Result<()> {
        tokio::time::sleep(self.duration).await;

        if should_fail(self.sample(), self.failure_rate) {
            return Err(Error::SimulatedFailure);
        }
        Ok(())
    }

    fn sample(&self) -> f64 {
        match &self.sampler {
            Some(sampler) => sampler(),
            None => rand::random::<f64>(),
        }
    }
}
