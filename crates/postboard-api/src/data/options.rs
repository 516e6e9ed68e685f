use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::error::Result;

/// Source of samples in `[0, 1)` for the artificial failure decision.
pub type FailureSampler = Arc<dyn Fn() -> f64 + Send + Sync>;

/// Endpoint queried by default.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Configuration for [`crate::effects::PostsApi`].
///
/// Can be built in code or loaded from TOML, where durations are given in
/// milliseconds. The sampler can only be set in code.
///
/// # Examples
///
/// ```
/// use postboard_api::ApiOptions;
/// use std::time::Duration;
///
/// let options = ApiOptions::default()
///     .max_posts(10)
///     .retry_delay(Duration::from_secs(1));
///
/// let loaded = ApiOptions::from_toml_str("max_posts = 10\nretry_delay_ms = 1000").unwrap();
/// assert_eq!(loaded.max_posts, options.max_posts);
/// assert_eq!(loaded.retry_delay, options.retry_delay);
/// ```
#[derive(Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiOptions {
    /// URL of the JSON array of posts.
    ///
    /// Default: `https://jsonplaceholder.typicode.com/posts`
    pub endpoint: String,

    /// Number of leading posts kept from each response.
    ///
    /// Default: 15
    pub max_posts: usize,

    /// Wait injected before every request.
    ///
    /// Default: 300ms
    #[serde(rename = "artificial_delay_ms", deserialize_with = "millis")]
    pub artificial_delay: Duration,

    /// Probability in `[0, 1]` that the injected wait ends in a failure
    /// instead of letting the request through.
    ///
    /// Default: 0.3
    #[serde(deserialize_with = "unit_rate")]
    pub failure_rate: f64,

    /// Wait between `retry_with_delay` and the reload it schedules.
    ///
    /// Default: 2900ms
    #[serde(rename = "retry_delay_ms", deserialize_with = "millis")]
    pub retry_delay: Duration,

    /// Custom sampler for the failure decision. Uses `rand::random` when
    /// `None`.
    #[serde(skip)]
    pub failure_sampler: Option<FailureSampler>,
}

impl fmt::Debug for ApiOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiOptions")
            .field("endpoint", &self.endpoint)
            .field("max_posts", &self.max_posts)
            .field("artificial_delay", &self.artificial_delay)
            .field("failure_rate", &self.failure_rate)
            .field("retry_delay", &self.retry_delay)
            .field("failure_sampler", &self.failure_sampler.as_ref().map(|_| "{ ... }"))
            .finish()
    }
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            endpoint:         DEFAULT_ENDPOINT.to_string(),
            max_posts:        15,
            artificial_delay: Duration::from_millis(300),
            failure_rate:     0.3,
            retry_delay:      Duration::from_millis(2900),
            failure_sampler:  None,
        }
    }
}

impl ApiOptions {
    /// Parse options from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> { Ok(toml::from_str(s)?) }

    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn max_posts(mut self, max_posts: usize) -> Self {
        self.max_posts = max_posts;
        self
    }

    #[must_use]
    pub fn artificial_delay(mut self, delay: Duration) -> Self {
        self.artificial_delay = delay;
        self
    }

    /// Set the failure probability, clamped to `[0, 1]`.
    #[must_use]
    pub fn failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = clamp_rate(rate);
        self
    }

    #[must_use]
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Replace the random source of the failure decision.
    ///
    /// # Examples
    ///
    /// ```
    /// use postboard_api::ApiOptions;
    /// use std::sync::Arc;
    ///
    /// // a sample of 1.0 is always above the failure rate
    /// let options = ApiOptions::default().failure_sampler(Arc::new(|| 1.0));
    /// ```
    #[must_use]
    pub fn failure_sampler(mut self, sampler: FailureSampler) -> Self {
        self.failure_sampler = Some(sampler);
        self
    }
}

fn clamp_rate(rate: f64) -> f64 {
    if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) }
}

fn millis<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_millis)
}

fn unit_rate<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    f64::deserialize(deserializer).map(clamp_rate)
}
