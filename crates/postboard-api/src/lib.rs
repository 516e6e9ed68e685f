//! Posts fetching with artificial flakiness, client-side pagination and
//! delayed retry.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration and types
//! - [`core`] - Pure transformations
//! - [`effects`] - I/O operations with trait abstraction
//!
//! # Behavior
//!
//! - **Fail Silently**: `load_posts` never returns an error; failures only
//!   flip the observable error flag
//! - **Wholesale Replace**: a successful load replaces the whole collection,
//!   truncated to the first `max_posts` entries
//! - **Fixed Retry**: `retry_with_delay` waits a fixed delay and loads once,
//!   with no backoff and no cancellation

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use self::core::{is_success, should_fail, take_leading};
pub use data::{ApiOptions, FailureSampler, Post};
pub use effects::{FlakyDelay, HttpClient, HttpResponse, PostsApi, use_posts_api};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{Error, Result, SIMULATED_FAILURE_MESSAGE};
