//! Immutable data types for posts fetching.
//!
//! This module contains the record type returned by the endpoint and the
//! configuration consumed by [`crate::effects::PostsApi`].

pub mod options;
pub mod post;

pub use options::{ApiOptions, FailureSampler};
pub use post::Post;
