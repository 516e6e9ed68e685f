//! Client-side pagination over observable arrays.
//!
//! # Architecture
//!
//! - [`core`] - Pure page arithmetic
//! - `pagination.rs` - [`Pagination`], a view over `tokio::sync::watch` inputs
//!
//! The paginator never owns the array. It reads the latest value from each
//! input channel on every call, so the slice and page count always reflect
//! the most recent writes made by the channel owners.

pub mod core;
mod error;
mod pagination;

pub use self::core::{page_bounds, page_count, page_slice};
pub use error::{Error, Result};
pub use pagination::{DEFAULT_ROWS_PER_PAGE, Pagination, PaginationOptions};
