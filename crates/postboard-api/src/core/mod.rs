//! Pure transformations for posts fetching.
//!
//! Nothing in this module performs I/O, sleeps or touches shared state.

mod flaky;
mod status;
mod truncate;

pub use flaky::should_fail;
pub use status::is_success;
pub use truncate::take_leading;
