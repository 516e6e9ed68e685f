//! I/O operations and effectful computations for posts fetching.
//!
//! Network access goes through the [`HttpClient`] trait so tests can swap
//! in canned responses. Timers come from `tokio::time` and can be driven
//! with a paused clock.

mod api;
mod delay;
mod http;

pub use api::{PostsApi, use_posts_api};
pub use delay::FlakyDelay;
pub use http::{HttpClient, HttpResponse};
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
