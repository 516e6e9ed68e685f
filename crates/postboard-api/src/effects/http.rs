use std::future::Future;

use bytes::Bytes;

/// Status and body of a completed GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body:   Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200 OK` response carrying `body`.
    pub fn ok(body: impl Into<Bytes>) -> Self { Self::new(200, body) }
}

/// Asynchronous HTTP client abstraction.
///
/// This trait provides the minimal interface needed to load posts.
/// Implementations handle their own redirect following and timeout
/// configuration. Status codes are reported, not turned into errors; the
/// caller decides which ones count as failures.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync + 'static {
    /// Error type for transport failures.
    type Error: std::error::Error + Send + 'static;

    /// Send a GET request and read the whole response body.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be read (DNS failure,
    /// connection error, interrupted body, etc.).
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = std::result::Result<HttpResponse, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use crate::error::{Error, Result};

    /// Production HTTP client implementation using reqwest.
    #[derive(Debug, Clone)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Create a new ReqwestClient with default configuration.
        pub fn new() -> Result<Self> {
            let client = reqwest::Client::builder()
                .build()
                .map_err(|e| Error::Network(e.to_string()))?;
            Ok(Self { client })
        }

        /// Wrap an already configured client (proxies, timeouts, ...).
        pub fn from_client(client: reqwest::Client) -> Self { Self { client } }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(&self, url: &str) -> std::result::Result<HttpResponse, Self::Error> {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?;

            Ok(HttpResponse { status, body })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
