//! HTTP client for diet service requests.
//!
//! Thin wrapper over `reqwest` that pins the base URL and the bounded
//! request wait. Status and body handling live in the service layer.

use super::error::ApiError;
use reqwest::Response;
use serde::Serialize;
use std::time::Duration;

/// Bounded wait for a single request. Plan generation is slow on the
/// service side, so this is generous.
const REQUEST_TIMEOUT_IN_SECS: u64 = 30;

/// Issues requests against the diet service base URL.
///
pub struct Client {
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never happen
    /// in practice as the builder only fails on invalid configuration,
    /// which we don't use.
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_IN_SECS))
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Send a JSON body to an endpoint and return the raw response. Every
    /// call issues a fresh request; there is no deduplication or caching.
    ///
    pub(crate) async fn post<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request_url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("POST {}", request_url);
        Ok(self.http_client.post(&request_url).json(body).send().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = Client::new("http://localhost:3333/");
        assert_eq!(client.base_url, "http://localhost:3333");
    }
}
