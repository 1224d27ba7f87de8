//! Remote image source over HTTP.
//!
//! Implements the `ResourceProvider` contract with a blocking reqwest
//! client, so the core pipeline never sees HTTP. The client must only be
//! driven from the blocking thread pool; the caption handler goes through
//! `spawn_blocking` for exactly that reason. Timeouts and transport errors
//! all surface as `ResourceError::FetchFailed`; there are no retries.

use imprint_traits::{ResourceError, ResourceProvider, SharedResourceData};
use reqwest::blocking::Client;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug)]
pub struct HttpImageSource {
    client: Client,
}

impl HttpImageSource {
    /// Build a source with a bounded request timeout and a fixed User-Agent.
    pub fn new(timeout: Duration, user_agent: &str) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl ResourceProvider for HttpImageSource {
    fn fetch(&self, locator: &str) -> Result<SharedResourceData, ResourceError> {
        let fetch_failed = |e: reqwest::Error| ResourceError::FetchFailed {
            locator: locator.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(locator)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(fetch_failed)?;
        let bytes = response.bytes().map_err(fetch_failed)?;

        tracing::debug!("fetched {} ({} bytes)", locator, bytes.len());
        Ok(Arc::new(bytes.to_vec()))
    }

    fn name(&self) -> &'static str {
        "HttpImageSource"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> HttpImageSource {
        HttpImageSource::new(Duration::from_secs(1), "imprint-test").unwrap()
    }

    #[test]
    fn test_unreachable_host_is_fetch_failed() {
        // Port 1 on loopback refuses immediately; no external network needed.
        let err = source().fetch("http://127.0.0.1:1/image.png").unwrap_err();
        assert!(matches!(err, ResourceError::FetchFailed { .. }));
    }

    #[test]
    fn test_invalid_url_is_fetch_failed() {
        let err = source().fetch("not a url at all").unwrap_err();
        assert!(matches!(err, ResourceError::FetchFailed { .. }));
    }
}
