//! HTTP client for fetching storage snapshots.
//!
//! A thin `GET` + JSON parse. The body is returned as a loosely-typed
//! value; timestamps stay RFC 3339 strings and are parsed by the validator
//! when the payload reaches the storage state.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, SourceError};

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for a storage statistics endpoint.
pub struct StorageClient {
    client: Client,
}

impl StorageClient {
    /// Create a client with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Fetch the snapshot payload from `endpoint`.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] for non-2xx responses
    /// - [`SourceError::Network`] for transport failures
    /// - [`SourceError::Decode`] if the body is not JSON
    pub fn fetch(&self, endpoint: &str) -> Result<Value> {
        debug!(endpoint, "fetching storage snapshot");

        let response = self
            .client
            .get(endpoint)
            .header(
                USER_AGENT,
                format!("storage-dashboard/{}", env!("CARGO_PKG_VERSION")),
            )
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        let payload: Value = serde_json::from_str(&body)?;
        debug!(bytes = body.len(), "storage snapshot received");
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(StorageClient::new().is_ok());
        assert!(StorageClient::with_timeout(Duration::from_secs(1)).is_ok());
    }
}
