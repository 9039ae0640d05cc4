//! Drive a data source into the state containers.

use dash_state::{StorageState, UiState};
use serde_json::Value;
use tracing::{info, warn};

use crate::client::StorageClient;
use crate::error::Result;
use crate::mock::mock_payload;

/// Where storage data comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    /// The built-in example snapshot.
    #[default]
    Mock,
    /// `GET` the snapshot from an HTTP endpoint.
    Remote(String),
}

impl DataSource {
    /// Remote when an endpoint is configured, mock otherwise.
    pub fn from_endpoint(endpoint: Option<&str>) -> Self {
        match endpoint.map(str::trim) {
            Some(url) if !url.is_empty() => Self::Remote(url.to_string()),
            _ => Self::Mock,
        }
    }

    /// Short description for logs.
    pub fn describe(&self) -> &str {
        match self {
            Self::Mock => "mock data",
            Self::Remote(url) => url,
        }
    }

    /// Produce the raw snapshot payload.
    pub fn payload(&self, client: &StorageClient) -> Result<Value> {
        match self {
            Self::Mock => Ok(mock_payload()),
            Self::Remote(url) => client.fetch(url),
        }
    }
}

/// Load `source` into `storage`, reporting progress through `ui`.
///
/// Sets `is_loading` before fetching and clears it before returning, on
/// every path. Failures (transport, HTTP status, rejected payload) end up
/// as a message in the UI error field instead of being returned. The
/// loading flag and the storage write are separate notifications.
///
/// Returns `true` if the storage snapshot was replaced.
pub fn load_into(
    source: &DataSource,
    client: &StorageClient,
    storage: &mut StorageState,
    ui: &mut UiState,
) -> bool {
    ui.set_loading(true);
    if ui.snapshot().error.is_some() {
        ui.clear_error();
    }

    let outcome = source
        .payload(client)
        .and_then(|payload| storage.replace(payload).map_err(Into::into));

    let loaded = match outcome {
        Ok(()) => {
            info!(
                source = source.describe(),
                files = storage.snapshot().files.len(),
                "storage data loaded"
            );
            for message in storage.last_messages() {
                warn!(source = source.describe(), "{message}");
            }
            true
        }
        Err(error) => {
            warn!(source = source.describe(), %error, "failed to load storage data");
            ui.set_error(Some(error.user_message()));
            false
        }
    };

    ui.set_loading(false);
    loaded
}
