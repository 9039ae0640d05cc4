//! Data sources for the storage dashboard.
//!
//! - [`mock_snapshot`]: deterministic example data
//! - [`StorageClient`]: blocking HTTP fetch of a snapshot payload
//! - [`load_into`]: feed either source into the state containers

mod client;
mod error;
mod loader;
mod mock;

pub use client::{DEFAULT_TIMEOUT, StorageClient};
pub use error::{Result, SourceError};
pub use loader::{DataSource, load_into};
pub use mock::{mock_files, mock_payload, mock_snapshot};
