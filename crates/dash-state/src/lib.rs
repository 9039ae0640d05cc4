//! Observable state containers for the storage dashboard.
//!
//! The state is split into three independent containers:
//!
//! - **StorageState**: the canonical storage snapshot, guarded by validation
//! - **UiState**: transient UI flags (active tab, theme, loading, error)
//! - **TabRegistry**: the ordered set of dashboard tabs
//!
//! Containers are created explicitly and owned by the embedding
//! application. They are single-threaded; observers run synchronously
//! inside the write that triggered them. No write spans two containers, so
//! observers may see, for example, `is_loading == true` next to stale
//! storage data.

mod error;
mod observable;
mod storage_state;
mod tab_registry;
mod ui_state;

pub use error::{Result, StateError};
pub use observable::{Observable, Subscription};
pub use storage_state::StorageState;
pub use tab_registry::TabRegistry;
pub use ui_state::UiState;
