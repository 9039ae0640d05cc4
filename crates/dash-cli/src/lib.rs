//! Library components of the `storage-dashboard` CLI.

pub mod commands;
pub mod logging;
pub mod settings;
