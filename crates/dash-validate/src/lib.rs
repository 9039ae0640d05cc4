//! Validation for storage dashboard data.
//!
//! All checks are pure and operate on loosely-typed `serde_json::Value`
//! candidates. Typed model values are only produced once a candidate has
//! passed every check.
//!
//! # Pipeline
//!
//! 1. [`correct_storage_by_type`] scales an overshooting breakdown
//! 2. [`validate_snapshot`] checks aggregate invariants and filters files

mod correction;
mod file;
mod snapshot;
mod tab;
mod util;

pub use correction::{correct_storage_by_type, scale_to_fit};
pub use file::{parse_file_record, validate_file_record};
pub use snapshot::{ValidationResult, validate_snapshot};
pub use tab::{TabCandidate, parse_tab_entry, validate_tab_entry};
