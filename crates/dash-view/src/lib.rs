//! Presentation layer for the storage dashboard.
//!
//! View models here read storage and UI snapshots and never hold on to
//! them. The only write path back into storage is [`FileTable::apply`].

pub mod category;
pub mod chart;
pub mod file_table;
pub mod format;
pub mod render;
pub mod stats;
pub mod tabs;
pub mod theme;

pub use category::{breakdown_from_files, category_for};
pub use chart::{PALETTE, Slice, TypeBreakdown};
pub use file_table::{ActionOutcome, FileAction, FileTable, SortDirection, SortKey};
pub use format::{format_bytes, format_percent, format_timestamp};
pub use render::{render_breakdown, render_files, render_overview, usage_bar};
pub use stats::{CRITICAL_PERCENT, StatCard, StorageStats, UsageLevel, WARNING_PERCENT};
pub use tabs::{
    BREAKDOWN_TAB_ID, BreakdownTab, FILES_TAB_ID, FilesTab, OVERVIEW_TAB_ID, OverviewTab,
    default_tabs,
};
pub use theme::{Palette, ResolvedTheme, Rgb, resolve_theme};
