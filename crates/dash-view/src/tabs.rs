//! Built-in dashboard tabs.

use std::rc::Rc;

use dash_model::{DEFAULT_TAB_ID, StorageSnapshot, TabComponent, TabEntry, UiSnapshot};

use crate::file_table::FileTable;
use crate::render::{render_breakdown, render_files, render_overview};
use crate::theme::{Palette, resolve_theme};

pub const OVERVIEW_TAB_ID: &str = DEFAULT_TAB_ID;
pub const FILES_TAB_ID: &str = "files";
pub const BREAKDOWN_TAB_ID: &str = "type-breakdown";

fn palette(ui: &UiSnapshot, system_is_dark: bool) -> Palette {
    resolve_theme(ui.theme, system_is_dark).palette()
}

/// Usage cards and bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverviewTab {
    pub system_is_dark: bool,
}

impl TabComponent for OverviewTab {
    fn render(&self, storage: &StorageSnapshot, ui: &UiSnapshot) -> String {
        render_overview(storage, &palette(ui, self.system_is_dark))
    }
}

/// File table with a fixed sort, filter and selection.
#[derive(Debug, Clone, Default)]
pub struct FilesTab {
    pub table: FileTable,
    pub system_is_dark: bool,
}

impl TabComponent for FilesTab {
    fn render(&self, storage: &StorageSnapshot, ui: &UiSnapshot) -> String {
        render_files(storage, &self.table, &palette(ui, self.system_is_dark))
    }
}

/// Per-type breakdown legend.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakdownTab {
    pub system_is_dark: bool,
}

impl TabComponent for BreakdownTab {
    fn render(&self, storage: &StorageSnapshot, ui: &UiSnapshot) -> String {
        render_breakdown(storage, &palette(ui, self.system_is_dark))
    }
}

/// The three tabs every dashboard starts with.
pub fn default_tabs(files: FileTable, system_is_dark: bool) -> Vec<TabEntry> {
    vec![
        TabEntry::new(
            OVERVIEW_TAB_ID,
            "Storage Overview",
            Rc::new(OverviewTab { system_is_dark }),
        )
        .with_icon("hard-drive")
        .with_order(10),
        TabEntry::new(
            FILES_TAB_ID,
            "Files",
            Rc::new(FilesTab {
                table: files,
                system_is_dark,
            }),
        )
        .with_icon("folder")
        .with_order(20),
        TabEntry::new(
            BREAKDOWN_TAB_ID,
            "Type Breakdown",
            Rc::new(BreakdownTab { system_is_dark }),
        )
        .with_icon("pie-chart")
        .with_order(30),
    ]
}
