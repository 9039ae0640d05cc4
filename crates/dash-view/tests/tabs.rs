use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use dash_model::{FileRecord, StorageSnapshot, Theme};
use dash_state::{StorageState, TabRegistry, UiState};
use dash_view::{
    BREAKDOWN_TAB_ID, FILES_TAB_ID, FileTable, OVERVIEW_TAB_ID, SortDirection, SortKey,
    default_tabs, format_bytes,
};

fn file(id: &str, name: &str, size: u64, file_type: &str) -> FileRecord {
    FileRecord {
        id: id.to_string(),
        name: name.to_string(),
        size,
        file_type: file_type.to_string(),
        last_modified: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
        path: format!("/data/{name}"),
    }
}

fn snapshot() -> StorageSnapshot {
    StorageSnapshot {
        total_storage: 4 * 1024 * 1024,
        used_storage: 3 * 1024 * 1024,
        files: vec![
            file("a", "clip.mp4", 2 * 1024 * 1024, "video/mp4"),
            file("b", "notes.txt", 512, "text/plain"),
        ],
        storage_by_type: BTreeMap::from([
            ("Videos".to_string(), 2 * 1024 * 1024),
            ("Documents".to_string(), 512),
        ]),
        last_updated: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
    }
}

fn registry(files: FileTable) -> TabRegistry {
    let mut registry = TabRegistry::new();
    for entry in default_tabs(files, false).into_iter().rev() {
        assert!(registry.register_tab(entry));
    }
    registry
}

#[test]
fn default_tabs_register_in_order() {
    let registry = registry(FileTable::new());
    let ids: Vec<&str> = registry.tabs().iter().map(|tab| tab.id.as_str()).collect();
    assert_eq!(ids, [OVERVIEW_TAB_ID, FILES_TAB_ID, BREAKDOWN_TAB_ID]);
    assert_eq!(
        registry.get_tab(FILES_TAB_ID).and_then(|tab| tab.icon.as_deref()),
        Some("folder")
    );
}

#[test]
fn active_tab_renders_current_storage() {
    let storage = StorageState::with_snapshot(snapshot()).unwrap();
    let mut ui = UiState::new();
    ui.set_theme(Theme::Dark);
    let registry = registry(FileTable::new());

    let ui_snapshot = ui.snapshot();
    let tab = registry.get_tab(&ui_snapshot.active_tab_id).unwrap();
    let output = tab.component.render(&storage.snapshot(), &ui_snapshot);

    assert!(output.contains("Used"));
    assert!(output.contains("3.00 MB"));
    assert!(output.contains("75.0%"));
}

#[test]
fn files_tab_uses_its_table_state() {
    let storage = StorageState::with_snapshot(snapshot()).unwrap();
    let table = FileTable::new()
        .with_sort(SortKey::Size, SortDirection::Descending)
        .with_filter("txt");
    let registry = registry(table);

    let output = registry
        .get_tab(FILES_TAB_ID)
        .unwrap()
        .component
        .render(&storage.snapshot(), &UiState::new().snapshot());

    assert!(output.contains("notes.txt"));
    assert!(!output.contains("clip.mp4"));
    assert!(output.contains("1 of 2 files matching \"txt\""));
}

#[test]
fn breakdown_tab_lists_types_and_untracked_space() {
    let storage = StorageState::with_snapshot(snapshot()).unwrap();
    let registry = registry(FileTable::new());

    let output = registry
        .get_tab(BREAKDOWN_TAB_ID)
        .unwrap()
        .component
        .render(&storage.snapshot(), &UiState::new().snapshot());

    assert!(output.contains("Videos"));
    assert!(output.contains("Documents"));
    assert!(output.contains("Untracked"));
    assert!(output.find("Videos") < output.find("Documents"));
}

#[test]
fn empty_breakdown_has_placeholder() {
    let mut empty = snapshot();
    empty.storage_by_type.clear();
    let registry = registry(FileTable::new());
    let output = registry
        .get_tab(BREAKDOWN_TAB_ID)
        .unwrap()
        .component
        .render(&empty, &UiState::new().snapshot());
    assert_eq!(output, "No storage breakdown available.");
}

#[test]
fn byte_formatting_grows_by_powers_of_1024() {
    let mut bytes = 1024_u64;
    for unit in ["KB", "MB", "GB", "TB", "PB"] {
        assert_eq!(format_bytes(bytes), format!("1.00 {unit}"));
        bytes *= 1024;
    }
}
