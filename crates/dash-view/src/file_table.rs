//! File table view model: sort, filter and selection.
//!
//! This is local component state. It reads storage snapshots but only
//! writes to storage through explicit file actions.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use dash_model::{FileRecord, StorageSnapshot};
use dash_state::{StateError, StorageState};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Column the table is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Name,
    Size,
    Type,
    LastModified,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::Name, Self::Size, Self::Type, Self::LastModified];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Size => "Size",
            Self::Type => "Type",
            Self::LastModified => "Modified",
        }
    }

    fn compare(self, a: &FileRecord, b: &FileRecord) -> Ordering {
        match self {
            Self::Name => compare_text(&a.name, &b.name),
            Self::Size => a.size.cmp(&b.size),
            Self::Type => compare_text(&a.file_type, &b.file_type),
            Self::LastModified => a.last_modified.cmp(&b.last_modified),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub const fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Actions the file table can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAction {
    Upload,
    Download(Vec<String>),
    Delete(Vec<String>),
}

/// Result of [`FileTable::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Number of files removed from storage.
    Removed(usize),
    /// The action is a stub with no transfer mechanics behind it.
    Unsupported(&'static str),
}

/// Sort, filter and selection state for the file table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTable {
    sort_key: SortKey,
    direction: SortDirection,
    filter: String,
    selected: BTreeSet<String>,
}

impl FileTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.set_filter(filter);
        self
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Click on a column header: same column toggles direction, a new
    /// column sorts ascending.
    pub fn sort_by(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.direction = self.direction.toggled();
        } else {
            self.sort_key = key;
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Case-insensitive match against name, path and type.
    pub fn matches(&self, file: &FileRecord) -> bool {
        let needle = self.filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&file.name, &file.path, &file.file_type]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Visible rows: filtered, then sorted. Ties keep snapshot order.
    pub fn rows<'a>(&self, snapshot: &'a StorageSnapshot) -> Vec<&'a FileRecord> {
        let mut rows: Vec<&FileRecord> = snapshot
            .files
            .iter()
            .filter(|file| self.matches(file))
            .collect();
        rows.sort_by(|a, b| {
            let ordering = self.sort_key.compare(a, b);
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        rows
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Toggle a row. Returns the new selection state of that row.
    pub fn toggle_selected(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    /// Select every row that passes the current filter.
    pub fn select_all_visible(&mut self, snapshot: &StorageSnapshot) {
        let visible: Vec<String> = self
            .rows(snapshot)
            .into_iter()
            .map(|file| file.id.clone())
            .collect();
        self.selected.extend(visible);
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    /// Total bytes of the selected files present in `snapshot`.
    pub fn selected_size(&self, snapshot: &StorageSnapshot) -> u64 {
        snapshot
            .files
            .iter()
            .filter(|file| self.selected.contains(&file.id))
            .map(|file| file.size)
            .sum()
    }

    /// Drop selected ids that are no longer in `snapshot`.
    pub fn prune_selection(&mut self, snapshot: &StorageSnapshot) {
        self.selected
            .retain(|id| snapshot.files.iter().any(|file| &file.id == id));
    }

    /// Perform a file action.
    ///
    /// # Errors
    ///
    /// Propagates [`StateError`] from the storage write.
    pub fn apply(
        &mut self,
        action: FileAction,
        storage: &mut StorageState,
    ) -> Result<ActionOutcome, StateError> {
        match action {
            FileAction::Upload => {
                warn!("upload requested but not implemented");
                Ok(ActionOutcome::Unsupported("upload"))
            }
            FileAction::Download(ids) => {
                warn!(count = ids.len(), "download requested but not implemented");
                Ok(ActionOutcome::Unsupported("download"))
            }
            FileAction::Delete(ids) => {
                let mut removed = 0;
                for id in &ids {
                    if storage.remove_file(id)? {
                        removed += 1;
                    }
                    self.selected.remove(id);
                }
                debug!(requested = ids.len(), removed, "deleted files");
                Ok(ActionOutcome::Removed(removed))
            }
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    fn file(id: &str, name: &str, size: u64, file_type: &str, day: u32) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            name: name.to_string(),
            size,
            file_type: file_type.to_string(),
            last_modified: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            path: format!("/home/{name}"),
        }
    }

    fn snapshot() -> StorageSnapshot {
        StorageSnapshot {
            total_storage: 10_000,
            used_storage: 1_000,
            files: vec![
                file("1", "beta.txt", 300, "text/plain", 3),
                file("2", "Alpha.png", 100, "image/png", 1),
                file("3", "gamma.mp4", 300, "video/mp4", 2),
            ],
            storage_by_type: BTreeMap::new(),
            last_updated: Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap(),
        }
    }

    fn ids(rows: &[&FileRecord]) -> Vec<String> {
        rows.iter().map(|f| f.id.clone()).collect()
    }

    #[test]
    fn sorts_by_name_case_insensitively() {
        let table = FileTable::new();
        assert_eq!(ids(&table.rows(&snapshot())), ["2", "1", "3"]);
    }

    #[test]
    fn size_ties_keep_snapshot_order() {
        let table = FileTable::new().with_sort(SortKey::Size, SortDirection::Descending);
        assert_eq!(ids(&table.rows(&snapshot())), ["1", "3", "2"]);
    }

    #[test]
    fn header_click_toggles_then_resets() {
        let mut table = FileTable::new();
        table.sort_by(SortKey::Name);
        assert_eq!(table.direction(), SortDirection::Descending);
        table.sort_by(SortKey::LastModified);
        assert_eq!(table.sort_key(), SortKey::LastModified);
        assert_eq!(table.direction(), SortDirection::Ascending);
        assert_eq!(ids(&table.rows(&snapshot())), ["2", "3", "1"]);
    }

    #[test]
    fn filter_matches_name_path_and_type() {
        let snap = snapshot();
        assert_eq!(ids(&FileTable::new().with_filter("ALPHA").rows(&snap)), ["2"]);
        assert_eq!(ids(&FileTable::new().with_filter("video/").rows(&snap)), ["3"]);
        assert_eq!(FileTable::new().with_filter("/home").rows(&snap).len(), 3);
        assert!(FileTable::new().with_filter("zzz").rows(&snap).is_empty());
    }

    #[test]
    fn selection_follows_filter_and_prunes() {
        let mut snap = snapshot();
        let mut table = FileTable::new().with_filter(".txt");
        table.select_all_visible(&snap);
        assert_eq!(table.selected_ids(), ["1"]);
        assert!(table.toggle_selected("3"));
        assert_eq!(table.selected_size(&snap), 600);
        assert!(!table.toggle_selected("3"));

        snap.files.retain(|f| f.id != "1");
        table.prune_selection(&snap);
        assert!(table.selected_ids().is_empty());
    }

    #[test]
    fn delete_removes_through_storage() {
        let mut storage = StorageState::with_snapshot(snapshot()).unwrap();
        let mut table = FileTable::new();
        table.toggle_selected("1");

        let outcome = table
            .apply(
                FileAction::Delete(vec!["1".to_string(), "missing".to_string()]),
                &mut storage,
            )
            .unwrap();

        assert_eq!(outcome, ActionOutcome::Removed(1));
        assert!(!table.is_selected("1"));
        assert_eq!(storage.snapshot().files.len(), 2);
    }

    #[test]
    fn transfers_are_stubs() {
        let mut storage = StorageState::new();
        let mut table = FileTable::new();
        assert_eq!(
            table.apply(FileAction::Upload, &mut storage).unwrap(),
            ActionOutcome::Unsupported("upload")
        );
        assert_eq!(
            table
                .apply(FileAction::Download(vec!["1".to_string()]), &mut storage)
                .unwrap(),
            ActionOutcome::Unsupported("download")
        );
    }
}
