//! Data model shared by the storage dashboard crates.

pub mod storage;
pub mod tab;
pub mod ui;

pub use storage::{DEFAULT_TOTAL_STORAGE, DEFAULT_USED_STORAGE, FileRecord, StorageSnapshot};
pub use tab::{DEFAULT_TAB_ORDER, TabComponent, TabEntry};
pub use ui::{DEFAULT_TAB_ID, Theme, UiSnapshot, UnknownTheme};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    fn sample() -> StorageSnapshot {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        StorageSnapshot {
            total_storage: 1000,
            used_storage: 250,
            files: vec![FileRecord {
                id: "1".to_string(),
                name: "report.pdf".to_string(),
                size: 100,
                file_type: "application/pdf".to_string(),
                last_modified: at,
                path: "/docs/report.pdf".to_string(),
            }],
            storage_by_type: BTreeMap::from([("documents".to_string(), 100)]),
            last_updated: at,
        }
    }

    #[test]
    fn usage_percent_and_free_space() {
        let snapshot = sample();
        assert_eq!(snapshot.usage_percent(), 25.0);
        assert_eq!(snapshot.free_storage(), 750);
        assert_eq!(snapshot.type_total(), 100);
    }

    #[test]
    fn snapshot_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample()).expect("serialize snapshot");
        assert_eq!(json["totalStorage"], 1000);
        assert_eq!(json["usedStorage"], 250);
        assert_eq!(json["files"][0]["type"], "application/pdf");
        assert_eq!(json["files"][0]["lastModified"], "2024-01-15T10:30:00Z");
        assert_eq!(json["storageByType"]["documents"], 100);
    }

    #[test]
    fn extension_ignores_dotfiles() {
        let mut file = sample().files.remove(0);
        assert_eq!(file.extension().as_deref(), Some("pdf"));
        file.name = ".bashrc".to_string();
        assert_eq!(file.extension(), None);
    }

    #[test]
    fn theme_parses_case_insensitively() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" auto ".parse::<Theme>(), Ok(Theme::Auto));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn ui_defaults() {
        let ui = UiSnapshot::default();
        assert_eq!(ui.active_tab_id, "storage-overview");
        assert_eq!(ui.theme, Theme::Auto);
        assert!(!ui.is_loading);
        assert!(ui.error.is_none());
    }
}
