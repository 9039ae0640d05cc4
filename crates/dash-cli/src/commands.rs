use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result, anyhow, bail};
use comfy_table::{Cell, Table};
use dash_model::Theme;
use dash_source::{DataSource, StorageClient, load_into};
use dash_state::{StorageState, TabRegistry, UiState};
use dash_validate::{ValidationResult, correct_storage_by_type, validate_snapshot};
use dash_view::render::apply_table_style;
use dash_view::{FileTable, breakdown_from_files, default_tabs};
use serde_json::Value;
use tracing::debug;

/// One line of the `tabs` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRow {
    pub order: u32,
    pub id: String,
    pub label: String,
    pub icon: String,
    pub active: bool,
}

/// The three state containers plus the built-in tabs.
pub struct Dashboard {
    storage: StorageState,
    ui: UiState,
    tabs: TabRegistry,
}

impl Dashboard {
    pub fn new(theme: Theme, files: FileTable, system_is_dark: bool) -> Self {
        let mut ui = UiState::new();
        ui.set_theme(theme);
        let mut tabs = TabRegistry::new();
        tabs.set(default_tabs(files, system_is_dark));
        Self {
            storage: StorageState::new(),
            ui,
            tabs,
        }
    }

    pub fn storage(&self) -> &StorageState {
        &self.storage
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Load storage data. A load failure is reported through the UI error
    /// and returned as that message.
    ///
    /// # Errors
    ///
    /// Returns the UI error message if the load failed.
    pub fn load(&mut self, source: &DataSource, client: &StorageClient) -> Result<()> {
        if !load_into(source, client, &mut self.storage, &mut self.ui) {
            let message = self
                .ui
                .snapshot()
                .error
                .unwrap_or_else(|| "Failed to load storage data.".to_string());
            bail!(message);
        }
        self.fill_breakdown()
    }

    /// Derive `storageByType` from file types when the source sent none.
    fn fill_breakdown(&mut self) -> Result<()> {
        let snapshot = self.storage.snapshot();
        if !snapshot.storage_by_type.is_empty() || snapshot.files.is_empty() {
            return Ok(());
        }
        let breakdown = breakdown_from_files(&snapshot.files);
        debug!(types = breakdown.len(), "derived storage breakdown from files");
        self.storage
            .set_storage_by_type(breakdown)
            .context("derive storage breakdown")
    }

    /// Activate `tab_id` and render it.
    ///
    /// # Errors
    ///
    /// Returns an error if no tab with that id is registered.
    pub fn render(&mut self, tab_id: &str) -> Result<String> {
        let component = self
            .tabs
            .get_tab(tab_id)
            .map(|tab| Rc::clone(&tab.component))
            .ok_or_else(|| anyhow!("unknown tab: {tab_id}"))?;
        self.ui.set_active_tab(tab_id);
        Ok(component.render(&self.storage.snapshot(), &self.ui.snapshot()))
    }

    /// Registered tabs in display order.
    pub fn tab_rows(&self) -> Vec<TabRow> {
        let active = self.ui.snapshot().active_tab_id;
        self.tabs
            .tabs()
            .iter()
            .map(|tab| TabRow {
                order: tab.effective_order(),
                id: tab.id.clone(),
                label: tab.label.clone(),
                icon: tab.icon.clone().unwrap_or_default(),
                active: tab.id == active,
            })
            .collect()
    }

    pub fn tab_table(&self) -> Table {
        let mut table = Table::new();
        table.set_header(vec!["", "Order", "Id", "Label", "Icon"]);
        apply_table_style(&mut table);
        for row in self.tab_rows() {
            table.add_row(vec![
                Cell::new(if row.active { "*" } else { "" }),
                Cell::new(row.order),
                Cell::new(row.id),
                Cell::new(row.label),
                Cell::new(row.icon),
            ]);
        }
        table
    }
}

/// Validator output for a snapshot file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    /// `storageByType` was scaled down before validation.
    pub corrected: bool,
    pub result: ValidationResult,
}

/// Run correction and validation over a JSON snapshot file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not JSON.
pub fn validate_file(path: &Path) -> Result<FileReport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    let mut candidate: Value = serde_json::from_str(&content)
        .with_context(|| format!("parse {} as JSON", path.display()))?;
    let corrected = correct_storage_by_type(&mut candidate);
    let result = validate_snapshot(&candidate);
    Ok(FileReport { corrected, result })
}

/// Guess a dark terminal from `COLORFGBG` (`"<fg>;<bg>"`).
pub fn system_is_dark() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .is_some_and(background_is_dark)
}

fn background_is_dark(colorfgbg: &str) -> bool {
    colorfgbg
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg < 7 || bg == 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorfgbg_background() {
        assert!(background_is_dark("15;0"));
        assert!(background_is_dark("15;default;8"));
        assert!(!background_is_dark("0;15"));
        assert!(!background_is_dark("0;7"));
        assert!(!background_is_dark("garbage"));
    }
}
