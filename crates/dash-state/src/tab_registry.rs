//! Ordered, duplicate-free registry of dashboard tabs.

use dash_model::TabEntry;
use dash_validate::{TabCandidate, parse_tab_entry};
use tracing::{debug, warn};

use crate::error::{Result, StateError};
use crate::observable::{Observable, Subscription};

/// Registered tabs, kept sorted by `order` ascending. Equal orders keep
/// their insertion order.
pub struct TabRegistry {
    inner: Observable<Vec<TabEntry>>,
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TabRegistry {
    pub fn new() -> Self {
        Self {
            inner: Observable::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, observer: impl FnMut(&Vec<TabEntry>) + 'static) -> Subscription {
        self.inner.subscribe(observer)
    }

    /// Register a tab.
    ///
    /// Returns `false` and leaves the registry unchanged if a tab with the
    /// same id exists.
    pub fn register_tab(&mut self, mut entry: TabEntry) -> bool {
        if self.has_tab(&entry.id) {
            warn!(id = %entry.id, "tab already registered");
            return false;
        }
        entry.order = Some(entry.effective_order());
        debug!(id = %entry.id, order = entry.effective_order(), "registering tab");
        self.inner.update(|tabs| {
            tabs.push(entry);
            sort_tabs(tabs);
        });
        true
    }

    /// Validate a loosely-typed candidate, then register it.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidTab`] if the candidate fails validation.
    pub fn register_candidate(&mut self, candidate: &TabCandidate) -> Result<bool> {
        let entry = parse_tab_entry(candidate).ok_or_else(|| StateError::InvalidTab {
            id: candidate.id().unwrap_or_default().to_string(),
        })?;
        Ok(self.register_tab(entry))
    }

    /// Remove a tab. Returns `false` (and does not notify) if absent.
    pub fn unregister_tab(&mut self, id: &str) -> bool {
        let Some(index) = self.inner.get().iter().position(|tab| tab.id == id) else {
            return false;
        };
        self.inner.update(|tabs| {
            tabs.remove(index);
        });
        true
    }

    pub fn get_tab(&self, id: &str) -> Option<&TabEntry> {
        self.inner.get().iter().find(|tab| tab.id == id)
    }

    pub fn has_tab(&self, id: &str) -> bool {
        self.get_tab(id).is_some()
    }

    /// Tabs in display order.
    pub fn tabs(&self) -> &[TabEntry] {
        self.inner.get()
    }

    pub fn len(&self) -> usize {
        self.inner.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.get().is_empty()
    }

    /// Replace every tab. Duplicate ids within `entries` are not checked.
    pub fn set(&mut self, mut entries: Vec<TabEntry>) {
        for entry in &mut entries {
            entry.order = Some(entry.effective_order());
        }
        sort_tabs(&mut entries);
        self.inner.set(entries);
    }

    /// Remove every tab.
    pub fn clear(&mut self) {
        self.inner.set(Vec::new());
    }
}

fn sort_tabs(tabs: &mut [TabEntry]) {
    // `sort_by_key` is stable, which keeps ties in insertion order.
    tabs.sort_by_key(TabEntry::effective_order);
}
