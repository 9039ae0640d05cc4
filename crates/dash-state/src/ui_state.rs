//! UI state - completely separated from storage data.
//!
//! Any well-typed value is accepted; there is nothing to validate.

use dash_model::{Theme, UiSnapshot};

use crate::observable::{Observable, Subscription};

/// Transient UI flags.
pub struct UiState {
    inner: Observable<UiSnapshot>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            inner: Observable::new(UiSnapshot::default()),
        }
    }

    pub fn subscribe(&self, observer: impl FnMut(&UiSnapshot) + 'static) -> Subscription {
        self.inner.subscribe(observer)
    }

    /// Copy of the current flags.
    pub fn snapshot(&self) -> UiSnapshot {
        self.inner.get().clone()
    }

    /// Select a tab. The id is not checked against the tab registry.
    pub fn set_active_tab(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.inner.update(|ui| ui.active_tab_id = id);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.inner.update(|ui| ui.theme = theme);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.inner.update(|ui| ui.is_loading = loading);
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.inner.update(|ui| ui.error = error);
    }

    pub fn clear_error(&mut self) {
        self.set_error(None);
    }

    /// Restore default flags.
    pub fn reset(&mut self) {
        self.inner.set(UiSnapshot::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn setters_preserve_other_fields() {
        let mut ui = UiState::new();
        ui.set_theme(Theme::Dark);
        ui.set_loading(true);
        ui.set_active_tab("files");
        ui.set_error(Some("boom".to_string()));

        let snapshot = ui.snapshot();
        assert_eq!(snapshot.theme, Theme::Dark);
        assert!(snapshot.is_loading);
        assert_eq!(snapshot.active_tab_id, "files");
        assert_eq!(snapshot.error.as_deref(), Some("boom"));

        ui.clear_error();
        let snapshot = ui.snapshot();
        assert!(snapshot.error.is_none());
        assert_eq!(snapshot.theme, Theme::Dark);
    }

    #[test]
    fn each_setter_notifies_once() {
        let mut ui = UiState::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = ui.subscribe(move |s| sink.borrow_mut().push(s.is_loading));

        ui.set_loading(true);
        ui.set_loading(false);

        assert_eq!(*seen.borrow(), vec![false, true, false]);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut ui = UiState::new();
        ui.set_theme(Theme::Light);
        ui.set_active_tab("type-breakdown");
        ui.reset();
        assert_eq!(ui.snapshot(), UiSnapshot::default());
    }
}
