use std::fmt;
use std::rc::Rc;

use crate::storage::StorageSnapshot;
use crate::ui::UiSnapshot;

/// Order assigned to tabs registered without one.
pub const DEFAULT_TAB_ORDER: u32 = 100;

/// Something a dashboard tab can mount.
///
/// The registry only checks that a component is present; it never calls
/// into it. Front ends render the active tab through this trait.
pub trait TabComponent {
    /// Render the tab body for the given state.
    fn render(&self, storage: &StorageSnapshot, ui: &UiSnapshot) -> String;
}

/// One registered dashboard tab.
#[derive(Clone)]
pub struct TabEntry {
    /// Registry-unique identifier.
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub component: Rc<dyn TabComponent>,
    /// Sort priority, ascending. `None` means [`DEFAULT_TAB_ORDER`].
    pub order: Option<u32>,
}

impl TabEntry {
    /// Create an entry with no icon and default order.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        component: Rc<dyn TabComponent>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            component,
            order: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    /// Order used for sorting.
    pub fn effective_order(&self) -> u32 {
        self.order.unwrap_or(DEFAULT_TAB_ORDER)
    }
}

impl fmt::Debug for TabEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabEntry")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}
