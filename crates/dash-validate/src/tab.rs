//! Tab entry checks.

use std::rc::Rc;

use dash_model::{TabComponent, TabEntry};
use serde_json::Value;

use crate::util::non_empty_str;

/// A tab registration as received from an embedding application.
///
/// `fields` holds `id`, `label` and the optional `icon` and `order` keys.
#[derive(Clone)]
pub struct TabCandidate {
    pub fields: Value,
    pub component: Option<Rc<dyn TabComponent>>,
}

impl TabCandidate {
    pub fn new(fields: Value, component: Option<Rc<dyn TabComponent>>) -> Self {
        Self { fields, component }
    }

    /// Identifier as given, if it is a string.
    pub fn id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }
}

/// Check a tab candidate: non-empty `id` and `label`, `icon` a string when
/// present, a component handle, and `order` a non-negative integer when
/// present.
pub fn validate_tab_entry(candidate: &TabCandidate) -> bool {
    parse_tab_entry(candidate).is_some()
}

/// Convert a tab candidate into a typed entry, or `None` if it is invalid.
pub fn parse_tab_entry(candidate: &TabCandidate) -> Option<TabEntry> {
    let fields = candidate.fields.as_object()?;
    let id = non_empty_str(fields.get("id"))?;
    let label = non_empty_str(fields.get("label"))?;
    let icon = match fields.get("icon") {
        None | Some(Value::Null) => None,
        Some(Value::String(icon)) => Some(icon.clone()),
        Some(_) => return None,
    };
    let order = match fields.get("order") {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.as_u64().and_then(|n| u32::try_from(n).ok())?),
    };
    let component = candidate.component.clone()?;

    Some(TabEntry {
        id: id.to_string(),
        label: label.to_string(),
        icon,
        component,
        order,
    })
}
