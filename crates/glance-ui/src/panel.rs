//! Named display panels.
//!
//! The registry is the display surface the widgets write into. Panels are
//! registered once at startup; writing to an unregistered panel is
//! non-fatal and leaves the registry untouched, so a missing target never
//! takes a widget's ticker down.

use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct PanelRegistry {
    panels: RwLock<HashMap<String, String>>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a panel with empty content.
    pub fn register(&self, id: impl Into<String>) {
        self.panels.write().insert(id.into(), String::new());
    }

    /// Replace a panel's content. Returns false if the panel is not
    /// registered; the caller decides whether that is worth a warning.
    pub fn set_content(&self, id: &str, content: impl Into<String>) -> bool {
        let mut panels = self.panels.write();
        match panels.get_mut(id) {
            Some(slot) => {
                *slot = content.into();
                true
            }
            None => false,
        }
    }

    /// Current content of a panel, if registered.
    pub fn content(&self, id: &str) -> Option<String> {
        self.panels.read().get(id).cloned()
    }

    /// All panels and their content, sorted by id.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        let mut entries: Vec<_> = self
            .panels
            .read()
            .iter()
            .map(|(id, content)| (id.clone(), content.clone()))
            .collect();
        entries.sort();
        entries
    }
}
