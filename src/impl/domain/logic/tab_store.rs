use crate::entities::TabItem;

/// Open tabs in display order, plus the active one.
#[derive(Debug, Clone, Default)]
pub struct TabStore {
    tabs: Vec<TabItem>,
    active_id: Option<String>,
}

impl TabStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &[TabItem] {
        &self.tabs
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active_tab(&self) -> Option<&TabItem> {
        let active_id = self.active_id.as_deref()?;
        self.tabs.iter().find(|t| t.id == active_id)
    }

    /// Opens `tab` and activates it. A tab already open on the same path is
    /// activated instead of opening a duplicate.
    pub fn add_tab(&mut self, tab: TabItem) {
        if let Some(existing) = self.tabs.iter().find(|t| t.path == tab.path) {
            let id = existing.id.clone();
            self.set_active_tab(&id);
            return;
        }
        let id = tab.id.clone();
        self.tabs.push(tab);
        self.set_active_tab(&id);
    }

    /// Closes the tab. If it was active, the tab that slides into its
    /// position (or the new last tab) becomes active.
    pub fn remove_tab(&mut self, id: &str) {
        let Some(index) = self.tabs.iter().position(|t| t.id == id) else {
            return;
        };
        self.tabs.remove(index);

        if self.active_id.as_deref() != Some(id) {
            return;
        }
        match self.tabs.len() {
            0 => self.active_id = None,
            len => {
                let next = self.tabs[index.min(len - 1)].id.clone();
                self.set_active_tab(&next);
            }
        }
    }

    pub fn set_active_tab(&mut self, id: &str) {
        for tab in &mut self.tabs {
            tab.active = tab.id == id;
        }
        self.active_id = Some(id.to_string());
    }

    /// Keeps only `id`, which becomes active.
    pub fn close_others(&mut self, id: &str) {
        self.tabs.retain(|t| t.id == id);
        self.set_active_tab(id);
    }

    pub fn close_all(&mut self) {
        self.tabs.clear();
        self.active_id = None;
    }
}
