use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::entities::Navigator;

/// In-memory location history. The current path is the last entry.
#[derive(Debug)]
pub struct HistoryNavigator {
    history: Mutex<Vec<String>>,
    initial: String,
}

impl HistoryNavigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: Mutex::new(Vec::new()),
            initial: initial.into(),
        }
    }

    /// Every location navigated to, oldest first. The initial location is
    /// not included.
    pub fn history(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

#[async_trait]
impl Navigator for HistoryNavigator {
    async fn current_path(&self) -> String {
        self.lock()
            .last()
            .cloned()
            .unwrap_or_else(|| self.initial.clone())
    }

    async fn navigate_to(&self, path: &str) {
        tracing::debug!("Navigating to {path}.");
        self.lock().push(path.to_string());
    }
}
