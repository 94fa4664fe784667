use std::sync::{Mutex, PoisonError};

use crate::entities::Notifier;

/// Routes toasts to `tracing`, for shells without a UI.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::error!(target: "kylin_finance_client::toast", "{message}");
    }

    fn success(&self, message: &str) {
        tracing::info!(target: "kylin_finance_client::toast", "{message}");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toast {
    Error(String),
    Success(String),
}

/// Keeps every toast in memory so a shell can drain and render them later.
#[derive(Debug, Default)]
pub struct BufferedNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl BufferedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.lock().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|t| match t {
                Toast::Error(m) => Some(m.clone()),
                Toast::Success(_) => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|t| match t {
                Toast::Success(m) => Some(m.clone()),
                Toast::Error(_) => None,
            })
            .collect()
    }

    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Toast>> {
        // A toast list is still usable after a panicking writer.
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for BufferedNotifier {
    fn error(&self, message: &str) {
        self.lock().push(Toast::Error(message.to_string()));
    }

    fn success(&self, message: &str) {
        self.lock().push(Toast::Success(message.to_string()));
    }
}
