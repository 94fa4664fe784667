use async_trait::async_trait;

// UI handlers.
// ---

/// Surfaces short user-facing messages (the "toast" of a graphical shell).
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
    fn success(&self, message: &str);
}

/// Owns the current location of the shell.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn current_path(&self) -> String;
    async fn navigate_to(&self, path: &str);
}
