use std::{future::Future, sync::Arc};

use fractic_server_error::ServerError;
use tokio::sync::RwLock;

use crate::{
    data::{
        datasources::storage_datasource::KeyValueStorage, models::jwt_claims_model::decode_claims,
    },
    entities::{Session, TokenClaims},
    errors::StorageUnavailable,
};

pub const TOKEN_KEY: &str = "token";
pub const PERMISSIONS_KEY: &str = "permissions";
pub const REMEMBERED_USERNAME_KEY: &str = "rememberedUsername";

/// Auth token and permission list, mirrored into durable storage.
pub struct SessionStore {
    state: RwLock<Session>,
    storage: Arc<dyn KeyValueStorage>,
}

impl SessionStore {
    /// Creates the store and restores any session left in `storage`.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let session = restore(storage.as_ref());
        Self {
            state: RwLock::new(session),
            storage,
        }
    }

    /// Stores a freshly issued token and permission list (after login).
    pub async fn set_auth(
        &self,
        token: impl Into<String>,
        permissions: Vec<String>,
    ) -> Result<(), ServerError> {
        let token = token.into();
        let permissions_json = serde_json::to_string(&permissions)
            .map_err(|e| StorageUnavailable::with_debug("could not encode permissions", &e))?;

        let mut state = self.state.write().await;
        state.token = token.clone();
        state.permissions = permissions;

        self.storage.set_item(TOKEN_KEY, &token)?;
        self.storage.set_item(PERMISSIONS_KEY, &permissions_json)?;
        Ok(())
    }

    /// Forgets the session in memory and in durable storage, including the
    /// remembered username.
    pub async fn clear_auth(&self) -> Result<(), ServerError> {
        let mut state = self.state.write().await;
        *state = Session::default();

        // Every key is attempted; the first failure is reported.
        [TOKEN_KEY, PERMISSIONS_KEY, REMEMBERED_USERNAME_KEY]
            .into_iter()
            .map(|key| self.storage.remove_item(key))
            .fold(Ok(()), |first, result| first.and(result))
    }

    /// Full logout. When `call_api` is given, the backend logout is attempted
    /// first; its failure never prevents the local session from being
    /// cleared.
    pub async fn logout<F, Fut, T>(&self, call_api: Option<F>) -> Result<(), ServerError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ServerError>>,
    {
        if let Some(call_api) = call_api {
            if let Err(e) = call_api().await {
                tracing::warn!("Backend logout failed, continuing with local logout: {e:?}");
            }
        }
        self.clear_auth().await
    }

    pub async fn token(&self) -> String {
        self.state.read().await.token.clone()
    }

    pub async fn permissions(&self) -> Vec<String> {
        self.state.read().await.permissions.clone()
    }

    pub async fn snapshot(&self) -> Session {
        self.state.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    pub async fn has_permission(&self, permission: &str) -> bool {
        self.state.read().await.has_permission(permission)
    }

    pub async fn has_any_permission<S: AsRef<str>>(&self, permissions: &[S]) -> bool {
        self.state.read().await.has_any_permission(permissions)
    }

    /// Claims of the current token, or `None` when logged out.
    pub async fn claims(&self) -> Result<Option<TokenClaims>, ServerError> {
        let state = self.state.read().await;
        if !state.is_authenticated() {
            return Ok(None);
        }
        decode_claims(&state.token).map(Some)
    }

    pub fn remember_username(&self, username: &str) -> Result<(), ServerError> {
        self.storage.set_item(REMEMBERED_USERNAME_KEY, username)
    }

    pub fn forget_username(&self) -> Result<(), ServerError> {
        self.storage.remove_item(REMEMBERED_USERNAME_KEY)
    }

    pub fn remembered_username(&self) -> Result<Option<String>, ServerError> {
        self.storage.get_item(REMEMBERED_USERNAME_KEY)
    }
}

fn restore(storage: &dyn KeyValueStorage) -> Session {
    let token = match storage.get_item(TOKEN_KEY) {
        Ok(token) => token.unwrap_or_default(),
        Err(e) => {
            tracing::error!("Failed to restore token from storage: {e:?}");
            String::new()
        }
    };
    let permissions = match storage.get_item(PERMISSIONS_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::error!("Failed to parse stored permission list: {e}");
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::error!("Failed to restore permissions from storage: {e:?}");
            Vec::new()
        }
    };
    Session { token, permissions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::datasources::storage_datasource::{FileStorage, MemoryStorage};
    use crate::errors::NetworkError;
    use tempfile::TempDir;

    fn memory_store() -> (SessionStore, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (SessionStore::new(storage.clone()), storage)
    }

    #[tokio::test]
    async fn test_login_grants_listed_permissions_only() {
        let (store, _) = memory_store();
        store
            .set_auth("abc", vec!["voucher:edit".to_string()])
            .await
            .unwrap();

        assert!(store.is_authenticated().await);
        assert!(store.has_permission("voucher:edit").await);
        assert!(!store.has_permission("other").await);
        assert!(store.has_any_permission(&["other", "voucher:edit"]).await);
        assert!(!store.has_any_permission(&["other"]).await);
    }

    #[tokio::test]
    async fn test_empty_token_is_not_authenticated() {
        let (store, _) = memory_store();
        assert!(!store.is_authenticated().await);
        store.set_auth("", Vec::new()).await.unwrap();
        assert!(!store.is_authenticated().await);
    }

    /// Memory storage that refuses to remove one key.
    struct StuckKeyStorage {
        inner: MemoryStorage,
        stuck: &'static str,
    }

    impl KeyValueStorage for StuckKeyStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, ServerError> {
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), ServerError> {
            self.inner.set_item(key, value)
        }

        fn remove_item(&self, key: &str) -> Result<(), ServerError> {
            if key == self.stuck {
                return Err(StorageUnavailable::new("key is locked"));
            }
            self.inner.remove_item(key)
        }
    }

    #[tokio::test]
    async fn test_clear_auth_attempts_every_key_after_a_failure() {
        let storage = Arc::new(StuckKeyStorage {
            inner: MemoryStorage::new(),
            stuck: TOKEN_KEY,
        });
        let store = SessionStore::new(storage.clone());
        store
            .set_auth("abc", vec!["voucher:edit".to_string()])
            .await
            .unwrap();
        store.remember_username("alice").unwrap();

        assert!(store.clear_auth().await.is_err());

        assert!(!store.is_authenticated().await);
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
        assert_eq!(storage.get_item(PERMISSIONS_KEY).unwrap(), None);
        assert_eq!(storage.get_item(REMEMBERED_USERNAME_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_auth_removes_durable_copies() {
        let (store, storage) = memory_store();
        store
            .set_auth("abc", vec!["voucher:edit".to_string()])
            .await
            .unwrap();
        store.remember_username("alice").unwrap();

        store.clear_auth().await.unwrap();

        assert!(!store.is_authenticated().await);
        assert!(store.permissions().await.is_empty());
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap(), None);
        assert_eq!(storage.get_item(PERMISSIONS_KEY).unwrap(), None);
        assert_eq!(storage.get_item(REMEMBERED_USERNAME_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_session_restored_across_reloads() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("client.ron");

        let store = SessionStore::new(Arc::new(FileStorage::new(&path)));
        store
            .set_auth("abc", vec!["voucher:edit".to_string()])
            .await
            .unwrap();
        drop(store);

        let reloaded = SessionStore::new(Arc::new(FileStorage::new(&path)));
        assert!(reloaded.is_authenticated().await);
        assert_eq!(reloaded.token().await, "abc");
        assert!(reloaded.has_permission("voucher:edit").await);
    }

    #[tokio::test]
    async fn test_corrupt_permission_list_restores_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(TOKEN_KEY, "abc").unwrap();
        storage.set_item(PERMISSIONS_KEY, "not json").unwrap();

        let store = SessionStore::new(storage);
        assert!(store.is_authenticated().await);
        assert!(store.permissions().await.is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_backend_fails() {
        let (store, _) = memory_store();
        store.set_auth("abc", Vec::new()).await.unwrap();

        store
            .logout(Some(|| async { Err::<(), _>(NetworkError::new()) }))
            .await
            .unwrap();

        assert!(!store.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_claims_absent_when_logged_out() {
        let (store, _) = memory_store();
        assert_eq!(store.claims().await.unwrap(), None);
    }
}
