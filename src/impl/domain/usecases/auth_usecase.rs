use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::{api::auth_api::AuthApi, datasources::api_client::ApiClient},
    domain::logic::session_store::SessionStore,
    entities::{LoginRequest, LoginResponse, UserInfo},
};

#[async_trait]
pub trait AuthUsecase: Send + Sync {
    /// Logs in and stores the issued session. With `remember`, the username
    /// is kept for the next login form.
    async fn login(
        &self,
        username: &str,
        password: &str,
        remember: bool,
    ) -> Result<LoginResponse, ServerError>;

    async fn user_info(&self) -> Result<UserInfo, ServerError>;

    /// Always ends logged out. With `call_api` the backend is told first,
    /// and an unreachable server does not stop the local logout.
    async fn logout(&self, call_api: bool) -> Result<(), ServerError>;
}

pub(crate) struct AuthUsecaseImpl {
    auth_api: AuthApi,
    session: Arc<SessionStore>,
}

impl AuthUsecaseImpl {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self {
            session: client.session().clone(),
            auth_api: AuthApi::new(client),
        }
    }
}

#[async_trait]
impl AuthUsecase for AuthUsecaseImpl {
    async fn login(
        &self,
        username: &str,
        password: &str,
        remember: bool,
    ) -> Result<LoginResponse, ServerError> {
        let response = self
            .auth_api
            .login(&LoginRequest::new(username, password))
            .await?;
        self.session
            .set_auth(response.token.clone(), response.permissions.clone())
            .await?;
        if remember {
            self.session.remember_username(username)?;
        } else {
            self.session.forget_username()?;
        }
        tracing::info!(username, "Logged in.");
        Ok(response)
    }

    async fn user_info(&self) -> Result<UserInfo, ServerError> {
        self.auth_api.user_info().await
    }

    async fn logout(&self, call_api: bool) -> Result<(), ServerError> {
        if call_api {
            self.session.logout(Some(|| self.auth_api.logout())).await?;
        } else {
            self.session.clear_auth().await?;
        }
        tracing::info!("Logged out.");
        Ok(())
    }
}
