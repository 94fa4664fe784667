use std::sync::Arc;

use fractic_server_error::ServerError;

use crate::{
    data::datasources::api_client::{ApiClient, ApiRequest},
    entities::{LoginRequest, LoginResponse, UserInfo},
};

pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ServerError> {
        self.client
            .call_data(ApiRequest::post("/admin/auth/login").json(request)?)
            .await
    }

    pub async fn user_info(&self) -> Result<UserInfo, ServerError> {
        self.client
            .call_data(ApiRequest::get("/admin/auth/info"))
            .await
    }

    pub async fn logout(&self) -> Result<(), ServerError> {
        self.client
            .call_unit(ApiRequest::post("/admin/auth/logout"))
            .await
    }
}
