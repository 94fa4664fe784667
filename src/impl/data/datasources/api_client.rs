use std::{fmt::Display, sync::Arc, time::Duration};

use chrono::NaiveDate;

use fractic_server_error::ServerError;
use reqwest::Method;
use serde::{de::DeserializeOwned, de::IgnoredAny, Serialize};
use serde_json::Value;

use crate::{
    data::{
        datasources::http_transport::{
            validate_base_api, HttpRequest, HttpResponse, HttpTransport, RequestBody,
            TransportFailure,
        },
        models::{
            envelope_model::{error_body_message, EnvelopeModel},
            iso_date_model::ISODateModel,
        },
    },
    domain::logic::session_store::SessionStore,
    entities::{Navigator, Notifier},
    errors::{
        BusinessError, InvalidResponse, NetworkError, RequestFailed, RequestTimeout,
        SessionExpired, Unauthorized,
    },
};

pub const LOGIN_PATH: &str = "/login";
pub const LOGIN_INDEX_PATH: &str = "/login/index";

const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";
const DEFAULT_FAILURE_MESSAGE: &str = "Request failed";
const TIMEOUT_MESSAGE: &str = "Request timed out, please try again later.";
const NETWORK_MESSAGE: &str = "Network connection failed, please check network settings.";

/// Unwrapped `{code, msg, data}` envelope of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub code: i64,
    pub msg: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Raw payload of a binary (file export) call.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// One call to the backend, relative to the configured base address.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: RequestBody,
    binary: bool,
    quiet_not_found: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
            binary: false,
            quiet_not_found: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, key: &str, value: impl Display) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds the parameter only when a value is present.
    pub fn query_opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Date parameter in the backend's `YYYY-MM-DD` form.
    pub fn query_date(self, key: &str, date: NaiveDate) -> Self {
        self.query(key, ISODateModel::from(date))
    }

    pub fn query_date_opt(self, key: &str, date: Option<NaiveDate>) -> Self {
        self.query_opt(key, date.map(ISODateModel::from))
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ServerError> {
        let value = serde_json::to_value(body).map_err(|e| {
            InvalidResponse::with_debug(&format!("could not encode body for {}", self.path), &e)
        })?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn form(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = RequestBody::Form(fields);
        self
    }

    pub fn bytes(mut self, bytes: Vec<u8>) -> Self {
        self.body = RequestBody::Bytes(bytes);
        self
    }

    /// Expects a file instead of an envelope.
    pub fn binary(mut self) -> Self {
        self.binary = true;
        self
    }

    /// A 404 is reported to the caller only, without a toast.
    pub fn quiet_not_found(mut self) -> Self {
        self.quiet_not_found = true;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> &Method {
        &self.method
    }
}

/// The configured request pipeline shared by every API module.
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    session: Arc<SessionStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    base_api: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        session: Arc<SessionStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        base_api: &str,
        timeout: Duration,
    ) -> Result<Self, ServerError> {
        validate_base_api(base_api)?;
        Ok(Self {
            transport,
            session,
            notifier,
            navigator,
            base_api: base_api.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// Sends the request and unwraps the response envelope.
    pub async fn call<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<ApiResponse<T>, ServerError> {
        let quiet_not_found = request.quiet_not_found;
        let path = request.path.clone();
        let response = self.dispatch(request).await?;

        let Some(mut envelope) = EnvelopeModel::parse(&response.body) else {
            return Err(self.reject_business(DEFAULT_FAILURE_MESSAGE, quiet_not_found, &response));
        };
        match envelope.code {
            Some(401) => {
                self.handle_unauthorized().await;
                Err(SessionExpired::new())
            }
            Some(200) => {
                let msg = envelope.message().map(str::to_string);
                let data = envelope.take_data::<T>().map_err(|e| {
                    tracing::error!("Malformed payload from {path}: {e}");
                    self.notifier.error(DEFAULT_FAILURE_MESSAGE);
                    InvalidResponse::with_debug(&format!("malformed payload from {path}"), &e)
                })?;
                Ok(ApiResponse {
                    code: 200,
                    msg,
                    data,
                })
            }
            _ => {
                let message = envelope
                    .message()
                    .unwrap_or(DEFAULT_FAILURE_MESSAGE)
                    .to_string();
                Err(self.reject_business(&message, quiet_not_found, &response))
            }
        }
    }

    /// Like [`ApiClient::call`], keeping only the payload.
    pub async fn call_data<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, ServerError> {
        self.call(request).await.map(ApiResponse::into_data)
    }

    /// For endpoints whose payload carries nothing the caller needs.
    pub async fn call_unit(&self, request: ApiRequest) -> Result<(), ServerError> {
        self.call::<IgnoredAny>(request).await.map(|_| ())
    }

    /// Sends a binary request and passes the payload through untouched.
    pub async fn download(&self, request: ApiRequest) -> Result<BinaryResponse, ServerError> {
        let response = self.dispatch(request.binary()).await?;
        Ok(BinaryResponse {
            status: response.status,
            content_type: response.content_type().map(str::to_string),
            bytes: response.body,
        })
    }

    // Pipeline.
    // ---

    /// Request phase, transport, and error phase. Only 2xx responses come
    /// back as `Ok`.
    async fn dispatch(&self, request: ApiRequest) -> Result<HttpResponse, ServerError> {
        let binary = request.binary;
        let quiet_not_found = request.quiet_not_found;
        let http_request = self.prepare(request).await;
        tracing::debug!(
            method = %http_request.method,
            url = %http_request.url,
            "Dispatching request."
        );

        match self.transport.send(http_request).await {
            Ok(response) if response.is_success() => Ok(response),
            Ok(response) => Err(self.reject_http(response, binary, quiet_not_found).await),
            Err(TransportFailure::Timeout) => {
                tracing::warn!("Request timed out.");
                self.notifier.error(TIMEOUT_MESSAGE);
                Err(RequestTimeout::new())
            }
            Err(TransportFailure::Network(details)) => {
                tracing::warn!("Network failure: {details}");
                self.notifier.error(NETWORK_MESSAGE);
                Err(NetworkError::with_debug(&details))
            }
        }
    }

    async fn prepare(&self, request: ApiRequest) -> HttpRequest {
        let mut headers = request.headers;
        headers.push((
            "X-Requested-With".to_string(),
            "XMLHttpRequest".to_string(),
        ));

        let token = self.session.token().await;
        if !token.is_empty() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        if matches!(request.body, RequestBody::Json(_))
            && !headers
                .iter()
                .any(|(k, _)| k.eq_ignore_ascii_case("content-type"))
        {
            headers.push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
        }

        HttpRequest {
            method: request.method,
            url: format!("{}{}", self.base_api, request.path),
            query: request.query,
            headers,
            body: request.body,
            timeout: self.timeout,
        }
    }

    fn reject_business(
        &self,
        message: &str,
        quiet_not_found: bool,
        response: &HttpResponse,
    ) -> ServerError {
        if !(quiet_not_found && response.status == 404) {
            self.notifier.error(message);
        }
        BusinessError::new(message)
    }

    async fn reject_http(
        &self,
        response: HttpResponse,
        binary: bool,
        quiet_not_found: bool,
    ) -> ServerError {
        if response.status == 401 {
            self.handle_unauthorized().await;
            return Unauthorized::new();
        }
        let message = http_error_message(&response, binary);
        if response.status == 404 && quiet_not_found {
            tracing::debug!("Not found (quiet): {message}");
            return RequestFailed::new(&message);
        }
        tracing::warn!(status = response.status, "Request failed: {message}");
        self.notifier.error(&message);
        RequestFailed::new(&message)
    }

    /// Clears the session and sends the user to the login page, unless they
    /// are already there. Safe to run once per concurrent 401.
    async fn handle_unauthorized(&self) {
        tracing::warn!("Session rejected by the server, logging out.");
        if let Err(e) = self.session.clear_auth().await {
            tracing::error!("Failed to clear session after 401: {e:?}");
        }
        let current = self.navigator.current_path().await;
        let current = current.split('?').next().unwrap_or_default();
        if current != LOGIN_PATH && current != LOGIN_INDEX_PATH {
            self.navigator.navigate_to(LOGIN_PATH).await;
        }
    }
}

fn http_error_message(response: &HttpResponse, binary: bool) -> String {
    let fallback = || format!("{DEFAULT_FAILURE_MESSAGE} ({})", response.status);
    if binary {
        let text = String::from_utf8_lossy(&response.body);
        return serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|value| error_body_message(&value))
            .unwrap_or_else(fallback);
    }
    match serde_json::from_slice::<Value>(&response.body) {
        Ok(value @ Value::Object(_)) => error_body_message(&value).unwrap_or_else(fallback),
        Ok(Value::String(text)) if !text.is_empty() => text,
        Ok(_) => fallback(),
        Err(_) => {
            let text = String::from_utf8_lossy(&response.body).trim().to_string();
            if text.is_empty() {
                fallback()
            } else {
                text
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{json_response, Harness};

    #[derive(Debug, serde_derive::Deserialize, PartialEq)]
    struct Ping {
        pong: bool,
    }

    #[tokio::test]
    async fn test_request_carries_marker_and_bearer_token() {
        let harness = Harness::new(vec![json_response(200, r#"{"code":200,"data":null}"#)]);
        harness.login("abc", &[]).await;

        harness
            .client
            .call_unit(ApiRequest::post("/x").json(&serde_json::json!({"a": 1})).unwrap())
            .await
            .unwrap();

        let sent = harness.transport.last_request();
        assert_eq!(sent.url, "http://api.test/dev-api/x");
        assert_eq!(sent.header("X-Requested-With"), Some("XMLHttpRequest"));
        assert_eq!(sent.header("Authorization"), Some("Bearer abc"));
        assert_eq!(sent.header("Content-Type"), Some(JSON_CONTENT_TYPE));
    }

    #[tokio::test]
    async fn test_no_token_no_authorization_header() {
        let harness = Harness::new(vec![json_response(200, r#"{"code":200,"data":null}"#)]);
        harness
            .client
            .call_unit(ApiRequest::get("/x").query("a", 1))
            .await
            .unwrap();

        let sent = harness.transport.last_request();
        assert_eq!(sent.header("Authorization"), None);
        assert_eq!(sent.header("Content-Type"), None);
        assert_eq!(sent.query, vec![("a".to_string(), "1".to_string())]);
    }

    #[tokio::test]
    async fn test_caller_content_type_is_kept() {
        let harness = Harness::new(vec![json_response(200, r#"{"code":200,"data":null}"#)]);
        harness
            .client
            .call_unit(
                ApiRequest::post("/x")
                    .header("content-type", "text/plain")
                    .json(&1)
                    .unwrap(),
            )
            .await
            .unwrap();

        let sent = harness.transport.last_request();
        assert_eq!(sent.header("Content-Type"), Some("text/plain"));
        assert_eq!(
            sent.headers
                .iter()
                .filter(|(k, _)| k.eq_ignore_ascii_case("content-type"))
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn test_success_envelope_resolves_with_data() {
        let harness = Harness::new(vec![json_response(
            200,
            r#"{"code":200,"msg":"ok","data":{"pong":true}}"#,
        )]);
        let response = harness
            .client
            .call::<Ping>(ApiRequest::get("/ping"))
            .await
            .unwrap();
        assert_eq!(response.code, 200);
        assert_eq!(response.msg.as_deref(), Some("ok"));
        assert_eq!(response.data, Ping { pong: true });
        assert!(harness.notifier.errors().is_empty());
    }

    #[tokio::test]
    async fn test_business_error_toasts_message_once() {
        let harness = Harness::new(vec![json_response(
            200,
            r#"{"code":500,"msg":"Voucher is not balanced"}"#,
        )]);
        let result = harness.client.call_unit(ApiRequest::get("/x")).await;

        assert!(result.is_err());
        assert_eq!(harness.notifier.errors(), vec!["Voucher is not balanced"]);
    }

    #[tokio::test]
    async fn test_business_error_without_message_uses_fallback() {
        let harness = Harness::new(vec![json_response(200, r#"{"code":500}"#)]);
        assert!(harness.client.call_unit(ApiRequest::get("/x")).await.is_err());
        assert_eq!(harness.notifier.errors(), vec![DEFAULT_FAILURE_MESSAGE]);
    }

    #[tokio::test]
    async fn test_envelope_401_clears_session_and_redirects() {
        let harness = Harness::new(vec![json_response(200, r#"{"code":401,"msg":"expired"}"#)]);
        harness.login("abc", &["voucher:edit"]).await;
        harness.navigator.navigate_to("/reports/trial-balance").await;

        let result = harness.client.call_unit(ApiRequest::get("/x")).await;

        assert!(result.is_err());
        assert!(!harness.session.is_authenticated().await);
        assert_eq!(harness.navigator.current_path().await, LOGIN_PATH);
        assert!(harness.notifier.errors().is_empty());
    }

    #[tokio::test]
    async fn test_http_401_on_login_page_does_not_navigate() {
        let harness = Harness::new(vec![json_response(401, "")]);
        harness.login("abc", &[]).await;
        harness.navigator.navigate_to("/login?redirect=/accounts").await;

        assert!(harness.client.call_unit(ApiRequest::get("/x")).await.is_err());

        assert!(!harness.session.is_authenticated().await);
        assert_eq!(harness.navigator.history(), vec!["/login?redirect=/accounts"]);
        assert!(harness.notifier.errors().is_empty());
    }

    #[tokio::test]
    async fn test_quiet_not_found_does_not_toast() {
        let harness = Harness::new(vec![
            json_response(404, r#"{"message":"missing"}"#),
            json_response(404, r#"{"message":"missing"}"#),
        ]);
        assert!(harness
            .client
            .call_unit(ApiRequest::get("/x").quiet_not_found())
            .await
            .is_err());
        assert!(harness.notifier.errors().is_empty());

        assert!(harness.client.call_unit(ApiRequest::get("/x")).await.is_err());
        assert_eq!(harness.notifier.errors(), vec!["missing"]);
    }

    #[tokio::test]
    async fn test_http_error_message_extraction() {
        let harness = Harness::new(vec![
            json_response(500, r#"{"msg":"short","message":"Server exploded"}"#),
            json_response(502, "Bad Gateway"),
            json_response(503, ""),
        ]);
        for _ in 0..3 {
            assert!(harness.client.call_unit(ApiRequest::get("/x")).await.is_err());
        }
        assert_eq!(
            harness.notifier.errors(),
            vec!["Server exploded", "Bad Gateway", "Request failed (503)"]
        );
    }

    #[tokio::test]
    async fn test_binary_error_body_is_decoded() {
        let harness = Harness::new(vec![json_response(500, r#"{"msg":"Period not closed"}"#)]);
        let result = harness
            .client
            .download(ApiRequest::get("/finance/report/balance-sheet/export"))
            .await;
        assert!(result.is_err());
        assert_eq!(harness.notifier.errors(), vec!["Period not closed"]);
    }

    #[tokio::test]
    async fn test_binary_success_passes_through() {
        let harness = Harness::new(vec![HttpResponse {
            status: 200,
            headers: vec![(
                "content-type".to_string(),
                "application/vnd.ms-excel".to_string(),
            )],
            body: b"PK\x03\x04".to_vec(),
        }]);
        let response = harness
            .client
            .download(ApiRequest::get("/export"))
            .await
            .unwrap();
        assert_eq!(response.bytes, b"PK\x03\x04".to_vec());
        assert_eq!(
            response.content_type.as_deref(),
            Some("application/vnd.ms-excel")
        );
    }

    #[tokio::test]
    async fn test_transport_failures_toast_fixed_messages() {
        let harness = Harness::with_results(vec![
            Err(TransportFailure::Timeout),
            Err(TransportFailure::Network("connection refused".to_string())),
        ]);
        assert!(harness.client.call_unit(ApiRequest::get("/x")).await.is_err());
        assert!(harness.client.call_unit(ApiRequest::get("/x")).await.is_err());
        assert_eq!(
            harness.notifier.errors(),
            vec![TIMEOUT_MESSAGE, NETWORK_MESSAGE]
        );
    }

    #[tokio::test]
    async fn test_malformed_payload_is_rejected() {
        let harness = Harness::new(vec![json_response(200, r#"{"code":200,"data":{"x":1}}"#)]);
        assert!(harness
            .client
            .call::<Ping>(ApiRequest::get("/ping"))
            .await
            .is_err());
        assert_eq!(harness.notifier.errors().len(), 1);
    }

    #[test]
    fn test_query_opt_skips_absent_values() {
        let request = ApiRequest::get("/x")
            .query_opt("a", Some(1))
            .query_opt::<i64>("b", None);
        assert_eq!(request.query, vec![("a".to_string(), "1".to_string())]);
    }
}
