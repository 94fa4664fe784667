use std::{path::PathBuf, time::Duration};

use fractic_server_error::ServerError;
use iso_currency::Currency;
use serde_derive::{Deserialize, Serialize};

use crate::errors::{InvalidConfig, InvalidIsoCurrencyCode, InvalidRon, ReadError};

pub const BASE_API_ENV: &str = "KYLIN_FINANCE_BASE_API";
pub const TIMEOUT_MS_ENV: &str = "KYLIN_FINANCE_TIMEOUT_MS";

/// Local development proxy, used when no address was baked in at build time.
const DEV_BASE_API: &str = "http://localhost:5173/dev-api";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_CURRENCY: &str = "CNY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_api: String,
    pub timeout_ms: u64,
    /// File backing the persisted session. In-memory when absent.
    pub storage_path: Option<PathBuf>,
    pub download_dir: PathBuf,
    /// ISO 4217 code used when rendering amounts.
    pub currency: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_api: option_env!("KYLIN_FINANCE_BASE_API")
                .unwrap_or(DEV_BASE_API)
                .to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            storage_path: None,
            download_dir: PathBuf::from("."),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_ron_str(ron_str: &str) -> Result<Self, ServerError> {
        ron::from_str(ron_str).map_err(|e| InvalidRon::with_debug("client config", &e))
    }

    pub async fn from_ron_file(path: impl AsRef<std::path::Path>) -> Result<Self, ServerError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        Self::from_ron_str(&content)
    }

    /// Defaults, then environment overrides.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(self) -> Result<Self, ServerError> {
        self.with_overrides(
            std::env::var(BASE_API_ENV).ok(),
            std::env::var(TIMEOUT_MS_ENV).ok(),
        )
    }

    fn with_overrides(
        mut self,
        base_api: Option<String>,
        timeout_ms: Option<String>,
    ) -> Result<Self, ServerError> {
        if let Some(base_api) = base_api.filter(|s| !s.trim().is_empty()) {
            self.base_api = base_api.trim().to_string();
        }
        if let Some(raw) = timeout_ms {
            self.timeout_ms = raw.trim().parse().map_err(|e| {
                InvalidConfig::with_debug(&format!("{TIMEOUT_MS_ENV}='{raw}'"), &e)
            })?;
        }
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn currency(&self) -> Result<Currency, ServerError> {
        Currency::from_code(&self.currency)
            .ok_or_else(|| InvalidIsoCurrencyCode::new(&self.currency))
    }
}
