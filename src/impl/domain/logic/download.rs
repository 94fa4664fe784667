use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::api_client::BinaryResponse,
        models::envelope_model::{decode_blob, BlobDecoding},
    },
    entities::Notifier,
    errors::WriteError,
};

/// Payloads below this size are checked for a JSON error body before being
/// treated as a file.
pub const SUSPICIOUS_SIZE_BYTES: usize = 1000;

const EXPORT_FAILED: &str = "Export failed";
const EXPORT_SUCCEEDED: &str = "Excel export succeeded";
const WRITE_FAILED: &str = "Excel export failed, please retry";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    /// The server answered with an error body; nothing was written.
    Rejected(String),
}

/// Saves Excel exports into a download directory.
pub struct ExcelDownloader {
    notifier: Arc<dyn Notifier>,
    target_dir: PathBuf,
}

impl ExcelDownloader {
    pub fn new(notifier: Arc<dyn Notifier>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            notifier,
            target_dir: target_dir.into(),
        }
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Writes `<target_dir>/<stem>.xlsx`, unless the payload turns out to be
    /// an error report in disguise.
    pub async fn download_excel(
        &self,
        response: &BinaryResponse,
        stem: &str,
    ) -> Result<DownloadOutcome, ServerError> {
        if let Some(message) = disguised_error(response) {
            tracing::warn!("Export of '{stem}' rejected by server: {message}");
            self.notifier.error(&message);
            return Ok(DownloadOutcome::Rejected(message));
        }

        let path = self.target_dir.join(format!("{stem}.xlsx"));
        match write_file(&path, &response.bytes).await {
            Ok(()) => {
                tracing::info!("Saved export to {}.", path.display());
                self.notifier.success(EXPORT_SUCCEEDED);
                Ok(DownloadOutcome::Saved(path))
            }
            Err(e) => {
                tracing::error!("Failed to save export to {}: {e:?}", path.display());
                self.notifier.error(WRITE_FAILED);
                Err(e)
            }
        }
    }
}

/// Error message carried by a binary payload that is really a JSON error
/// body.
fn disguised_error(response: &BinaryResponse) -> Option<String> {
    let declared_json = response
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.contains("application/json"));
    if !declared_json && response.bytes.len() >= SUSPICIOUS_SIZE_BYTES {
        return None;
    }
    match decode_blob(&response.bytes) {
        BlobDecoding::Json(message) => Some(message.unwrap_or_else(|| EXPORT_FAILED.to_string())),
        // A JSON content type is never a workbook, even when unparsable.
        BlobDecoding::NotJson if declared_json => Some(EXPORT_FAILED.to_string()),
        BlobDecoding::NotJson => None,
    }
}

async fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ServerError> {
    let path_str = path.to_string_lossy().to_string();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| WriteError::with_debug(&path_str, &e))?;
        }
    }
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| WriteError::with_debug(&path_str, &e))
}
