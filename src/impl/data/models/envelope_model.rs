use serde::de::DeserializeOwned;
use serde_derive::Deserialize;
use serde_json::Value;

/// Wire shape of every non-binary response: `{code, msg, data}`.
#[derive(Debug, Deserialize)]
pub(crate) struct EnvelopeModel {
    pub code: Option<i64>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Value,
}

impl EnvelopeModel {
    pub(crate) fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }

    /// Envelope message, preferring `msg` over `message`.
    pub(crate) fn message(&self) -> Option<&str> {
        non_empty(self.msg.as_deref()).or_else(|| non_empty(self.message.as_deref()))
    }

    pub(crate) fn take_data<T: DeserializeOwned>(&mut self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.take())
    }
}

/// Error message carried by a JSON error body (HTTP error responses), which
/// prefers `message` over `msg`.
pub(crate) fn error_body_message(value: &Value) -> Option<String> {
    let field = |key: &str| non_empty(value.get(key).and_then(Value::as_str)).map(str::to_string);
    field("message").or_else(|| field("msg"))
}

/// Outcome of decoding a binary payload that may actually be a JSON error.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum BlobDecoding {
    /// The payload parsed as JSON; carries `msg` or `message` if present.
    Json(Option<String>),
    NotJson,
}

/// Decodes a binary payload as text and tries to parse it as JSON, the way an
/// export endpoint reports failures when it cannot produce a file.
pub(crate) fn decode_blob(bytes: &[u8]) -> BlobDecoding {
    let text = String::from_utf8_lossy(bytes);
    match serde_json::from_str::<Value>(&text) {
        Ok(value) => {
            let field =
                |key: &str| non_empty(value.get(key).and_then(Value::as_str)).map(str::to_string);
            BlobDecoding::Json(field("msg").or_else(|| field("message")))
        }
        Err(_) => BlobDecoding::NotJson,
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_message_prefers_msg() {
        let envelope =
            EnvelopeModel::parse(br#"{"code":500,"msg":"voucher unbalanced","message":"x"}"#)
                .unwrap();
        assert_eq!(envelope.code, Some(500));
        assert_eq!(envelope.message(), Some("voucher unbalanced"));

        let envelope = EnvelopeModel::parse(br#"{"code":500,"msg":"","message":"fallback"}"#)
            .unwrap();
        assert_eq!(envelope.message(), Some("fallback"));
    }

    #[test]
    fn test_envelope_data_defaults_to_null() {
        let mut envelope = EnvelopeModel::parse(br#"{"code":200,"msg":"ok"}"#).unwrap();
        let data: Option<i64> = envelope.take_data().unwrap();
        assert_eq!(data, None);
    }

    #[test]
    fn test_error_body_message_prefers_message() {
        let body = json!({"msg": "short", "message": "Internal Server Error"});
        assert_eq!(
            error_body_message(&body).as_deref(),
            Some("Internal Server Error")
        );
        assert_eq!(error_body_message(&json!({"status": 500})), None);
    }

    #[test]
    fn test_decode_blob() {
        assert_eq!(
            decode_blob(br#"{"msg":"no data"}"#),
            BlobDecoding::Json(Some("no data".to_string()))
        );
        assert_eq!(decode_blob(b"[1,2]"), BlobDecoding::Json(None));
        assert_eq!(decode_blob(b"PK\x03\x04binary"), BlobDecoding::NotJson);
    }
}
