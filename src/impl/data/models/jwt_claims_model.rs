use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::DateTime;
use fractic_server_error::ServerError;
use serde_derive::Deserialize;

use crate::{entities::TokenClaims, errors::InvalidToken};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JwtPayloadModel {
    user_id: Option<i64>,
    username: Option<String>,
    sub: Option<String>,
    iat: Option<i64>,
    exp: Option<i64>,
}

/// Decodes the payload segment of a JWT. The signature is not verified; the
/// backend remains the authority on whether the token is valid.
pub(crate) fn decode_claims(token: &str) -> Result<TokenClaims, ServerError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| InvalidToken::new("missing payload segment"))?;
    // Some encoders keep the padding.
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| InvalidToken::with_debug("payload is not base64url", &e))?;
    let model: JwtPayloadModel = serde_json::from_slice(&bytes)
        .map_err(|e| InvalidToken::with_debug("payload is not JSON", &e))?;

    Ok(TokenClaims {
        user_id: model.user_id,
        username: model.username.or(model.sub),
        issued_at: model.iat.and_then(|s| DateTime::from_timestamp(s, 0)),
        expires_at: model.exp.and_then(|s| DateTime::from_timestamp(s, 0)),
    })
}
