use axum::http::{header, HeaderMap};

use super::error::ApiError;

/// Pulls the token out of an `Authorization: Bearer <token>` header. The
/// token is forwarded upstream untouched, so it is not validated here.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(ApiError::MissingAuthorization)?;

    let value = value
        .to_str()
        .map_err(|_| ApiError::InvalidAuthorization)?;
    if value.is_empty() {
        return Err(ApiError::MissingAuthorization);
    }

    match value.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ApiError::InvalidAuthorization),
    }
}
