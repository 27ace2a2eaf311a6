use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use super::numbers::NumbersResponse;
use crate::store::WindowView;
use crate::upstream::FetchError;

#[derive(Debug)]
pub enum ApiError {
    MissingAuthorization,
    InvalidAuthorization,
    InvalidNumberId,
    /// Upstream fetch failed; carries the untouched window for the response.
    Fetch { error: FetchError, window: WindowView },
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingAuthorization | Self::InvalidAuthorization => StatusCode::UNAUTHORIZED,
            Self::InvalidNumberId => StatusCode::BAD_REQUEST,
            Self::Fetch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::MissingAuthorization => "Authorization header is required".into(),
            Self::InvalidAuthorization => {
                "Invalid authorization header format. Use 'Bearer <token>'".into()
            }
            Self::InvalidNumberId => "Invalid number ID. Use 'p' for prime, 'f' for fibonacci, \
                 'e' for even, or 'r' for random numbers"
                .into(),
            Self::Fetch { error, .. } => format!("Failed to fetch numbers: {error}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.message();
        match self {
            Self::Fetch { window, .. } => {
                let body = NumbersResponse {
                    error: Some(error),
                    window_prev_state: window.values.clone(),
                    window_curr_state: window.values,
                    numbers: None,
                    avg: window.average,
                };
                (status, Json(body)).into_response()
            }
            _ => (status, Json(ErrorBody { error })).into_response(),
        }
    }
}
