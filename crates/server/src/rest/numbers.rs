use std::time::Instant;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use super::auth::bearer_token;
use super::error::ApiError;
use super::router::AppState;
use crate::upstream::NumberKind;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumbersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub window_prev_state: Vec<i64>,
    pub window_curr_state: Vec<i64>,
    pub numbers: Option<Vec<i64>>,
    pub avg: f64,
}

pub async fn get_numbers(
    State(state): State<AppState>,
    Path(number_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<NumbersResponse>, ApiError> {
    state.metrics.inc_requests();

    let token = bearer_token(&headers).map_err(|e| reject(&state, e))?;
    let kind = NumberKind::from_id(&number_id)
        .ok_or(ApiError::InvalidNumberId)
        .map_err(|e| reject(&state, e))?;

    let start = Instant::now();
    let fetched = state.source.fetch(kind, token).await;
    state.metrics.record_fetch_latency(start);

    let numbers = match fetched {
        Ok(numbers) => numbers,
        Err(error) => {
            state.metrics.inc_fetch_errors();
            tracing::warn!(%kind, error = %error, "error fetching numbers");
            return Err(ApiError::Fetch {
                error,
                window: state.window.view(),
            });
        }
    };

    let outcome = state.window.merge_outcome(&numbers);
    let current = state.window.view();

    let accepted = outcome.accepted;
    state.metrics.record_merge(accepted as u64);
    tracing::debug!(
        %kind,
        fetched = numbers.len(),
        accepted,
        window_len = current.values.len(),
        "merged batch"
    );

    Ok(Json(NumbersResponse {
        error: None,
        window_prev_state: outcome.previous,
        window_curr_state: current.values,
        numbers: Some(numbers),
        avg: current.average,
    }))
}

fn reject(state: &AppState, err: ApiError) -> ApiError {
    state.metrics.inc_rejected_requests();
    tracing::debug!(reason = %err.message(), "request rejected");
    err
}
