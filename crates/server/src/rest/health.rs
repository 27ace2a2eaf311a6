use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::router::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub status: String,
    pub window_len: usize,
    pub window_capacity: usize,
}

pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
    })
}

pub async fn ready(State(state): State<AppState>) -> Json<ReadyResponse> {
    Json(ReadyResponse {
        status: "ready".into(),
        window_len: state.window.len(),
        window_capacity: state.window.capacity(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::ServerMetrics;
    use crate::store::WindowStore;
    use crate::upstream::StaticNumberSource;
    use std::sync::Arc;

    #[tokio::test]
    async fn healthz_ok() {
        let resp = healthz().await;
        assert_eq!(resp.0.status, "ok");
    }

    #[tokio::test]
    async fn ready_reports_window() {
        let window = WindowStore::new(4);
        window.merge(&[1, 2]);
        let state = AppState {
            window,
            source: Arc::new(StaticNumberSource::new()),
            metrics: ServerMetrics::new(),
        };
        let resp = ready(State(state)).await;
        assert_eq!(resp.0.window_len, 2);
        assert_eq!(resp.0.window_capacity, 4);
    }
}
