use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use super::router::AppState;
use crate::metrics::render_prometheus;

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let body = render_prometheus(&state.metrics, &state.window);
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::ServerMetrics;
    use crate::store::WindowStore;
    use crate::upstream::StaticNumberSource;
    use std::sync::Arc;

    #[tokio::test]
    async fn handler_returns_prometheus() {
        let state = AppState {
            window: WindowStore::new(10),
            source: Arc::new(StaticNumberSource::new()),
            metrics: ServerMetrics::new(),
        };
        state.metrics.inc_requests();
        let resp = metrics(State(state)).await.into_response();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("numwin_requests_total 1"));
        assert!(text.contains("numwin_window_length 0"));
    }
}
