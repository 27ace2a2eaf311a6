use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use super::{health, metrics, numbers};
use crate::metrics::ServerMetrics;
use crate::store::WindowStore;
use crate::upstream::NumberSource;

#[derive(Clone)]
pub struct AppState {
    pub window: WindowStore,
    pub source: Arc<dyn NumberSource>,
    pub metrics: Arc<ServerMetrics>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/ready", get(health::ready))
        .route("/metrics", get(metrics::metrics))
        .route("/numbers/{numberid}", get(numbers::get_numbers))
        .with_state(state)
}

pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
