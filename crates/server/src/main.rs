use std::sync::Arc;

use anyhow::Context;
use numwin_server::config::ServerConfig;
use numwin_server::metrics::ServerMetrics;
use numwin_server::rest::{self, AppState};
use numwin_server::shutdown::wait_for_shutdown;
use numwin_server::store::WindowStore;
use numwin_server::upstream::HttpNumberSource;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env().context("invalid configuration")?;
    init_tracing(config.log_json);

    let source = HttpNumberSource::new(&config.upstream_url, config.upstream_timeout)
        .context("failed to build upstream client")?;

    let state = AppState {
        window: WindowStore::new(config.window_size),
        source: Arc::new(source),
        metrics: ServerMetrics::new(),
    };

    let rest_addr = config.rest_addr;
    let listener = tokio::net::TcpListener::bind(rest_addr)
        .await
        .with_context(|| format!("failed to bind {rest_addr}"))?;

    tracing::info!(
        %rest_addr,
        window_size = config.window_size,
        upstream = %config.upstream_url,
        timeout_ms = config.upstream_timeout.as_millis() as u64,
        "REST server starting"
    );

    rest::serve(listener, state, wait_for_shutdown())
        .await
        .context("REST server failed")?;

    tracing::info!("REST server stopped");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
