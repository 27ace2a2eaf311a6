pub mod exposition;
pub mod server_metrics;

pub use exposition::render_prometheus;
pub use server_metrics::ServerMetrics;
