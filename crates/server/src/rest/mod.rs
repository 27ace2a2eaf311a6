mod auth;
mod error;
mod health;
mod metrics;
mod numbers;
mod router;

pub use error::{ApiError, ErrorBody};
pub use numbers::NumbersResponse;
pub use router::{router, serve, AppState};
