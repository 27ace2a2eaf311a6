use super::kind::NumberKind;

#[async_trait::async_trait]
pub trait NumberSource: Send + Sync {
    /// Fetches one batch of `kind` numbers, authenticating with `token`.
    /// An `Ok` batch is never empty.
    async fn fetch(&self, kind: NumberKind, token: &str) -> Result<Vec<i64>, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to make request: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("no numbers received from server")]
    Empty,
}
