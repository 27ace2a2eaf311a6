use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;

use super::kind::NumberKind;
use super::source::{FetchError, NumberSource};

/// Fetches batches from the upstream generator at `{base_url}/{kind}`.
pub struct HttpNumberSource {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct NumbersPayload {
    numbers: Option<Vec<i64>>,
}

impl HttpNumberSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn url_for(&self, kind: NumberKind) -> String {
        format!("{}/{}", self.base_url, kind.upstream_path())
    }
}

#[async_trait::async_trait]
impl NumberSource for HttpNumberSource {
    async fn fetch(&self, kind: NumberKind, token: &str) -> Result<Vec<i64>, FetchError> {
        let resp = self
            .http
            .get(self.url_for(kind))
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        let body = resp.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        decode_numbers(&body)
    }
}

fn transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(e.to_string())
    }
}

fn decode_numbers(body: &str) -> Result<Vec<i64>, FetchError> {
    let payload: NumbersPayload =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    match payload.numbers {
        Some(numbers) if !numbers.is_empty() => Ok(numbers),
        _ => Err(FetchError::Empty),
    }
}
