use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;

use super::kind::NumberKind;
use super::source::{FetchError, NumberSource};

type Scripted = Result<Vec<i64>, String>;

/// In-memory source that replays scripted batches per kind. Kinds with no
/// script left report `FetchError::Empty`.
#[derive(Clone, Default)]
pub struct StaticNumberSource {
    scripts: Arc<Mutex<HashMap<NumberKind, VecDeque<Scripted>>>>,
    tokens: Arc<Mutex<Vec<String>>>,
}

impl StaticNumberSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_batch(&self, kind: NumberKind, numbers: Vec<i64>) {
        self.scripts
            .lock()
            .entry(kind)
            .or_default()
            .push_back(Ok(numbers));
    }

    pub fn push_failure(&self, kind: NumberKind, reason: &str) {
        self.scripts
            .lock()
            .entry(kind)
            .or_default()
            .push_back(Err(reason.to_string()));
    }

    /// Tokens seen by `fetch`, in call order.
    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().clone()
    }
}

#[async_trait::async_trait]
impl NumberSource for StaticNumberSource {
    async fn fetch(&self, kind: NumberKind, token: &str) -> Result<Vec<i64>, FetchError> {
        self.tokens.lock().push(token.to_string());
        let next = self
            .scripts
            .lock()
            .get_mut(&kind)
            .and_then(|q| q.pop_front());
        match next {
            Some(Ok(numbers)) if !numbers.is_empty() => Ok(numbers),
            Some(Ok(_)) | None => Err(FetchError::Empty),
            Some(Err(reason)) => Err(FetchError::Transport(reason)),
        }
    }
}
