use parking_lot::RwLock;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Bounded, duplicate-free, insertion-ordered window of recent numbers.
///
/// Cloning yields another handle to the same window. Merges take the write
/// lock, every read takes the read lock, so readers only ever see the state
/// before or after a whole merge.
#[derive(Clone)]
pub struct WindowStore {
    values: Arc<RwLock<VecDeque<i64>>>,
    capacity: usize,
}

/// Result of one merge: the window before it, and how many incoming values
/// are in the window after it.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub previous: Vec<i64>,
    pub accepted: usize,
}

/// Contents and average read under a single lock acquisition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowView {
    pub values: Vec<i64>,
    pub average: f64,
}

impl Default for WindowStore {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

impl WindowStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: Arc::new(RwLock::new(VecDeque::new())),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends every value of `incoming` not already present, then evicts the
    /// oldest entries until the window fits. Returns the window as it was
    /// before the merge.
    pub fn merge(&self, incoming: &[i64]) -> Vec<i64> {
        self.merge_outcome(incoming).previous
    }

    /// Same as [`merge`](Self::merge), also counting the incoming values that
    /// survived eviction. The count is taken under the write lock.
    pub fn merge_outcome(&self, incoming: &[i64]) -> MergeOutcome {
        let mut values = self.values.write();
        let previous: Vec<i64> = values.iter().copied().collect();

        let mut seen: HashSet<i64> = values.iter().copied().collect();
        let mut inserted = 0;
        for &n in incoming {
            if seen.insert(n) {
                values.push_back(n);
                inserted += 1;
            }
        }

        let mut evicted_new = 0;
        if values.len() > self.capacity {
            let excess = values.len() - self.capacity;
            values.drain(..excess);
            // older entries sit in front, so new ones go only once those are gone
            evicted_new = excess.saturating_sub(previous.len());
        }

        MergeOutcome {
            previous,
            accepted: inserted - evicted_new,
        }
    }

    pub fn average(&self) -> f64 {
        average_of(&self.values.read())
    }

    pub fn snapshot(&self) -> Vec<i64> {
        self.values.read().iter().copied().collect()
    }

    pub fn view(&self) -> WindowView {
        let values = self.values.read();
        WindowView {
            values: values.iter().copied().collect(),
            average: average_of(&values),
        }
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

fn average_of(values: &VecDeque<i64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: i128 = values.iter().map(|&n| n as i128).sum();
    sum as f64 / values.len() as f64
}
