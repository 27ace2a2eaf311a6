use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Default)]
pub struct ServerMetrics {
    requests_total: AtomicU64,
    rejected_requests_total: AtomicU64,
    fetch_errors_total: AtomicU64,
    merges_total: AtomicU64,
    numbers_accepted_total: AtomicU64,
    fetch_latency_sum_us: AtomicU64,
    fetch_latency_count: AtomicU64,
}

impl ServerMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_requests(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_rejected_requests(&self) {
        self.rejected_requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_fetch_errors(&self) {
        self.fetch_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Records one merge that let `accepted` new values into the window.
    pub fn record_merge(&self, accepted: u64) {
        self.merges_total.fetch_add(1, Ordering::Relaxed);
        self.numbers_accepted_total
            .fetch_add(accepted, Ordering::Relaxed);
    }

    pub fn record_fetch_latency(&self, start: Instant) {
        let us = start.elapsed().as_micros() as u64;
        self.fetch_latency_sum_us.fetch_add(us, Ordering::Relaxed);
        self.fetch_latency_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests_total(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    pub fn rejected_requests_total(&self) -> u64 {
        self.rejected_requests_total.load(Ordering::Relaxed)
    }

    pub fn fetch_errors_total(&self) -> u64 {
        self.fetch_errors_total.load(Ordering::Relaxed)
    }

    pub fn merges_total(&self) -> u64 {
        self.merges_total.load(Ordering::Relaxed)
    }

    pub fn numbers_accepted_total(&self) -> u64 {
        self.numbers_accepted_total.load(Ordering::Relaxed)
    }

    pub fn fetch_latency_vals(&self) -> (u64, u64) {
        (
            self.fetch_latency_sum_us.load(Ordering::Relaxed),
            self.fetch_latency_count.load(Ordering::Relaxed),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn counters_increment() {
        let m = ServerMetrics::new();
        m.inc_requests();
        m.inc_requests();
        m.inc_rejected_requests();
        m.inc_fetch_errors();
        m.record_merge(3);
        m.record_merge(0);

        assert_eq!(m.requests_total(), 2);
        assert_eq!(m.rejected_requests_total(), 1);
        assert_eq!(m.fetch_errors_total(), 1);
        assert_eq!(m.merges_total(), 2);
        assert_eq!(m.numbers_accepted_total(), 3);
    }

    #[test]
    fn latency_recording() {
        let m = ServerMetrics::new();
        let start = Instant::now();
        std::thread::sleep(std::time::Duration::from_millis(1));
        m.record_fetch_latency(start);
        let (sum, count) = m.fetch_latency_vals();
        assert!(sum > 0);
        assert_eq!(count, 1);
    }
}
