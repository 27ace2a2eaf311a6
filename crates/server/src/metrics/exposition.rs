use std::fmt::Write;

use super::server_metrics::ServerMetrics;
use crate::store::WindowStore;

pub fn render_prometheus(m: &ServerMetrics, window: &WindowStore) -> String {
    let mut out = String::with_capacity(1024);

    write_counter(&mut out, "numwin_requests_total", m.requests_total());
    write_counter(&mut out, "numwin_rejected_requests_total", m.rejected_requests_total());
    write_counter(&mut out, "numwin_fetch_errors_total", m.fetch_errors_total());
    write_counter(&mut out, "numwin_merges_total", m.merges_total());
    write_counter(&mut out, "numwin_numbers_accepted_total", m.numbers_accepted_total());

    write_gauge(&mut out, "numwin_window_length", window.len() as u64);
    write_gauge(&mut out, "numwin_window_capacity", window.capacity() as u64);

    let (sum, count) = m.fetch_latency_vals();
    write_summary(&mut out, "numwin_fetch_latency_us", sum, count);

    out
}

fn write_counter(out: &mut String, name: &str, val: u64) {
    let _ = writeln!(out, "# TYPE {name} counter");
    let _ = writeln!(out, "{name} {val}");
}

fn write_gauge(out: &mut String, name: &str, val: u64) {
    let _ = writeln!(out, "# TYPE {name} gauge");
    let _ = writeln!(out, "{name} {val}");
}

fn write_summary(out: &mut String, name: &str, sum: u64, count: u64) {
    let _ = writeln!(out, "# TYPE {name} summary");
    let _ = writeln!(out, "{name}_sum {sum}");
    let _ = writeln!(out, "{name}_count {count}");
}
