//! Seed data for UI development
//!
//! Generates realistic trace summaries with various characteristics to aid in
//! designing and testing the chart without needing a live collector. The data
//! is deterministic so snapshots of the output stay stable.

use sightline::{SpanKind, TraceSummary};

/// 2023-11-14T22:13:20Z, in milliseconds
const BASE_TIME_MS: i64 = 1_700_000_000_000;

/// Routine traffic between the notable traces
const BACKGROUND_ROUTES: [(&str, &str, u32); 4] = [
    ("GET /api/users", "api-gateway", 12),
    ("GET /api/products", "catalog-service", 35),
    ("POST /auth/login", "auth-service", 90),
    ("GET /healthz", "api-gateway", 1),
];

/// Helper to create a complete summary
fn summary(
    trace_id: &str,
    root_span_name: &str,
    kind: SpanKind,
    service_name: &str,
    start_offset_ms: i64,
    duration_ms: f64,
    span_count: u64,
) -> TraceSummary {
    TraceSummary::new(trace_id)
        .with_root_span(root_span_name, kind)
        .with_service(service_name)
        .with_start_time(BASE_TIME_MS + start_offset_ms)
        .with_duration_ms(duration_ms)
        .with_span_count(span_count)
}

/// Generate a variety of realistic trace summaries
pub fn seed_traces() -> Vec<TraceSummary> {
    let mut traces = Vec::new();

    // 1. Background traffic, one request every 1.5s
    for i in 0..24u32 {
        let (name, service, base_ms) = BACKGROUND_ROUTES[i as usize % BACKGROUND_ROUTES.len()];
        // Wobble the latency a little so the bars aren't flat
        let jitter = f64::from((i * 37) % 11) / 10.0;
        traces.push(summary(
            &format!("5eed{i:04x}"),
            name,
            SpanKind::Server,
            service,
            i64::from(i) * 1500,
            f64::from(base_ms) * (1.0 + jitter),
            2 + u64::from(i % 3),
        ));
    }

    // 2. Slow request with database lock
    traces.push(summary(
        "deadbeef12345678901234567890abcd",
        "POST /api/orders",
        SpanKind::Server,
        "order-service",
        20_250,
        2_345.0,
        2,
    ));

    // 3. Failed request with error
    traces.push(
        summary(
            "e440e404e440e404e440e404e440e404",
            "GET /api/user/999",
            SpanKind::Server,
            "user-service",
            30_100,
            8.0,
            1,
        )
        .with_errors(true),
    );

    // 4. Outbound call that hit a timeout
    traces.push(
        summary(
            "c0a10000c0a10000c0a10000c0a10000",
            "payments.charge",
            SpanKind::Client,
            "checkout-service",
            33_700,
            61_500.0,
            5,
        )
        .with_errors(true),
    );

    // 5. Sub-millisecond cache hit
    traces.push(summary(
        "cac4e000cac4e000cac4e000cac4e000",
        "cache.get",
        SpanKind::Internal,
        "cart-service",
        34_900,
        0.42,
        1,
    ));

    // 6. Partially received trace: duration known, start time lost.
    //    Counts toward the statistics but is never plotted.
    let mut partial = TraceSummary::new("0000aaaa0000aaaa0000aaaa0000aaaa")
        .with_service("batch-worker")
        .with_duration_ms(4_800.0)
        .with_span_count(12);
    partial.root_span_name = Some("nightly.reindex".to_string());
    traces.push(partial);

    // 7. Still in flight: no duration yet, no name, no kind
    traces.push(
        TraceSummary::new("f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1")
            .with_start_time(BASE_TIME_MS + 35_500)
            .with_span_count(1),
    );

    traces
}

#[cfg(test)]
mod tests {
    use super::*;
    use sightline::{reduce_trace_window, WINDOW_SIZE};

    #[test]
    fn test_seed_overflows_the_window() {
        let traces = seed_traces();
        let window = reduce_trace_window(&traces);

        assert_eq!(traces.len(), 30);
        assert_eq!(window.len(), WINDOW_SIZE);
        assert_eq!(window.maximum, 61_500.0);
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(seed_traces(), seed_traces());
    }
}
