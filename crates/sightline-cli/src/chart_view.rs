//! Response-time panel: what the dashboard shows for a trace window.
//!
//! Fallback labels for missing trace fields live here, not in the core.

use serde::Serialize;
use sightline::{format_duration_compact, ChartPoint, DurationError, TraceId, WindowResult};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub const TITLE: &str = "Response Time";
pub const EMPTY_STATE: &str = "No data available";
pub const UNNAMED: &str = "Unnamed";
pub const UNKNOWN_KIND: &str = "Unknown";
pub const CLICK_HINT: &str = "Click to view trace";

const BAR_WIDTH: usize = 30;

/// Route the dashboard navigates to when a bar is clicked
pub fn trace_route(trace_id: &TraceId) -> String {
    format!("/traces/{trace_id}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarTone {
    Normal,
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tooltip {
    pub name: String,
    pub service: Option<String>,
    pub kind: String,
    pub duration: String,
}

impl Tooltip {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.name.clone()];
        if let Some(service) = &self.service {
            lines.push(format!("Service: {service}"));
        }
        lines.push(format!("Kind: {}", self.kind));
        lines.push(format!("Duration: {}", self.duration));
        lines.push(CLICK_HINT.to_string());
        lines
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub duration_ms: f64,
    pub tone: BarTone,
    /// RFC 3339 start time, when the timestamp is representable
    pub started_at: Option<String>,
    pub route: String,
    pub tooltip: Tooltip,
}

impl Bar {
    fn from_point(point: &ChartPoint<'_>) -> Result<Self, DurationError> {
        let trace = point.trace;
        let tooltip = Tooltip {
            name: trace
                .root_span_name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNNAMED.to_string()),
            service: trace.service_name.clone().filter(|s| !s.is_empty()),
            kind: trace
                .root_span_kind
                .as_ref()
                .map(|kind| kind.as_str())
                .filter(|kind| !kind.is_empty())
                .unwrap_or(UNKNOWN_KIND)
                .to_string(),
            duration: format_duration_compact(point.duration_ms)?,
        };

        Ok(Self {
            label: point.label.clone(),
            duration_ms: point.duration_ms,
            tone: if point.has_errors {
                BarTone::Error
            } else {
                BarTone::Normal
            },
            started_at: trace.start_time.and_then(rfc3339_from_millis),
            route: trace_route(&trace.trace_id),
            tooltip,
        })
    }
}

fn rfc3339_from_millis(millis: i64) -> Option<String> {
    let nanos = i128::from(millis) * 1_000_000;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()?
        .format(&Rfc3339)
        .ok()
}

/// The response-time panel, ready to print
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartView {
    pub title: &'static str,
    pub average: String,
    pub maximum: String,
    pub bars: Vec<Bar>,
}

impl ChartView {
    pub fn from_window(window: &WindowResult<'_>) -> Result<Self, DurationError> {
        let bars = window
            .points
            .iter()
            .map(Bar::from_point)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title: TITLE,
            average: format_duration_compact(window.average)?,
            maximum: format_duration_compact(window.maximum)?,
            bars,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn caption(&self) -> Option<String> {
        (!self.is_empty()).then(|| format!("Last {} traces", self.bars.len()))
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();

        if self.is_empty() {
            out.push_str(self.title);
            out.push('\n');
            out.push_str(EMPTY_STATE);
            out.push('\n');
            return out;
        }

        out.push_str(&format!(
            "{}    Avg: {}    Max: {}\n",
            self.title, self.average, self.maximum
        ));

        // Bars scale to the tallest plotted point, like the chart's y axis.
        let tallest = self
            .bars
            .iter()
            .map(|bar| bar.duration_ms)
            .fold(0.0_f64, f64::max);

        for bar in &self.bars {
            let filled = if tallest > 0.0 {
                ((bar.duration_ms / tallest) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            let glyph = match bar.tone {
                BarTone::Normal => "█",
                BarTone::Error => "▓",
            };
            let marker = match bar.tone {
                BarTone::Normal => "",
                BarTone::Error => "  [error]",
            };

            out.push_str(&format!(
                "{:>4}  {}{}  {:>7}  {}{}  {}\n",
                bar.label,
                glyph.repeat(filled),
                " ".repeat(BAR_WIDTH - filled.min(BAR_WIDTH)),
                bar.tooltip.duration,
                bar.tooltip.name,
                marker,
                bar.route,
            ));
        }

        if let Some(caption) = self.caption() {
            out.push_str(&caption);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sightline::{reduce_trace_window, SpanKind, TraceSummary};

    fn sample_traces() -> Vec<TraceSummary> {
        vec![
            TraceSummary::new("trace-abc123")
                .with_duration_ms(145.5)
                .with_start_time(1_000_000_000_000)
                .with_service("user-api")
                .with_root_span("GET /api/users", SpanKind::Server),
            TraceSummary::new("trace-def456")
                .with_duration_ms(89.2)
                .with_start_time(1_000_000_001_000)
                .with_service("auth-service")
                .with_root_span("POST /auth/login", SpanKind::Server),
            TraceSummary::new("trace-ghi789")
                .with_duration_ms(523.8)
                .with_start_time(1_000_000_002_000)
                .with_errors(true)
                .with_service("db-service")
                .with_root_span("SELECT * FROM users WHERE id = ?", SpanKind::Client),
        ]
    }

    #[test]
    fn test_empty_window_shows_empty_state() {
        let view = ChartView::from_window(&reduce_trace_window(&[])).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.caption(), None);
        assert_eq!(view.render_text(), "Response Time\nNo data available\n");
    }

    #[test]
    fn test_header_and_caption() {
        let traces = sample_traces();
        let view = ChartView::from_window(&reduce_trace_window(&traces)).unwrap();

        assert_eq!(view.average, "253ms");
        assert_eq!(view.maximum, "524ms");
        assert_eq!(view.caption().as_deref(), Some("Last 3 traces"));

        let text = view.render_text();
        assert!(text.starts_with("Response Time    Avg: 253ms    Max: 524ms\n"));
        assert!(text.ends_with("Last 3 traces\n"));
    }

    #[test]
    fn test_error_bars_and_routes() {
        let traces = sample_traces();
        let view = ChartView::from_window(&reduce_trace_window(&traces)).unwrap();

        assert_eq!(view.bars[0].tone, BarTone::Normal);
        assert_eq!(view.bars[2].tone, BarTone::Error);
        assert_eq!(view.bars[2].route, "/traces/trace-ghi789");
        assert!(view.render_text().contains("[error]"));
    }

    #[test]
    fn test_tooltip_lines() {
        let traces = sample_traces();
        let view = ChartView::from_window(&reduce_trace_window(&traces)).unwrap();

        assert_eq!(
            view.bars[0].tooltip.lines(),
            vec![
                "GET /api/users",
                "Service: user-api",
                "Kind: Server",
                "Duration: 146ms",
                "Click to view trace",
            ]
        );
    }

    #[test]
    fn test_missing_optional_fields_fall_back() {
        let traces = vec![TraceSummary::new("minimal-trace")
            .with_duration_ms(100.0)
            .with_start_time(1_000_000_000_000)];
        let view = ChartView::from_window(&reduce_trace_window(&traces)).unwrap();
        let tooltip = &view.bars[0].tooltip;

        assert_eq!(tooltip.name, "Unnamed");
        assert_eq!(tooltip.service, None);
        assert_eq!(tooltip.kind, "Unknown");
        assert_eq!(tooltip.lines().len(), 4);
    }

    #[test]
    fn test_start_time_as_rfc3339() {
        let traces = sample_traces();
        let view = ChartView::from_window(&reduce_trace_window(&traces)).unwrap();

        assert_eq!(
            view.bars[0].started_at.as_deref(),
            Some("2001-09-09T01:46:40Z")
        );
    }
}
