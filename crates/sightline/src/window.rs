//! Response-time window: the most recent traces, oldest first, plus
//! aggregate statistics for the chart header.

use serde::Serialize;
use sightline_protocol::TraceSummary;

/// Maximum number of points in a window
pub const WINDOW_SIZE: usize = 20;

/// One bar of the response-time chart
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartPoint<'a> {
    /// 1-based rank within the window: `#1` is the oldest kept trace
    pub label: String,
    pub duration_ms: f64,
    pub has_errors: bool,
    /// The trace this point was built from
    pub trace: &'a TraceSummary,
}

impl ChartPoint<'_> {
    pub fn rank(&self) -> usize {
        self.label
            .trim_start_matches('#')
            .parse()
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindowResult<'a> {
    pub points: Vec<ChartPoint<'a>>,
    /// Mean duration over every trace that has one, windowed or not
    pub average: f64,
    /// Largest duration over every trace that has one, windowed or not
    pub maximum: f64,
}

impl WindowResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Counts toward average and maximum.
fn has_duration(trace: &TraceSummary) -> bool {
    trace.duration_ms.is_some()
}

/// Can be plotted. A start time of 0 counts as missing.
fn is_chartable(trace: &TraceSummary) -> bool {
    trace.duration_ms.is_some() && trace.start_time.is_some_and(|t| t != 0)
}

/// Reduce a trace list to the chart window and its statistics.
///
/// Points are the last [`WINDOW_SIZE`] chartable traces by start time (ties
/// keep input order). Average and maximum cover all traces with a duration,
/// including ones that can't be plotted. Empty input yields no points and
/// zero for both statistics.
pub fn reduce_trace_window(traces: &[TraceSummary]) -> WindowResult<'_> {
    let durations: Vec<f64> = traces
        .iter()
        .filter(|t| has_duration(t))
        .filter_map(|t| t.duration_ms)
        .collect();

    let (average, maximum) = if durations.is_empty() {
        (0.0, 0.0)
    } else {
        let sum: f64 = durations.iter().sum();
        let max = durations.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (sum / durations.len() as f64, max)
    };

    let mut chartable: Vec<&TraceSummary> = traces.iter().filter(|t| is_chartable(t)).collect();
    chartable.sort_by_key(|t| t.start_time);

    let skip = chartable.len().saturating_sub(WINDOW_SIZE);
    let points: Vec<ChartPoint<'_>> = chartable
        .into_iter()
        .skip(skip)
        .enumerate()
        .filter_map(|(index, trace)| {
            Some(ChartPoint {
                label: format!("#{}", index + 1),
                duration_ms: trace.duration_ms?,
                has_errors: trace.has_errors,
                trace,
            })
        })
        .collect();

    tracing::debug!(
        traces = traces.len(),
        with_duration = durations.len(),
        points = points.len(),
        "reduced trace window"
    );

    WindowResult {
        points,
        average,
        maximum,
    }
}
