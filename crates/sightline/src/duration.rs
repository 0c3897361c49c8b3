//! Human-readable durations.
//!
//! Durations arrive as floating-point milliseconds and are rendered in one of
//! four bands, picked by magnitude:
//!
//! | Range (ms)          | Long form  | Compact form |
//! |---------------------|------------|--------------|
//! | `< 1`               | `500µs`    | `500µs`      |
//! | `1 ≤ ms < 1000`     | `50.0ms`   | `50ms`       |
//! | `1000 ≤ ms < 60000` | `5.00s`    | `5.0s`       |
//! | `≥ 60000`           | `2m 5s`    | `2.1m`       |
//!
//! Each band starts at its lower bound inclusive. Rounding is half away from
//! zero. Negative durations are formatted by magnitude and prefixed with `-`.

const MICROS_PER_MILLI: f64 = 1_000.0;
const MILLIS_PER_SECOND: f64 = 1_000.0;
const MILLIS_PER_MINUTE: f64 = 60_000.0;
const NANOS_PER_MILLI: f64 = 1_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DurationError {
    #[error("duration is not a finite number: {0}")]
    NonFinite(f64),
}

#[derive(Clone, Copy)]
enum Style {
    Long,
    Compact,
}

/// Format a duration in milliseconds, long form.
///
/// ```
/// use sightline::format_duration;
///
/// assert_eq!(format_duration(0.5).unwrap(), "500µs");
/// assert_eq!(format_duration(50.0).unwrap(), "50.0ms");
/// assert_eq!(format_duration(1000.0).unwrap(), "1.00s");
/// assert_eq!(format_duration(125_000.0).unwrap(), "2m 5s");
/// ```
pub fn format_duration(ms: f64) -> Result<String, DurationError> {
    format_with(ms, Style::Long)
}

/// Format a duration in milliseconds, compact form for tight spaces (chart
/// axes, tooltips). The minute band is a single fractional value and never
/// splits into minutes and seconds.
///
/// ```
/// use sightline::format_duration_compact;
///
/// assert_eq!(format_duration_compact(50.0).unwrap(), "50ms");
/// assert_eq!(format_duration_compact(90_000.0).unwrap(), "1.5m");
/// ```
pub fn format_duration_compact(ms: f64) -> Result<String, DurationError> {
    format_with(ms, Style::Compact)
}

/// Format the time between two raw nanosecond timestamps from the same
/// clock, long form.
///
/// Reversed timestamps are not rejected: the result is a negative duration,
/// e.g. `"-500µs"`.
pub fn format_nano_duration(start_nanos: u64, end_nanos: u64) -> Result<String, DurationError> {
    let delta = i128::from(end_nanos) - i128::from(start_nanos);
    format_duration(delta as f64 / NANOS_PER_MILLI)
}

fn format_with(ms: f64, style: Style) -> Result<String, DurationError> {
    if !ms.is_finite() {
        return Err(DurationError::NonFinite(ms));
    }

    let magnitude = ms.abs();
    let body = match style {
        Style::Long => long(magnitude),
        Style::Compact => compact(magnitude),
    };

    // "-0µs" is not a thing
    if ms < 0.0 && body.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        Ok(format!("-{body}"))
    } else {
        Ok(body)
    }
}

fn long(ms: f64) -> String {
    if ms < 1.0 {
        micros(ms)
    } else if ms < MILLIS_PER_SECOND {
        format!("{}ms", fixed(ms, 1))
    } else if ms < MILLIS_PER_MINUTE {
        format!("{}s", fixed(ms / MILLIS_PER_SECOND, 2))
    } else {
        let minutes = (ms / MILLIS_PER_MINUTE).floor();
        let seconds = ((ms % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND).floor();
        format!("{minutes:.0}m {seconds:.0}s")
    }
}

fn compact(ms: f64) -> String {
    if ms < 1.0 {
        micros(ms)
    } else if ms < MILLIS_PER_SECOND {
        format!("{}ms", fixed(ms, 0))
    } else if ms < MILLIS_PER_MINUTE {
        format!("{}s", fixed(ms / MILLIS_PER_SECOND, 1))
    } else {
        format!("{}m", fixed(ms / MILLIS_PER_MINUTE, 1))
    }
}

fn micros(ms: f64) -> String {
    fixed(ms * MICROS_PER_MILLI, 0) + "µs"
}

/// Fixed-point rendering with round-half-away-from-zero.
///
/// Rounding happens before formatting: `{:.N}` alone breaks ties to even.
fn fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    format!("{rounded:.decimals$}")
}
