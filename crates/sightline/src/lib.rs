//! Duration formatting and response-time windowing for the Sightline
//! trace dashboard.
//!
//! # Example
//!
//! ```
//! use sightline::{format_duration_compact, reduce_trace_window, TraceSummary};
//!
//! let traces = vec![
//!     TraceSummary::new("trace-1").with_duration_ms(150.0).with_start_time(1_000),
//!     TraceSummary::new("trace-2").with_duration_ms(250.0).with_start_time(2_000),
//! ];
//!
//! let window = reduce_trace_window(&traces);
//! assert_eq!(window.points[1].label, "#2");
//! assert_eq!(format_duration_compact(window.maximum).unwrap(), "250ms");
//! ```

pub mod duration;
pub mod window;

pub use duration::{format_duration, format_duration_compact, format_nano_duration, DurationError};
pub use sightline_protocol::*;
pub use window::{reduce_trace_window, ChartPoint, WindowResult, WINDOW_SIZE};
