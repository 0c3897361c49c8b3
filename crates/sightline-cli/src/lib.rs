//! Command-line front end for Sightline.
//!
//! Owns everything the core leaves to its caller: loading trace lists,
//! fallback labels, and turning a window into text or JSON.

mod attributes_view;
mod chart_view;
mod input;
mod seed_data;

use serde::Serialize;
use sightline::{reduce_trace_window, TraceSummary, WindowResult};

pub use attributes_view::{render_attributes, EMPTY_ATTRIBUTES};
pub use chart_view::{trace_route, Bar, BarTone, ChartView, Tooltip, EMPTY_STATE, TITLE};
pub use input::{load_attributes, load_traces, parse_traces, LoadError, Source};
pub use seed_data::seed_traces;

/// How `chart` prints its result
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct ChartReport<'a> {
    window: &'a WindowResult<'a>,
    view: &'a ChartView,
}

/// Reduce `traces` to the response-time window and render it.
pub fn render_chart(traces: &[TraceSummary], output: OutputFormat) -> anyhow::Result<String> {
    let window = reduce_trace_window(traces);
    let view = ChartView::from_window(&window)?;

    if view.is_empty() {
        tracing::warn!(traces = traces.len(), "no chartable traces");
    }

    Ok(match output {
        OutputFormat::Text => view.render_text(),
        OutputFormat::Json => {
            let report = ChartReport {
                window: &window,
                view: &view,
            };
            serde_json::to_string_pretty(&report)? + "\n"
        }
    })
}
