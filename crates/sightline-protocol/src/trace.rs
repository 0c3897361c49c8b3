use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque trace identifier, as handed out by the collector
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceId(pub String);

impl TraceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TraceId({})", self.0)
    }
}

impl From<String> for TraceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TraceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Kind of the root span. The set is open: kinds we don't know about are
/// carried through verbatim.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpanKind {
    Server,
    Client,
    Internal,
    Producer,
    Consumer,
    Other(String),
}

impl SpanKind {
    pub fn as_str(&self) -> &str {
        match self {
            SpanKind::Server => "Server",
            SpanKind::Client => "Client",
            SpanKind::Internal => "Internal",
            SpanKind::Producer => "Producer",
            SpanKind::Consumer => "Consumer",
            SpanKind::Other(s) => s,
        }
    }
}

impl From<String> for SpanKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Server" => SpanKind::Server,
            "Client" => SpanKind::Client,
            "Internal" => SpanKind::Internal,
            "Producer" => SpanKind::Producer,
            "Consumer" => SpanKind::Consumer,
            _ => SpanKind::Other(s),
        }
    }
}

impl From<SpanKind> for String {
    fn from(kind: SpanKind) -> Self {
        match kind {
            SpanKind::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of a trace (for listing and charting)
///
/// `duration_ms` and `start_time` are optional because the collector may
/// report traces that are still in flight or were only partially received.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceSummary {
    pub trace_id: TraceId,
    pub duration_ms: Option<f64>,
    /// Milliseconds since UNIX epoch
    pub start_time: Option<i64>,
    #[serde(default)]
    pub span_count: u64,
    #[serde(default)]
    pub has_errors: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_span_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_span_kind: Option<SpanKind>,
}

impl TraceSummary {
    /// A summary with nothing but an id; fill it in with the `with_*` methods.
    pub fn new(trace_id: impl Into<TraceId>) -> Self {
        Self {
            trace_id: trace_id.into(),
            duration_ms: None,
            start_time: None,
            span_count: 0,
            has_errors: false,
            service_name: None,
            root_span_name: None,
            root_span_kind: None,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_start_time(mut self, start_time: i64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn with_span_count(mut self, span_count: u64) -> Self {
        self.span_count = span_count;
        self
    }

    pub fn with_errors(mut self, has_errors: bool) -> Self {
        self.has_errors = has_errors;
        self
    }

    pub fn with_service(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    pub fn with_root_span(mut self, name: impl Into<String>, kind: SpanKind) -> Self {
        self.root_span_name = Some(name.into());
        self.root_span_kind = Some(kind);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_missing_fields_deserialize_as_none() {
        let json = r#"[
            {"trace_id": "a", "duration_ms": null, "start_time": null, "span_count": 1, "has_errors": false},
            {"trace_id": "b"}
        ]"#;
        let traces: Vec<TraceSummary> = serde_json::from_str(json).unwrap();

        assert_eq!(traces.len(), 2);
        for trace in &traces {
            assert_eq!(trace.duration_ms, None);
            assert_eq!(trace.start_time, None);
            assert_eq!(trace.service_name, None);
            assert_eq!(trace.root_span_kind, None);
        }
        assert_eq!(traces[1].span_count, 0);
        assert!(!traces[1].has_errors);
    }

    #[test]
    fn test_full_summary_deserializes() {
        let json = r#"{
            "trace_id": "trace-2",
            "service_name": "db-service",
            "duration_ms": 250,
            "span_count": 5,
            "has_errors": true,
            "start_time": 1000000001000,
            "root_span_name": "SELECT users",
            "root_span_kind": "Client"
        }"#;
        let trace: TraceSummary = serde_json::from_str(json).unwrap();

        assert_eq!(trace.trace_id, TraceId::new("trace-2"));
        assert_eq!(trace.duration_ms, Some(250.0));
        assert_eq!(trace.start_time, Some(1_000_000_001_000));
        assert_eq!(trace.root_span_kind, Some(SpanKind::Client));
        assert!(trace.has_errors);
    }

    #[test]
    fn test_unknown_span_kind_round_trips() {
        let kind: SpanKind = serde_json::from_str(r#""Batch""#).unwrap();
        assert_eq!(kind, SpanKind::Other("Batch".to_string()));
        assert_eq!(serde_json::to_string(&kind).unwrap(), r#""Batch""#);
    }

    #[test]
    fn test_trace_id_is_transparent() {
        let id = TraceId::new("trace-abc123");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""trace-abc123""#);
        assert_eq!(id.to_string(), "trace-abc123");
        assert_eq!(format!("{:?}", id), "TraceId(trace-abc123)");
    }
}
