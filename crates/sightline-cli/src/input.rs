use serde::Deserialize;
use sightline::{Attributes, TraceSummary};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Errors while loading trace data
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {origin}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where input comes from: a file, or stdin when the path is `-`
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Source::Stdin
        } else {
            Source::File(path.to_path_buf())
        }
    }

    fn origin(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    fn read_to_string(&self) -> Result<String, LoadError> {
        let result = match self {
            Source::Stdin => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf).map(|_| buf)
            }
            Source::File(path) => std::fs::read_to_string(path),
        };
        result.map_err(|source| LoadError::Io {
            origin: self.origin(),
            source,
        })
    }
}

/// Trace list payloads come either bare or wrapped the way list endpoints
/// return them.
#[derive(Deserialize)]
#[serde(untagged)]
enum TraceList {
    Bare(Vec<TraceSummary>),
    Wrapped { traces: Vec<TraceSummary> },
}

pub fn parse_traces(json: &str, origin: &str) -> Result<Vec<TraceSummary>, LoadError> {
    let list: TraceList = serde_json::from_str(json).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    Ok(match list {
        TraceList::Bare(traces) | TraceList::Wrapped { traces } => traces,
    })
}

pub fn load_traces(source: &Source) -> Result<Vec<TraceSummary>, LoadError> {
    let json = source.read_to_string()?;
    let traces = parse_traces(&json, &source.origin())?;
    tracing::info!(count = traces.len(), origin = %source.origin(), "loaded traces");
    Ok(traces)
}

pub fn load_attributes(source: &Source) -> Result<Attributes, LoadError> {
    let json = source.read_to_string()?;
    serde_json::from_str(&json).map_err(|source_err| LoadError::Parse {
        origin: source.origin(),
        source: source_err,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_and_wrapped_lists() {
        let bare = r#"[{"trace_id": "a", "duration_ms": 1.5, "start_time": 10}]"#;
        let wrapped = r#"{"traces": [{"trace_id": "a", "duration_ms": 1.5, "start_time": 10}]}"#;

        assert_eq!(
            parse_traces(bare, "bare").unwrap(),
            parse_traces(wrapped, "wrapped").unwrap()
        );
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = parse_traces("{not json", "traces.json").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert_eq!(err.to_string(), "failed to parse traces.json");
    }

    #[test]
    fn test_dash_means_stdin() {
        assert_eq!(Source::from_path(Path::new("-")), Source::Stdin);
        assert_eq!(
            Source::from_path(Path::new("traces.json")),
            Source::File(PathBuf::from("traces.json"))
        );
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let source = Source::File(PathBuf::from("/definitely/not/here.json"));
        let err = load_traces(&source).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
