use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the underlying recording. Any of them aborts the current pass.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read event log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed event at {path}:{line}: {source}")]
    Decode {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("recording ended unexpectedly after {events_read} events")]
    Truncated { events_read: usize },
}
