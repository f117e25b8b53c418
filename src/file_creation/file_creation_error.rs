use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that may occur while exporting a scoreboard.
///
/// # Variants
///
/// * `Serialization` - The scoreboard could not be serialized.
/// * `FileCreation` - The output file could not be created.
/// * `FileWrite` - The output file could not be written.
#[derive(Error, Debug)]
pub enum FileCreationError {
    #[error("failed to serialize scoreboard: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to create {path}: {source}")]
    FileCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
