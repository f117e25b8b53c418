use crate::file_creation::file_creation_error::FileCreationError;
use crate::scoreboard::snapshot_builder::Scoreboard;

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

/// Serializes a `Scoreboard` into a pretty-printed JSON document.
///
/// # Arguments
///
/// * `scoreboard` - The finalized scoreboard of one match.
///
/// # Returns
///
/// A `Result` containing the JSON string if successful, or a `FileCreationError` if serialization fails.
pub fn generate_json(scoreboard: &Scoreboard) -> Result<String, FileCreationError> {
    Ok(serde_json::to_string_pretty(scoreboard)?)
}

/// Creates a JSON file from a `Scoreboard` at the specified path.
///
/// # Arguments
///
/// * `path` - The path of the file where the JSON will be written. An existing file is replaced.
/// * `scoreboard` - The finalized scoreboard of one match.
///
/// # Returns
///
/// A `Result` indicating success or failure. Errors are represented by `FileCreationError`.
pub fn create_json_file(path: &Path, scoreboard: &Scoreboard) -> Result<(), FileCreationError> {
    let json_output = generate_json(scoreboard)?;

    let file = File::create(path).map_err(|source| FileCreationError::FileCreation {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(json_output.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|source| FileCreationError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(())
}
