use crate::event_source::game_event::GameEvent;
use crate::event_source::source_error::SourceError;
use crate::event_source::EventSource;

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// A match recording stored as a JSON-lines file of decoded events.
///
/// Each non-blank line holds one `GameEvent` object. The file is re-opened for
/// every pass, so two passes always observe the same record from its start.
#[derive(Debug, Clone)]
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        EventLog {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSource for EventLog {
    type Pass<'a> = EventLogPass;

    /// Opens the log file for a new traversal.
    ///
    /// # Returns
    ///
    /// * `Ok(EventLogPass)` - An iterator over the file's events.
    /// * `Err(SourceError::Io)` - If the file cannot be opened.
    fn open_pass(&self) -> Result<EventLogPass, SourceError> {
        let file = File::open(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        Ok(EventLogPass {
            path: self.path.clone(),
            lines: BufReader::new(file).lines(),
            line_number: 0,
            failed: false,
        })
    }
}

/// One traversal of an `EventLog`. Stops after the first error.
pub struct EventLogPass {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_number: usize,
    failed: bool,
}

impl EventLogPass {
    fn fail(&mut self, error: SourceError) -> Option<Result<GameEvent, SourceError>> {
        self.failed = true;
        Some(Err(error))
    }
}

impl Iterator for EventLogPass {
    type Item = Result<GameEvent, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let line = self.lines.next()?;
            self.line_number += 1;

            let line_content = match line {
                Ok(line_content) => line_content,
                Err(source) => {
                    let path = self.path.clone();
                    return self.fail(SourceError::Io { path, source });
                }
            };
            if line_content.trim().is_empty() {
                continue;
            }

            return match serde_json::from_str(&line_content) {
                Ok(event) => Some(Ok(event)),
                Err(source) => {
                    let error = SourceError::Decode {
                        path: self.path.clone(),
                        line: self.line_number,
                        source,
                    };
                    self.fail(error)
                }
            };
        }
    }
}
