//! Access to an already-decoded match recording.

pub mod event_log;
pub mod game_event;
pub mod recorded_match;
pub mod source_error;

use crate::event_source::game_event::GameEvent;
use crate::event_source::source_error::SourceError;

/// A recording that can be traversed from start to end any number of times.
///
/// Each call to `open_pass` starts a fresh, full, ordered pass over the same
/// record. A pass is not rewindable; callers that need a second traversal
/// open a new one.
pub trait EventSource {
    type Pass<'a>: Iterator<Item = Result<GameEvent, SourceError>>
    where
        Self: 'a;

    fn open_pass(&self) -> Result<Self::Pass<'_>, SourceError>;
}
