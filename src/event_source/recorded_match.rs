use crate::event_source::game_event::GameEvent;
use crate::event_source::source_error::SourceError;
use crate::event_source::EventSource;

use std::slice::Iter;

/// A match recording held in memory.
///
/// Optionally cut short after a number of events, which models a damaged
/// recording: every pass then fails at the same point.
#[derive(Debug, Clone, Default)]
pub struct RecordedMatch {
    events: Vec<GameEvent>,
    truncated_after: Option<usize>,
}

impl RecordedMatch {
    pub fn new(events: Vec<GameEvent>) -> Self {
        RecordedMatch {
            events,
            truncated_after: None,
        }
    }

    /// Returns a copy of this recording whose passes fail after `events_read` events.
    pub fn truncated_after(mut self, events_read: usize) -> Self {
        self.truncated_after = Some(events_read);
        self
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSource for RecordedMatch {
    type Pass<'a> = RecordedPass<'a>;

    fn open_pass(&self) -> Result<RecordedPass<'_>, SourceError> {
        Ok(RecordedPass {
            events: self.events.iter(),
            events_read: 0,
            truncated_after: self.truncated_after,
            failed: false,
        })
    }
}

/// One traversal of a `RecordedMatch`.
pub struct RecordedPass<'a> {
    events: Iter<'a, GameEvent>,
    events_read: usize,
    truncated_after: Option<usize>,
    failed: bool,
}

impl Iterator for RecordedPass<'_> {
    type Item = Result<GameEvent, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if self.truncated_after == Some(self.events_read) {
            self.failed = true;
            return Some(Err(SourceError::Truncated {
                events_read: self.events_read,
            }));
        }

        let event = self.events.next()?.clone();
        self.events_read += 1;
        Some(Ok(event))
    }
}
