use serde::Serialize;

/// Fields captured from an event (cut) line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLine {
    pub event_number: String,
    pub tape_name: String,
    pub src_in: String,
    pub src_out: String,
    pub rec_in: String,
    pub rec_out: String,
}

/// Fields captured from a `*LOC` comment line.
///
/// A line that carries the `*LOC` marker but not the full
/// `TC COLOR DESCRIPTION` shape still yields a record, with empty fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocatorLine {
    pub timecode: String,
    pub color: String,
    pub description: String,
}

impl LocatorLine {
    pub fn is_complete(&self) -> bool {
        !self.timecode.is_empty()
    }
}

/// Registered state of one event number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub event_number: String,
    pub tape_name: String,
    pub clip_name: String,
    pub src_in: String,
    pub src_out: String,
    pub rec_in: String,
    pub rec_out: String,
    /// Source duration under the active frame rate options
    pub duration_frames: u64,
}

/// One `*LOC` occurrence joined with the event that was current when it was read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocatorRecord {
    pub line_number: usize,
    /// Snapshot of the event at the time the locator line was read
    pub event: Option<EventRecord>,
    pub timecode: String,
    pub color: String,
    pub description: String,
    pub shot_id: String,
    pub duration_frames: u64,
    /// Locator timecode in frames, only when the event has a record-in timecode.
    /// A locator without a timecode counts as frame 0.
    pub record_frames: Option<i64>,
}

impl LocatorRecord {
    pub fn event_number(&self) -> Option<&str> {
        self.event.as_ref().map(|e| e.event_number.as_str())
    }
}

/// Recoverable problem found while walking the EDL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseWarning {
    /// 1-based line number
    pub line_number: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub lines: usize,
    pub events: usize,
    pub clip_name_lines: usize,
    pub locator_lines: usize,
    pub filtered_locators: usize,
    pub placeholder_rows: usize,
}
