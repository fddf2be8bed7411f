use crate::edl::{EventRecord, LocatorRecord};
use crate::options::ExtractOptions;
use serde::Serialize;

/// Description written on rows of events that have no locator
pub const NO_LOCATOR_DESCRIPTION: &str = "No LOCATOR found";

/// Output columns, in their fixed order
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Event,
    ShotId,
    Tapename,
    Clipname,
    SrcIn,
    SrcOut,
    DurationFrames,
    RecIn,
    RecOut,
    LocatorTimecode,
    LocatorColor,
    LocatorDescription,
}

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::Event => "Event",
            Column::ShotId => "Shot ID",
            Column::Tapename => "Tapename",
            Column::Clipname => "Clipname",
            Column::SrcIn => "Src_In",
            Column::SrcOut => "Src_Out",
            Column::DurationFrames => "Duration (Frames)",
            Column::RecIn => "Rec_In",
            Column::RecOut => "Rec_Out",
            Column::LocatorTimecode => "*LOC TC",
            Column::LocatorColor => "*LOC Color",
            Column::LocatorDescription => "*LOC Description",
        }
    }

    /// Column set for the given options; excluded optional columns are omitted
    pub fn for_options(options: &ExtractOptions) -> Vec<Column> {
        let mut columns = vec![Column::Event, Column::ShotId];
        if options.include_tapename {
            columns.push(Column::Tapename);
        }
        if options.include_clipname {
            columns.push(Column::Clipname);
        }
        columns.extend([
            Column::SrcIn,
            Column::SrcOut,
            Column::DurationFrames,
            Column::RecIn,
            Column::RecOut,
            Column::LocatorTimecode,
            Column::LocatorColor,
            Column::LocatorDescription,
        ]);
        columns
    }
}

/// One flattened table row
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputRow {
    pub event: String,
    pub shot_id: String,
    pub tapename: String,
    pub clipname: String,
    pub src_in: String,
    pub src_out: String,
    pub duration_frames: u64,
    pub rec_in: String,
    pub rec_out: String,
    pub locator_timecode: String,
    pub locator_color: String,
    pub locator_description: String,
    /// Locator timecode at record rate; kept with the row but not exported
    #[serde(skip)]
    pub record_frames: Option<i64>,
    #[serde(skip)]
    pub is_placeholder: bool,
}

impl OutputRow {
    pub fn from_locator(locator: &LocatorRecord) -> Self {
        let mut row = locator.event.as_ref().map(Self::event_fields).unwrap_or_default();
        row.shot_id = locator.shot_id.clone();
        row.duration_frames = locator.duration_frames;
        row.locator_timecode = locator.timecode.clone();
        row.locator_color = locator.color.clone();
        row.locator_description = locator.description.clone();
        row.record_frames = locator.record_frames;
        row
    }

    /// Row for an event without any locator; the shot id comes from the clip name
    pub fn placeholder(event: &EventRecord, shot_id: String) -> Self {
        Self {
            shot_id,
            locator_description: NO_LOCATOR_DESCRIPTION.to_string(),
            is_placeholder: true,
            ..Self::event_fields(event)
        }
    }

    fn event_fields(event: &EventRecord) -> Self {
        Self {
            event: event.event_number.clone(),
            tapename: event.tape_name.clone(),
            clipname: event.clip_name.clone(),
            src_in: event.src_in.clone(),
            src_out: event.src_out.clone(),
            duration_frames: event.duration_frames,
            rec_in: event.rec_in.clone(),
            rec_out: event.rec_out.clone(),
            ..Self::default()
        }
    }

    pub fn value(&self, column: Column) -> String {
        match column {
            Column::Event => self.event.clone(),
            Column::ShotId => self.shot_id.clone(),
            Column::Tapename => self.tapename.clone(),
            Column::Clipname => self.clipname.clone(),
            Column::SrcIn => self.src_in.clone(),
            Column::SrcOut => self.src_out.clone(),
            Column::DurationFrames => self.duration_frames.to_string(),
            Column::RecIn => self.rec_in.clone(),
            Column::RecOut => self.rec_out.clone(),
            Column::LocatorTimecode => self.locator_timecode.clone(),
            Column::LocatorColor => self.locator_color.clone(),
            Column::LocatorDescription => self.locator_description.clone(),
        }
    }
}

/// Ordered rows under an ordered column set
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct LocatorTable {
    pub columns: Vec<Column>,
    pub rows: Vec<OutputRow>,
}

impl LocatorTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header()).collect()
    }

    /// Row values projected onto the column set
    pub fn records(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| self.columns.iter().map(|&c| row.value(c)).collect())
            .collect()
    }
}
