mod classifier;
mod parser;
mod preview;
mod shot_id;
mod types;
mod utils;
mod walker;

pub use classifier::{
    has_locator_marker, match_clip_name_line, match_event_line, match_locator_line,
};
pub use parser::{parse_edl, parse_edl_lines, LocatorReport};
pub use preview::{preview_edl, EdlPreview, PreviewLine};
pub use shot_id::{extract_shot_id, ShotIdMatcher, DEFAULT_SHOT_ID_PATTERN};
pub use types::{
    EventLine, EventRecord, LocatorLine, LocatorRecord, ParseStats, ParseWarning,
};
pub use utils::{decode_edl_text, split_edl_lines};
pub use walker::{EdlWalk, EdlWalker, EventRegistry, WalkerState};
