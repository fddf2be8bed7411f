use super::types::{EventLine, LocatorLine};
use regex::Regex;
use std::sync::OnceLock;

const CLIP_NAME_MARKER: &str = "*FROM CLIP NAME:";

fn event_regex() -> &'static Regex {
    static EVENT: OnceLock<Regex> = OnceLock::new();
    // number, tape, (track, transition), src in, src out, rec in, rec out
    EVENT.get_or_init(|| {
        Regex::new(r"^\s*([0-9]{3,6})\s+(\S+)\s+\S+\s+\S+\s+(\S+)\s+(\S+)\s+(\S+)\s+(\S+)")
            .expect("event line pattern")
    })
}

fn clip_name_regex() -> &'static Regex {
    static CLIP_NAME: OnceLock<Regex> = OnceLock::new();
    CLIP_NAME.get_or_init(|| Regex::new(r"^\*FROM CLIP NAME:\s+(.*)$").expect("clip name pattern"))
}

fn locator_marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"(?i)\*\s*LOC").expect("locator marker pattern"))
}

fn locator_regex() -> &'static Regex {
    static LOCATOR: OnceLock<Regex> = OnceLock::new();
    LOCATOR.get_or_init(|| {
        Regex::new(r"(?i)^\*\s*LOC\s*:?\s+([0-9]{2}:[0-9]{2}:[0-9]{2}:[0-9]{2})\s+(\w+)(?:\s+(.*))?$")
            .expect("locator line pattern")
    })
}

/// Match an event line: `001  TAPE  V  C  SRC_IN SRC_OUT REC_IN REC_OUT`
pub fn match_event_line(line: &str) -> Option<EventLine> {
    let caps = event_regex().captures(line)?;
    Some(EventLine {
        event_number: caps[1].to_string(),
        tape_name: caps[2].to_string(),
        src_in: caps[3].to_string(),
        src_out: caps[4].to_string(),
        rec_in: caps[5].to_string(),
        rec_out: caps[6].to_string(),
    })
}

/// Match `*FROM CLIP NAME: <name>` and return the trimmed name
pub fn match_clip_name_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if !trimmed.starts_with(CLIP_NAME_MARKER) {
        return None;
    }
    clip_name_regex()
        .captures(trimmed)
        .map(|caps| caps[1].trim().to_string())
}

/// Whether the line carries a `*LOC` marker anywhere
pub fn has_locator_marker(line: &str) -> bool {
    locator_marker_regex().is_match(line)
}

/// Match a `*LOC: HH:MM:SS:FF COLOR description` line.
///
/// Returns `None` when the line has no `*LOC` marker at all. A marker without
/// the full shape gives a `LocatorLine` with empty fields.
pub fn match_locator_line(line: &str) -> Option<LocatorLine> {
    if !has_locator_marker(line) {
        return None;
    }

    let locator = locator_regex()
        .captures(line.trim())
        .map(|caps| LocatorLine {
            timecode: caps[1].to_string(),
            color: caps[2].to_string(),
            description: caps
                .get(3)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
        })
        .unwrap_or_default();
    Some(locator)
}
