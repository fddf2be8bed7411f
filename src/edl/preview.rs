use super::classifier::has_locator_marker;
use super::utils::split_edl_lines;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    pub text: String,
    /// Line carries a `*LOC` marker and should be highlighted
    pub has_locator: bool,
}

/// The first lines of an EDL with locator lines flagged
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EdlPreview {
    pub lines: Vec<PreviewLine>,
    pub total_lines: usize,
    pub truncated: bool,
}

pub fn preview_edl(text: &str, limit: usize) -> EdlPreview {
    let all_lines = split_edl_lines(text);
    let lines = all_lines
        .iter()
        .take(limit)
        .map(|line| PreviewLine {
            text: line.to_string(),
            has_locator: has_locator_marker(line),
        })
        .collect();

    EdlPreview {
        lines,
        total_lines: all_lines.len(),
        truncated: all_lines.len() > limit,
    }
}
