use super::colors::ColorFilter;
use crate::edl::ShotIdMatcher;
use crate::errors::OptionsError;
use crate::timecode::FrameRate;
use serde::{Deserialize, Serialize};

/// Settings consumed by one extraction run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub frame_rate: FrameRate,
    /// Only honored for 29.97 and 59.94
    pub drop_frame: bool,
    pub color_filter: ColorFilter,
    pub include_tapename: bool,
    pub include_clipname: bool,
    /// `false` exports every event, with a placeholder row for events without locators
    pub locators_only: bool,
    pub exclude_last_frame: bool,
    /// Project-specific shot id regex; the built-in pattern is used when unset
    pub shot_id_pattern: Option<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            frame_rate: FrameRate::Fps25,
            drop_frame: true,
            color_filter: ColorFilter::All,
            include_tapename: true,
            include_clipname: true,
            locators_only: true,
            exclude_last_frame: true,
            shot_id_pattern: None,
        }
    }
}

impl ExtractOptions {
    pub fn new(frame_rate: FrameRate) -> Self {
        Self {
            frame_rate,
            ..Self::default()
        }
    }

    pub fn with_frame_rate(mut self, frame_rate: FrameRate) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn with_drop_frame(mut self, drop_frame: bool) -> Self {
        self.drop_frame = drop_frame;
        self
    }

    pub fn with_color_filter(mut self, color_filter: ColorFilter) -> Self {
        self.color_filter = color_filter;
        self
    }

    pub fn with_tapename(mut self, include: bool) -> Self {
        self.include_tapename = include;
        self
    }

    pub fn with_clipname(mut self, include: bool) -> Self {
        self.include_clipname = include;
        self
    }

    pub fn with_locators_only(mut self, locators_only: bool) -> Self {
        self.locators_only = locators_only;
        self
    }

    pub fn with_exclude_last_frame(mut self, exclude: bool) -> Self {
        self.exclude_last_frame = exclude;
        self
    }

    pub fn with_shot_id_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.shot_id_pattern = Some(pattern.into());
        self
    }

    /// Drop-frame flag as it applies to the selected rate
    pub fn effective_drop_frame(&self) -> bool {
        self.drop_frame && self.frame_rate.supports_drop_frame()
    }

    pub fn shot_id_matcher(&self) -> Result<ShotIdMatcher, OptionsError> {
        match &self.shot_id_pattern {
            Some(pattern) => ShotIdMatcher::with_pattern(pattern),
            None => Ok(ShotIdMatcher::default()),
        }
    }
}
