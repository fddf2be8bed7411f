use crate::errors::OptionsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Frame rates an EDL can be read at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FrameRate {
    #[serde(rename = "23.976")]
    Fps23_976,
    #[serde(rename = "24")]
    Fps24,
    #[default]
    #[serde(rename = "25")]
    Fps25,
    #[serde(rename = "29.97")]
    Fps29_97,
    #[serde(rename = "30")]
    Fps30,
    #[serde(rename = "59.94")]
    Fps59_94,
    #[serde(rename = "60")]
    Fps60,
}

impl FrameRate {
    pub const ALL: [FrameRate; 7] = [
        FrameRate::Fps23_976,
        FrameRate::Fps24,
        FrameRate::Fps25,
        FrameRate::Fps29_97,
        FrameRate::Fps30,
        FrameRate::Fps59_94,
        FrameRate::Fps60,
    ];

    /// Frames per second used for non-drop arithmetic
    pub fn as_f64(self) -> f64 {
        match self {
            FrameRate::Fps23_976 => 23.976,
            FrameRate::Fps24 => 24.0,
            FrameRate::Fps25 => 25.0,
            FrameRate::Fps29_97 => 29.97,
            FrameRate::Fps30 => 30.0,
            FrameRate::Fps59_94 => 59.94,
            FrameRate::Fps60 => 60.0,
        }
    }

    /// Frame numbers per second as written in the timecode
    pub fn nominal_fps(self) -> u32 {
        match self {
            FrameRate::Fps23_976 | FrameRate::Fps24 => 24,
            FrameRate::Fps25 => 25,
            FrameRate::Fps29_97 | FrameRate::Fps30 => 30,
            FrameRate::Fps59_94 | FrameRate::Fps60 => 60,
        }
    }

    pub fn supports_drop_frame(self) -> bool {
        matches!(self, FrameRate::Fps29_97 | FrameRate::Fps59_94)
    }

    /// Frame numbers skipped at the start of every minute not divisible by ten
    pub fn dropped_frames_per_minute(self) -> u32 {
        match self {
            FrameRate::Fps29_97 => 2,
            FrameRate::Fps59_94 => 4,
            _ => 0,
        }
    }

    /// Label shown in the frame rate picker
    pub fn label(self) -> &'static str {
        match self {
            FrameRate::Fps23_976 => "23.98 fps",
            FrameRate::Fps24 => "24 fps",
            FrameRate::Fps25 => "25 fps",
            FrameRate::Fps29_97 => "29.97 fps",
            FrameRate::Fps30 => "30 fps",
            FrameRate::Fps59_94 => "59.94 fps",
            FrameRate::Fps60 => "60 fps",
        }
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameRate::Fps23_976 => write!(f, "23.976"),
            FrameRate::Fps24 => write!(f, "24"),
            FrameRate::Fps25 => write!(f, "25"),
            FrameRate::Fps29_97 => write!(f, "29.97"),
            FrameRate::Fps30 => write!(f, "30"),
            FrameRate::Fps59_94 => write!(f, "59.94"),
            FrameRate::Fps60 => write!(f, "60"),
        }
    }
}

impl FromStr for FrameRate {
    type Err = OptionsError;

    /// Accepts plain numbers ("29.97", "24") and picker labels ("23.98 fps").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed
            .strip_suffix("fps")
            .or_else(|| trimmed.strip_suffix("FPS"))
            .unwrap_or(trimmed)
            .trim();

        let value: f64 = number
            .parse()
            .map_err(|_| OptionsError::new(format!("Unsupported frame rate: '{}'", s)))?;

        FrameRate::ALL
            .iter()
            .copied()
            .find(|rate| (rate.as_f64() - value).abs() < 0.01)
            .ok_or_else(|| OptionsError::new(format!("Unsupported frame rate: '{}'", s)))
    }
}
