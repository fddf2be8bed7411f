use crate::errors::OptionsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named locator colors offered by the color filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocatorColor {
    Blue,
    Cyan,
    Green,
    Yellow,
    Red,
    Orange,
    Magenta,
    Purple,
    Fuchsia,
    Rose,
    Sky,
    Mint,
    Lemon,
    Sand,
    Cocoa,
    White,
    Black,
    Denim,
}

impl LocatorColor {
    pub const ALL: [LocatorColor; 18] = [
        LocatorColor::Blue,
        LocatorColor::Cyan,
        LocatorColor::Green,
        LocatorColor::Yellow,
        LocatorColor::Red,
        LocatorColor::Orange,
        LocatorColor::Magenta,
        LocatorColor::Purple,
        LocatorColor::Fuchsia,
        LocatorColor::Rose,
        LocatorColor::Sky,
        LocatorColor::Mint,
        LocatorColor::Lemon,
        LocatorColor::Sand,
        LocatorColor::Cocoa,
        LocatorColor::White,
        LocatorColor::Black,
        LocatorColor::Denim,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LocatorColor::Blue => "Blue",
            LocatorColor::Cyan => "Cyan",
            LocatorColor::Green => "Green",
            LocatorColor::Yellow => "Yellow",
            LocatorColor::Red => "Red",
            LocatorColor::Orange => "Orange",
            LocatorColor::Magenta => "Magenta",
            LocatorColor::Purple => "Purple",
            LocatorColor::Fuchsia => "Fuchsia",
            LocatorColor::Rose => "Rose",
            LocatorColor::Sky => "Sky",
            LocatorColor::Mint => "Mint",
            LocatorColor::Lemon => "Lemon",
            LocatorColor::Sand => "Sand",
            LocatorColor::Cocoa => "Cocoa",
            LocatorColor::White => "White",
            LocatorColor::Black => "Black",
            LocatorColor::Denim => "Denim",
        }
    }

    /// CSS hex value used when rendering the color
    pub fn hex(self) -> &'static str {
        match self {
            LocatorColor::Blue => "#0074D9",
            LocatorColor::Cyan => "#00B8D4",
            LocatorColor::Green => "#2ECC40",
            LocatorColor::Yellow => "#FFDC00",
            LocatorColor::Red => "#FF4136",
            LocatorColor::Orange => "#FF851B",
            LocatorColor::Magenta => "#FF00FF",
            LocatorColor::Purple => "#B10DC9",
            LocatorColor::Fuchsia => "#F012BE",
            LocatorColor::Rose => "#F5B0C4",
            LocatorColor::Sky => "#87CEEB",
            LocatorColor::Mint => "#98FB98",
            LocatorColor::Lemon => "#FFFACD",
            LocatorColor::Sand => "#F4A460",
            LocatorColor::Cocoa => "#6F4E37",
            LocatorColor::White => "#FFFFFF",
            LocatorColor::Black => "#000000",
            LocatorColor::Denim => "#1560BD",
        }
    }

    /// Case-insensitive comparison against a tag as written in the EDL
    pub fn matches_tag(self, tag: &str) -> bool {
        tag.eq_ignore_ascii_case(self.name())
    }
}

impl fmt::Display for LocatorColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LocatorColor {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocatorColor::ALL
            .iter()
            .copied()
            .find(|color| color.matches_tag(s.trim()))
            .ok_or_else(|| OptionsError::new(format!("Unknown locator color: '{}'", s)))
    }
}

/// Which locators survive into the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorFilter {
    #[default]
    All,
    Only(LocatorColor),
}

impl ColorFilter {
    pub fn is_active(&self) -> bool {
        matches!(self, ColorFilter::Only(_))
    }

    /// Whether a locator with this color tag is kept
    pub fn accepts(&self, tag: &str) -> bool {
        match self {
            ColorFilter::All => true,
            ColorFilter::Only(color) => color.matches_tag(tag),
        }
    }
}

impl fmt::Display for ColorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorFilter::All => write!(f, "All Colors"),
            ColorFilter::Only(color) => write!(f, "{}", color),
        }
    }
}

impl FromStr for ColorFilter {
    type Err = OptionsError;

    /// "All Colors" (or "all") disables filtering; anything else must be a palette name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("all")
            || trimmed.eq_ignore_ascii_case("all colors")
        {
            return Ok(ColorFilter::All);
        }
        trimmed.parse().map(ColorFilter::Only)
    }
}
