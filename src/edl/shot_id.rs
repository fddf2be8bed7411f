use crate::errors::OptionsError;
use regex::Regex;
use std::sync::OnceLock;

/// Three letters + 3 digits + 4 digits, three letters + 4 digits, or CS + 4 digits.
pub const DEFAULT_SHOT_ID_PATTERN: &str = r"[A-Z]{3}_\d{3}_\d{4}|[A-Z]{3}_\d{4}|CS\d{4}";

fn default_regex() -> &'static Regex {
    static DEFAULT: OnceLock<Regex> = OnceLock::new();
    DEFAULT.get_or_init(|| Regex::new(DEFAULT_SHOT_ID_PATTERN).expect("built-in shot id pattern"))
}

/// Finds the shot id token embedded in locator or clip text
#[derive(Debug, Clone)]
pub struct ShotIdMatcher {
    regex: Regex,
}

impl ShotIdMatcher {
    /// Matcher for a project-specific pattern.
    ///
    /// When the pattern has a capture group, the first group is the shot id;
    /// otherwise the whole match is.
    pub fn with_pattern(pattern: &str) -> Result<Self, OptionsError> {
        let regex = Regex::new(pattern).map_err(|e| {
            OptionsError::new(format!("Invalid shot id pattern '{}': {}", pattern, e))
        })?;
        Ok(Self { regex })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// First shot id in `text`, or an empty string
    pub fn extract(&self, text: &str) -> String {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(1).or_else(|| caps.get(0)))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

impl Default for ShotIdMatcher {
    fn default() -> Self {
        Self {
            regex: default_regex().clone(),
        }
    }
}

/// Shot id lookup with the built-in pattern
pub fn extract_shot_id(text: &str) -> String {
    default_regex()
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
