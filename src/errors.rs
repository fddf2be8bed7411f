use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while extracting locators
#[derive(Debug)]
pub enum EdlParserError {
    Timecode(TimecodeError),
    Options(OptionsError),
    Source(SourceError),
    Other(io::Error),
}

/// Timecode conversion specific errors
#[derive(Debug, Clone, PartialEq)]
pub struct TimecodeError {
    pub message: String,
}

impl TimecodeError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Invalid extraction options (frame rate label, color name, shot id pattern)
#[derive(Debug)]
pub struct OptionsError {
    pub message: String,
}

impl OptionsError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct SourceError {
    pub message: String,
}

impl SourceError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for EdlParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdlParserError::Other(err) => write!(f, "I/O error: {}", err),
            EdlParserError::Timecode(err) => write!(f, "Timecode error: {}", err),
            EdlParserError::Options(err) => write!(f, "Options error: {}", err),
            EdlParserError::Source(err) => write!(f, "Source error: {}", err),
        }
    }
}

impl fmt::Display for TimecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for EdlParserError {}
impl Error for TimecodeError {}
impl Error for OptionsError {}
impl Error for SourceError {}

// Conversion implementations
impl From<io::Error> for EdlParserError {
    fn from(err: io::Error) -> Self {
        EdlParserError::Other(err)
    }
}

impl From<TimecodeError> for EdlParserError {
    fn from(err: TimecodeError) -> Self {
        EdlParserError::Timecode(err)
    }
}

impl From<OptionsError> for EdlParserError {
    fn from(err: OptionsError) -> Self {
        EdlParserError::Options(err)
    }
}

impl From<SourceError> for EdlParserError {
    fn from(err: SourceError) -> Self {
        EdlParserError::Source(err)
    }
}

// Conversion to io::Error for callers that work with plain I/O results
impl From<EdlParserError> for io::Error {
    fn from(err: EdlParserError) -> Self {
        match err {
            EdlParserError::Other(inner) => inner,
            other => io::Error::other(other),
        }
    }
}

impl From<TimecodeError> for io::Error {
    fn from(err: TimecodeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

impl From<OptionsError> for io::Error {
    fn from(err: OptionsError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

impl From<SourceError> for io::Error {
    fn from(err: SourceError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with EdlParserError
pub type EdlParserResult<T> = Result<T, EdlParserError>;
