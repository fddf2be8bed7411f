pub mod timecode;
pub use timecode::{
    calculate_duration_frames, timecode_to_frames, try_timecode_to_frames, FrameRate,
};

pub mod edl;
pub use edl::{
    decode_edl_text, extract_shot_id, parse_edl, preview_edl, EdlPreview, LocatorReport,
    ParseStats, ParseWarning, ShotIdMatcher,
};

pub mod table;
pub use table::{Column, LocatorTable, OutputRow};

pub mod options;
pub use options::{ColorFilter, ExtractOptions, LocatorColor};

pub mod sources;
pub use sources::{
    extract_local_locators, extract_locators_generic, extract_remote_locators, EdlSource,
    HttpEdlSource, LocalEdlSource,
};

pub mod errors;
pub use errors::{EdlParserError, EdlParserResult, OptionsError, SourceError, TimecodeError};

macro_rules! with_edl_source {
    ($source:expr, $body:expr) => {
        if $source.starts_with("http://") || $source.starts_with("https://") {
            let source = HttpEdlSource::new($source)?;
            $body(source).await
        } else {
            let source = LocalEdlSource::open($source)?;
            $body(source).await
        }
    };
}

/// Extract locators from a local path or an http(s) URL
pub async fn extract_locators(
    source: String,
    options: &ExtractOptions,
) -> EdlParserResult<LocatorReport> {
    with_edl_source!(source, |source| {
        crate::sources::extract_locators_generic(source, options)
    })
}

/// Extract locators and flatten them to CSV text
pub async fn extract_locators_csv(
    source: String,
    options: &ExtractOptions,
) -> EdlParserResult<String> {
    let report = extract_locators(source, options).await?;
    Ok(report.to_csv())
}
