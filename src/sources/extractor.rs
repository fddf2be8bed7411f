use super::http_edl_source::HttpEdlSource;
use super::EdlSource;
use crate::edl::{decode_edl_text, parse_edl, LocatorReport};
use crate::errors::EdlParserResult;
use crate::options::ExtractOptions;
use log::info;
use std::path::Path;

/// Read, decode and parse an EDL from any source
pub async fn extract_locators_generic<S: EdlSource>(
    mut source: S,
    options: &ExtractOptions,
) -> EdlParserResult<LocatorReport> {
    info!("Locator Extraction...");

    let bytes = source.read_all().await?;
    info!("Read EDL: {} bytes", bytes.len());

    let report = parse_edl(&decode_edl_text(&bytes), options)?;
    match report.empty_message() {
        Some(message) => info!("{}", message),
        None => info!("Extracted {} locator rows", report.table.len()),
    }

    source.print_stats();
    Ok(report)
}

/// Extract locators from an EDL served over HTTP
pub async fn extract_remote_locators(
    url: String,
    options: &ExtractOptions,
) -> EdlParserResult<LocatorReport> {
    let source = HttpEdlSource::new(url)?;
    extract_locators_generic(source, options).await
}

/// Extract locators from a local EDL file without an async runtime
pub fn extract_local_locators<P: AsRef<Path>>(
    path: P,
    options: &ExtractOptions,
) -> EdlParserResult<LocatorReport> {
    let bytes = std::fs::read(path.as_ref())?;
    info!("Read {:?}: {} bytes", path.as_ref(), bytes.len());
    parse_edl(&decode_edl_text(&bytes), options)
}
