use super::types::{ParseStats, ParseWarning};
use super::utils::split_edl_lines;
use super::walker::EdlWalker;
use crate::errors::EdlParserResult;
use crate::options::ExtractOptions;
use crate::table::{assemble_table, LocatorTable};
use log::info;
use serde::Serialize;

const EMPTY_RESULT_MESSAGE: &str =
    "No *LOC entries found in the EDL or they were filtered out by the color selection.";

/// Result of one extraction run
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct LocatorReport {
    pub table: LocatorTable,
    pub warnings: Vec<ParseWarning>,
    pub stats: ParseStats,
}

impl LocatorReport {
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Message to show instead of an empty table
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_RESULT_MESSAGE)
    }

    pub fn to_csv(&self) -> String {
        self.table.to_csv()
    }
}

/// Parse decoded EDL text into a locator report
pub fn parse_edl(text: &str, options: &ExtractOptions) -> EdlParserResult<LocatorReport> {
    parse_edl_lines(split_edl_lines(text), options)
}

/// Parse already split lines; each call works on its own registry
pub fn parse_edl_lines<'l, I>(lines: I, options: &ExtractOptions) -> EdlParserResult<LocatorReport>
where
    I: IntoIterator<Item = &'l str>,
{
    let shot_ids = options.shot_id_matcher()?;
    let walk = EdlWalker::walk(options, &shot_ids, lines);

    info!(
        "Walked {} lines: {} events, {} locator lines ({} filtered), {} warnings",
        walk.stats.lines,
        walk.stats.events,
        walk.stats.locator_lines,
        walk.stats.filtered_locators,
        walk.warnings.len()
    );

    let table = assemble_table(&walk, options, &shot_ids);
    let mut stats = walk.stats;
    stats.placeholder_rows = table.rows.iter().filter(|r| r.is_placeholder).count();

    Ok(LocatorReport {
        table,
        warnings: walk.warnings,
        stats,
    })
}
