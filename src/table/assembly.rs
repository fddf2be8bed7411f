use super::types::{Column, LocatorTable, OutputRow};
use crate::edl::{EdlWalk, LocatorRecord, ShotIdMatcher};
use crate::options::ExtractOptions;
use log::info;
use std::collections::HashMap;

/// Build the output table from a finished walk.
///
/// Locators-only: one row per kept locator, in line order.
/// All events: locators read before any event line come first, then each
/// event in first-seen order with its locators, or a single placeholder row
/// when it has none.
pub fn assemble_table(
    walk: &EdlWalk,
    options: &ExtractOptions,
    shot_ids: &ShotIdMatcher,
) -> LocatorTable {
    let columns = Column::for_options(options);

    let rows = if options.locators_only {
        walk.locators.iter().map(OutputRow::from_locator).collect()
    } else {
        all_event_rows(walk, shot_ids)
    };

    info!(
        "Assembled {} rows ({} columns) from {} events and {} locators",
        rows.len(),
        columns.len(),
        walk.registry.len(),
        walk.locators.len()
    );

    LocatorTable { columns, rows }
}

fn all_event_rows(walk: &EdlWalk, shot_ids: &ShotIdMatcher) -> Vec<OutputRow> {
    let mut orphans: Vec<&LocatorRecord> = Vec::new();
    let mut by_event: HashMap<&str, Vec<&LocatorRecord>> = HashMap::new();
    for locator in &walk.locators {
        match locator.event_number() {
            Some(number) => by_event.entry(number).or_default().push(locator),
            None => orphans.push(locator),
        }
    }

    let mut rows: Vec<OutputRow> = orphans.into_iter().map(OutputRow::from_locator).collect();
    for event in walk.registry.iter() {
        match by_event.get(event.event_number.as_str()) {
            Some(locators) => rows.extend(locators.iter().map(|l| OutputRow::from_locator(l))),
            None => rows.push(OutputRow::placeholder(
                event,
                shot_ids.extract(&event.clip_name),
            )),
        }
    }
    rows
}
