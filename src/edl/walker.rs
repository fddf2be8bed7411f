use super::classifier::{match_clip_name_line, match_event_line, match_locator_line};
use super::shot_id::ShotIdMatcher;
use super::types::{
    EventLine, EventRecord, LocatorLine, LocatorRecord, ParseStats, ParseWarning,
};
use crate::options::ExtractOptions;
use crate::timecode::{frames_between, try_timecode_to_frames};
use log::{debug, warn};
use std::collections::HashMap;

/// Events keyed by number, iterated in first-seen order
#[derive(Debug, Clone, Default)]
pub struct EventRegistry {
    order: Vec<String>,
    events: HashMap<String, EventRecord>,
}

impl EventRegistry {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, event_number: &str) -> Option<&EventRecord> {
        self.events.get(event_number)
    }

    fn get_mut(&mut self, event_number: &str) -> Option<&mut EventRecord> {
        self.events.get_mut(event_number)
    }

    /// Insert or overwrite; the position of the first registration is kept.
    fn register(&mut self, record: EventRecord) {
        if !self.events.contains_key(&record.event_number) {
            self.order.push(record.event_number.clone());
        }
        self.events.insert(record.event_number.clone(), record);
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> {
        self.order.iter().filter_map(|number| self.events.get(number))
    }
}

/// Which event subsequent comment lines attach to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WalkerState {
    #[default]
    NoCurrentEvent,
    HasCurrentEvent(String),
}

/// Everything collected by one pass over the lines
#[derive(Debug, Clone, Default)]
pub struct EdlWalk {
    pub registry: EventRegistry,
    pub locators: Vec<LocatorRecord>,
    pub warnings: Vec<ParseWarning>,
    pub stats: ParseStats,
}

/// Single-pass line walker tracking the current event
pub struct EdlWalker<'a> {
    options: &'a ExtractOptions,
    shot_ids: &'a ShotIdMatcher,
    drop_frame: bool,
    state: WalkerState,
    walk: EdlWalk,
}

impl<'a> EdlWalker<'a> {
    pub fn new(options: &'a ExtractOptions, shot_ids: &'a ShotIdMatcher) -> Self {
        Self {
            options,
            shot_ids,
            drop_frame: options.effective_drop_frame(),
            state: WalkerState::NoCurrentEvent,
            walk: EdlWalk::default(),
        }
    }

    /// Walk all lines and return the collected events and locators
    pub fn walk<'l, I>(options: &'a ExtractOptions, shot_ids: &'a ShotIdMatcher, lines: I) -> EdlWalk
    where
        I: IntoIterator<Item = &'l str>,
    {
        let mut walker = Self::new(options, shot_ids);
        for (index, line) in lines.into_iter().enumerate() {
            walker.process_line(index + 1, line);
        }
        walker.finish()
    }

    pub fn state(&self) -> &WalkerState {
        &self.state
    }

    pub fn registry(&self) -> &EventRegistry {
        &self.walk.registry
    }

    /// Classify one line and update the walker state
    pub fn process_line(&mut self, line_number: usize, line: &str) {
        self.walk.stats.lines += 1;

        if let Some(event) = match_event_line(line) {
            self.register_event(line_number, event);
            return;
        }

        if let Some(clip_name) = match_clip_name_line(line) {
            self.walk.stats.clip_name_lines += 1;
            match self.current_event_mut() {
                Some(event) => event.clip_name = clip_name,
                None => debug!("line {}: clip name before any event ignored", line_number),
            }
        }

        // checked even on clip name lines
        if let Some(locator) = match_locator_line(line) {
            self.record_locator(line_number, locator);
        }
    }

    pub fn finish(mut self) -> EdlWalk {
        self.walk.stats.events = self.walk.registry.len();
        self.walk
    }

    fn current_event(&self) -> Option<&EventRecord> {
        match &self.state {
            WalkerState::HasCurrentEvent(number) => self.walk.registry.get(number),
            WalkerState::NoCurrentEvent => None,
        }
    }

    fn current_event_mut(&mut self) -> Option<&mut EventRecord> {
        match &self.state {
            WalkerState::HasCurrentEvent(number) => self.walk.registry.get_mut(number),
            WalkerState::NoCurrentEvent => None,
        }
    }

    fn register_event(&mut self, line_number: usize, event: EventLine) {
        // a repeated event number keeps the clip name it already had
        let clip_name = self
            .walk
            .registry
            .get(&event.event_number)
            .map(|existing| existing.clip_name.clone())
            .unwrap_or_default();

        let frames_in = self.frames(line_number, &event.src_in);
        let frames_out = self.frames(line_number, &event.src_out);
        let duration_frames =
            frames_between(frames_in, frames_out, self.options.exclude_last_frame);

        debug!(
            "line {}: event {} ({} -> {}, {} frames)",
            line_number, event.event_number, event.src_in, event.src_out, duration_frames
        );

        self.state = WalkerState::HasCurrentEvent(event.event_number.clone());
        self.walk.registry.register(EventRecord {
            event_number: event.event_number,
            tape_name: event.tape_name,
            clip_name,
            src_in: event.src_in,
            src_out: event.src_out,
            rec_in: event.rec_in,
            rec_out: event.rec_out,
            duration_frames,
        });
    }

    fn record_locator(&mut self, line_number: usize, locator: LocatorLine) {
        self.walk.stats.locator_lines += 1;

        if !self.options.color_filter.accepts(&locator.color) {
            debug!(
                "line {}: locator color '{}' filtered out",
                line_number, locator.color
            );
            self.walk.stats.filtered_locators += 1;
            return;
        }

        let event = self.current_event().cloned();
        // a marker-only locator has no timecode and sits at frame 0
        let record_frames = match &event {
            Some(e) if !e.rec_in.is_empty() => Some(if locator.is_complete() {
                self.frames(line_number, &locator.timecode)
            } else {
                0
            }),
            _ => None,
        };

        self.walk.locators.push(LocatorRecord {
            line_number,
            duration_frames: event.as_ref().map_or(0, |e| e.duration_frames),
            event,
            shot_id: self.shot_ids.extract(&locator.description),
            timecode: locator.timecode,
            color: locator.color,
            description: locator.description,
            record_frames,
        });
    }

    /// Frame count for a timecode; malformed input is recorded as a warning and counts as 0
    fn frames(&mut self, line_number: usize, tc: &str) -> i64 {
        match try_timecode_to_frames(tc, self.options.frame_rate, self.drop_frame) {
            Ok(frames) => frames,
            Err(e) => {
                warn!("line {}: {} - using 0 frames", line_number, e);
                self.walk.warnings.push(ParseWarning {
                    line_number,
                    message: e.message,
                });
                0
            }
        }
    }
}
