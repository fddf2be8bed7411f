mod frames;
mod types;

pub use frames::{
    calculate_duration_frames, frames_between, timecode_to_frames, try_timecode_to_frames,
};
pub use types::FrameRate;

#[cfg(test)]
pub mod unit_test;
