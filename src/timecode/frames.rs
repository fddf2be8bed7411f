use super::types::FrameRate;
use crate::errors::TimecodeError;
use log::warn;

/// Split `HH:MM:SS:FF` into its four integer fields; each field is one or two ASCII digits
fn split_timecode(tc: &str) -> Result<[i64; 4], TimecodeError> {
    let parts: Vec<&str> = tc.trim().split(':').collect();
    if parts.len() != 4 {
        return Err(TimecodeError::new(format!(
            "Invalid timecode format: '{}'",
            tc
        )));
    }

    let mut fields = [0i64; 4];
    for (field, part) in fields.iter_mut().zip(&parts) {
        if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimecodeError::new(format!(
                "Invalid timecode field '{}' in '{}'",
                part, tc
            )));
        }
        *field = part
            .bytes()
            .fold(0, |acc, b| acc * 10 + i64::from(b - b'0'));
    }
    Ok(fields)
}

/// Convert a timecode to an absolute frame count.
///
/// Drop-frame counting only applies when `drop_frame` is set and the rate is
/// 29.97 or 59.94: the count runs on the nominal rate (30 or 60) and skips 2
/// (or 4) frame numbers every minute except each tenth minute. Every other
/// combination multiplies by the real rate and rounds half to even.
pub fn try_timecode_to_frames(
    tc: &str,
    rate: FrameRate,
    drop_frame: bool,
) -> Result<i64, TimecodeError> {
    let [h, m, s, f] = split_timecode(tc)?;

    if drop_frame && rate.supports_drop_frame() {
        let nominal = rate.nominal_fps() as i64;
        let dropped = rate.dropped_frames_per_minute() as i64;
        let total_minutes = h * 60 + m;
        let frames = nominal * 3600 * h + nominal * 60 * m + nominal * s + f
            - dropped * (total_minutes - total_minutes.div_euclid(10));
        return Ok(frames);
    }

    let fps = rate.as_f64();
    let frames = (h * 3600) as f64 * fps + (m * 60) as f64 * fps + s as f64 * fps + f as f64;
    Ok(frames.round_ties_even() as i64)
}

/// Lenient conversion: a malformed timecode logs a warning and counts as frame 0.
pub fn timecode_to_frames(tc: &str, rate: FrameRate, drop_frame: bool) -> i64 {
    match try_timecode_to_frames(tc, rate, drop_frame) {
        Ok(frames) => frames,
        Err(e) => {
            warn!("{} - using 0 frames", e);
            0
        }
    }
}

/// Frames from in to out, optionally minus the last frame, never below zero.
///
/// Reversed or garbage in/out pairs clamp to 0 instead of failing.
pub fn frames_between(frames_in: i64, frames_out: i64, exclude_last: bool) -> u64 {
    let mut duration = frames_out - frames_in;
    if exclude_last {
        duration -= 1;
    }
    duration.max(0) as u64
}

/// Duration in frames between two timecodes at the given rate
pub fn calculate_duration_frames(
    tc_in: &str,
    tc_out: &str,
    rate: FrameRate,
    drop_frame: bool,
    exclude_last: bool,
) -> u64 {
    let frames_out = timecode_to_frames(tc_out, rate, drop_frame);
    let frames_in = timecode_to_frames(tc_in, rate, drop_frame);
    frames_between(frames_in, frames_out, exclude_last)
}
