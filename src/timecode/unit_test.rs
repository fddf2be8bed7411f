use crate::timecode::{
    calculate_duration_frames, frames_between, timecode_to_frames, try_timecode_to_frames,
    FrameRate,
};
use proptest::prelude::*;

#[test]
fn test_non_drop_conversion() {
    assert_eq!(timecode_to_frames("01:00:00:00", FrameRate::Fps25, false), 90000);
    assert_eq!(timecode_to_frames("00:01:00:00", FrameRate::Fps24, false), 1440);
    assert_eq!(timecode_to_frames("00:00:01:12", FrameRate::Fps24, false), 36);
    assert_eq!(timecode_to_frames("00:00:00:00", FrameRate::Fps60, false), 0);
    // real-rate multiplication, rounded
    assert_eq!(timecode_to_frames("01:00:00:00", FrameRate::Fps23_976, false), 86314);
    assert_eq!(timecode_to_frames("00:01:00:00", FrameRate::Fps29_97, false), 1798);
    assert_eq!(timecode_to_frames("00:00:10:00", FrameRate::Fps29_97, false), 300);
}

#[test]
fn test_drop_frame_conversion_29_97() {
    assert_eq!(timecode_to_frames("00:01:00:00", FrameRate::Fps29_97, true), 1798);
    assert_eq!(timecode_to_frames("00:00:59:29", FrameRate::Fps29_97, true), 1799);
    assert_eq!(timecode_to_frames("00:01:00:02", FrameRate::Fps29_97, true), 1800);
    assert_eq!(timecode_to_frames("00:10:00:00", FrameRate::Fps29_97, true), 17982);
    assert_eq!(timecode_to_frames("01:00:00:00", FrameRate::Fps29_97, true), 107892);
}

#[test]
fn test_drop_frame_conversion_59_94() {
    assert_eq!(timecode_to_frames("00:01:00:00", FrameRate::Fps59_94, true), 3596);
    assert_eq!(timecode_to_frames("00:10:00:00", FrameRate::Fps59_94, true), 35964);
}

#[test]
fn test_drop_flag_ignored_for_integer_rates() {
    assert_eq!(
        timecode_to_frames("00:01:00:00", FrameRate::Fps24, true),
        timecode_to_frames("00:01:00:00", FrameRate::Fps24, false)
    );
    assert_eq!(timecode_to_frames("00:01:00:00", FrameRate::Fps30, true), 1800);
}

#[test]
fn test_malformed_timecode() {
    assert!(try_timecode_to_frames("00:00:00", FrameRate::Fps25, false).is_err());
    assert!(try_timecode_to_frames("aa:00:00:00", FrameRate::Fps25, false).is_err());
    assert!(try_timecode_to_frames("", FrameRate::Fps25, false).is_err());
    assert!(try_timecode_to_frames("00:00:00:00:00", FrameRate::Fps25, false).is_err());

    // fields are one or two ASCII digits
    assert!(try_timecode_to_frames("9999999999999999:00:00:00", FrameRate::Fps25, false).is_err());
    assert!(try_timecode_to_frames("00:00:00:9999999999999999", FrameRate::Fps29_97, true).is_err());
    assert!(try_timecode_to_frames("100:00:00:00", FrameRate::Fps25, false).is_err());
    assert!(try_timecode_to_frames("+1:00:00:00", FrameRate::Fps25, false).is_err());
    assert!(try_timecode_to_frames("-1:00:00:00", FrameRate::Fps25, false).is_err());
    assert!(try_timecode_to_frames("00::00:00", FrameRate::Fps25, false).is_err());
    assert!(try_timecode_to_frames("٠١:00:00:00", FrameRate::Fps25, false).is_err());
    assert_eq!(try_timecode_to_frames("1:2:3:4", FrameRate::Fps25, false), Ok(93079));

    assert_eq!(timecode_to_frames("garbage", FrameRate::Fps25, false), 0);
    assert_eq!(timecode_to_frames("", FrameRate::Fps29_97, true), 0);
}

#[test]
fn test_duration_frames() {
    assert_eq!(
        calculate_duration_frames("00:00:00:00", "00:01:00:00", FrameRate::Fps24, false, true),
        1439
    );
    assert_eq!(
        calculate_duration_frames("00:00:00:00", "00:01:00:00", FrameRate::Fps24, false, false),
        1440
    );
    assert_eq!(
        calculate_duration_frames("01:00:00:00", "01:00:04:00", FrameRate::Fps25, false, false),
        100
    );
}

#[test]
fn test_duration_clamps_to_zero() {
    // reversed pair
    assert_eq!(
        calculate_duration_frames("00:01:00:00", "00:00:00:00", FrameRate::Fps24, false, false),
        0
    );
    // identical in/out with last frame excluded would be -1
    assert_eq!(
        calculate_duration_frames("00:00:10:00", "00:00:10:00", FrameRate::Fps25, false, true),
        0
    );
    // malformed timecodes count as frame 0
    assert_eq!(
        calculate_duration_frames("", "", FrameRate::Fps25, false, true),
        0
    );
}

#[test]
fn test_frame_rate_parsing() {
    assert_eq!("29.97".parse::<FrameRate>().unwrap(), FrameRate::Fps29_97);
    assert_eq!("23.98 fps".parse::<FrameRate>().unwrap(), FrameRate::Fps23_976);
    assert_eq!("23.976".parse::<FrameRate>().unwrap(), FrameRate::Fps23_976);
    assert_eq!(" 60 FPS ".parse::<FrameRate>().unwrap(), FrameRate::Fps60);
    assert_eq!("24".parse::<FrameRate>().unwrap(), FrameRate::Fps24);
    assert!("50".parse::<FrameRate>().is_err());
    assert!("fast".parse::<FrameRate>().is_err());
    assert_eq!(FrameRate::default(), FrameRate::Fps25);

    for rate in FrameRate::ALL {
        assert_eq!(rate.label().parse::<FrameRate>().unwrap(), rate);
    }
}

#[test]
fn test_drop_frame_applicability() {
    let drop_rates: Vec<FrameRate> = FrameRate::ALL
        .iter()
        .copied()
        .filter(|r| r.supports_drop_frame())
        .collect();
    assert_eq!(drop_rates, vec![FrameRate::Fps29_97, FrameRate::Fps59_94]);
}

proptest! {
    #[test]
    fn prop_exclude_last_is_one_less(frames_in in 0i64..500_000, frames_out in 0i64..500_000) {
        let full = frames_between(frames_in, frames_out, false);
        let trimmed = frames_between(frames_in, frames_out, true);
        prop_assert_eq!(trimmed, full.saturating_sub(1));
        if frames_out > frames_in {
            prop_assert_eq!(trimmed, (frames_out - frames_in - 1) as u64);
        } else {
            prop_assert_eq!(trimmed, 0);
        }
    }

    #[test]
    fn prop_drop_frame_never_exceeds_nominal_count(h in 0i64..24, m in 0i64..60, s in 0i64..60, f in 0i64..30) {
        let tc = format!("{:02}:{:02}:{:02}:{:02}", h, m, s, f);
        let dropped = timecode_to_frames(&tc, FrameRate::Fps29_97, true);
        let nominal = timecode_to_frames(&tc, FrameRate::Fps30, false);
        prop_assert!(dropped <= nominal);
        prop_assert_eq!(nominal - dropped, 2 * (h * 60 + m - (h * 60 + m) / 10));
    }
}
