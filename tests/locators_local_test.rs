use edlparser::sources::extract_local_locators;
use edlparser::{
    extract_locators, extract_locators_csv, ColorFilter, ExtractOptions, FrameRate, LocatorColor,
};
use std::io::Write;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/locators.edl");

const EXPECTED_CSV: &str = "\
Event,Shot ID,Tapename,Clipname,Src_In,Src_Out,Duration (Frames),Rec_In,Rec_Out,*LOC TC,*LOC Color,*LOC Description
001,ABC_123_4567,A001C003,A001C003_220101_R1AB.mov,01:00:00:00,01:00:04:00,99,10:00:00:00,10:00:04:00,10:00:01:12,RED,ABC_123_4567 fix boom in frame
003,CS0815,B001C001,XYZ_0042 plate,03:00:10:00,03:00:12:00,49,10:00:06:12,10:00:08:12,10:00:07:00,BLUE,\"CS0815 grade check, warmer\"
003,,B001C001,XYZ_0042 plate,03:00:10:00,03:00:12:00,49,10:00:06:12,10:00:08:12,10:00:08:00,Red,\"\"\"quoted\"\" note\"
";

#[test]
fn test_extract_local_locators() {
    let report = extract_local_locators(FIXTURE, &ExtractOptions::new(FrameRate::Fps25));

    assert!(report.is_ok(), "Failed to parse EDL: {:?}", report.err());
    let report = report.unwrap();

    assert_eq!(report.stats.lines, 14);
    assert_eq!(report.stats.events, 3);
    assert_eq!(report.stats.clip_name_lines, 3);
    assert_eq!(report.stats.locator_lines, 3);
    assert!(report.warnings.is_empty());
    assert_eq!(report.to_csv(), EXPECTED_CSV);

    let first = &report.table.rows[0];
    assert_eq!(first.record_frames, Some(900037));
}

#[test]
fn test_all_events_mode() {
    let options = ExtractOptions::default().with_locators_only(false);
    let report = extract_local_locators(FIXTURE, &options).unwrap();

    let events: Vec<&str> = report.table.rows.iter().map(|r| r.event.as_str()).collect();
    assert_eq!(events, vec!["001", "002", "003", "003"]);

    let placeholder = &report.table.rows[1];
    assert!(placeholder.is_placeholder);
    assert_eq!(placeholder.shot_id, "");
    assert_eq!(placeholder.clipname, "A002C010_220101_R1AB.mov");
    assert_eq!(placeholder.duration_frames, 61);
    assert_eq!(placeholder.locator_description, "No LOCATOR found");
    assert_eq!(report.stats.placeholder_rows, 1);
}

#[test]
fn test_color_filters() {
    let red = ExtractOptions::default().with_color_filter(ColorFilter::Only(LocatorColor::Red));
    let report = extract_local_locators(FIXTURE, &red).unwrap();
    assert_eq!(report.table.len(), 2);
    assert_eq!(report.stats.filtered_locators, 1);

    let blue = ExtractOptions::default().with_color_filter(ColorFilter::Only(LocatorColor::Blue));
    let report = extract_local_locators(FIXTURE, &blue).unwrap();
    assert_eq!(report.table.len(), 1);
    assert_eq!(report.table.rows[0].shot_id, "CS0815");

    let green =
        ExtractOptions::default().with_color_filter(ColorFilter::Only(LocatorColor::Green));
    let report = extract_local_locators(FIXTURE, &green).unwrap();
    assert!(report.is_empty());
    assert_eq!(
        report.empty_message(),
        Some("No *LOC entries found in the EDL or they were filtered out by the color selection.")
    );
}

#[test]
fn test_without_optional_columns() {
    let options = ExtractOptions::default()
        .with_tapename(false)
        .with_clipname(false);
    let report = extract_local_locators(FIXTURE, &options).unwrap();
    let csv = report.to_csv();
    let header = csv.lines().next().unwrap();

    assert_eq!(
        header,
        "Event,Shot ID,Src_In,Src_Out,Duration (Frames),Rec_In,Rec_Out,*LOC TC,*LOC Color,*LOC Description"
    );
    assert!(!csv.contains("A001C003"));
}

#[test]
fn test_crlf_and_invalid_bytes() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"\xEF\xBB\xBFTITLE: CRLF\r\n").unwrap();
    file.write_all(b"010  TAPE\xFF V C 00:00:00:00 00:00:00:10 00:00:00:00 00:00:00:10\r\n")
        .unwrap();
    file.write_all(b"*LOC: 00:00:00:05 GREEN caf\xE9 note\r").unwrap();
    file.write_all(b"*LOC: 00:00:00:06 GREEN second\r\n").unwrap();

    let report = extract_local_locators(file.path(), &ExtractOptions::default()).unwrap();
    assert_eq!(report.stats.lines, 4);
    assert_eq!(report.table.len(), 2);
    assert_eq!(report.table.rows[0].tapename, "TAPE\u{FFFD}");
    assert_eq!(report.table.rows[0].locator_description, "caf\u{FFFD} note");
    assert_eq!(report.table.rows[1].locator_description, "second");
    assert_eq!(report.table.rows[1].duration_frames, 9);
}

#[tokio::test]
async fn test_extract_locators_from_path() {
    let options = ExtractOptions::default();
    let report = extract_locators(FIXTURE.to_string(), &options).await.unwrap();
    assert_eq!(report.table.len(), 3);

    let csv = extract_locators_csv(FIXTURE.to_string(), &options).await.unwrap();
    assert_eq!(csv, EXPECTED_CSV);
}

#[tokio::test]
async fn test_extract_locators_missing_path() {
    let result = extract_locators(
        "/nonexistent/dir/cut.edl".to_string(),
        &ExtractOptions::default(),
    )
    .await;
    assert!(result.is_err());
}
