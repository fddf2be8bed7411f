use edlparser::{decode_edl_text, parse_edl, preview_edl, ColorFilter, ExtractOptions, FrameRate};
use std::env;

const PREVIEW_LINES: usize = 50;

fn main() {
    println!("🎬 EDL Locator Dump");
    println!("===================");

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: edl_locator_dump <file.edl> [fps] [color] [--all-events]");
        println!("Example: edl_locator_dump tests/testdata/locators.edl 25 Red");
        return;
    }

    match run(&args[1..]) {
        Ok(_) => println!("\n✅ Processing complete"),
        Err(e) => println!("\n❌ Processing failed: {}", e),
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let path = &args[0];
    let positional: Vec<&String> = args[1..].iter().filter(|a| !a.starts_with("--")).collect();
    let all_events = args.iter().any(|a| a == "--all-events");

    let frame_rate: FrameRate = match positional.first() {
        Some(fps) => fps.parse()?,
        None => FrameRate::default(),
    };
    let color_filter: ColorFilter = match positional.get(1) {
        Some(color) => color.parse()?,
        None => ColorFilter::All,
    };

    let options = ExtractOptions::new(frame_rate)
        .with_color_filter(color_filter)
        .with_locators_only(!all_events);

    let text = decode_edl_text(&std::fs::read(path)?);
    let preview = preview_edl(&text, PREVIEW_LINES);
    println!("📄 File: {}", path);
    println!(
        "📏 Lines: {} ({} locator lines in the first {})",
        preview.total_lines,
        preview.lines.iter().filter(|l| l.has_locator).count(),
        preview.lines.len()
    );
    println!(
        "⚙️  {} fps, drop-frame: {}, color: {}",
        options.frame_rate,
        options.effective_drop_frame(),
        options.color_filter
    );
    println!();

    let report = parse_edl(&text, &options)?;
    for warning in &report.warnings {
        println!("⚠️  line {}: {}", warning.line_number, warning.message);
    }

    match report.empty_message() {
        Some(message) => println!("⚠️  {}", message),
        None => print!("{}", report.to_csv()),
    }
    Ok(())
}
