use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use programa::{run_pipeline, ExtractConfig};

#[derive(Parser, Debug)]
#[command(name = "extract_programa")]
#[command(about = "Extract the speaker list and two-day agenda from the program workbook")]
struct Args {
    /// Path to the program workbook (.xlsx)
    #[arg(short, long)]
    input: PathBuf,

    /// Worksheet holding the program grid
    #[arg(long, default_value = "Sheet1")]
    sheet: String,

    /// Directory receiving speakers.json and agenda.json
    #[arg(short, long, default_value = "data")]
    out_dir: PathBuf,

    /// Dry run - report what would be extracted without writing files
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let grid = programa::load_grid(&args.input, &args.sheet)?;
    let (speakers, agenda) = run_pipeline(&grid, &ExtractConfig::default());

    if args.dry_run {
        for speaker in &speakers {
            info!(
                "  - {} [{}] {} ({})",
                speaker.id,
                speaker.area.slug(),
                speaker.name,
                if speaker.specialty.is_empty() { "?" } else { speaker.specialty.as_str() }
            );
        }
        info!("Dry run: {} speakers, {} days, nothing written", speakers.len(), agenda.len());
        return Ok(());
    }

    // Serialize both documents before writing either, so an error leaves
    // no partial output behind.
    let speakers_json =
        serde_json::to_string_pretty(&speakers).context("Failed to serialize speakers")?;
    let agenda_json =
        serde_json::to_string_pretty(&agenda).context("Failed to serialize agenda")?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create output directory: {}", args.out_dir.display()))?;

    let speakers_path = args.out_dir.join("speakers.json");
    fs::write(&speakers_path, speakers_json)
        .with_context(|| format!("Failed to write {}", speakers_path.display()))?;
    info!("speakers.json: {} speakers", speakers.len());

    let agenda_path = args.out_dir.join("agenda.json");
    fs::write(&agenda_path, agenda_json)
        .with_context(|| format!("Failed to write {}", agenda_path.display()))?;
    let session_count: usize = agenda.iter().map(|d| d.sessions.len()).sum();
    info!("agenda.json: {} sessions across {} days", session_count, agenda.len());

    Ok(())
}
