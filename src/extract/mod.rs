pub mod agenda;
pub mod grid;
pub mod speakers;

pub use agenda::build_agenda;
pub use grid::{load_grid, Grid};
pub use speakers::{extract_speakers, ExtractConfig, ScanResult};

use crate::models::{AgendaDay, Speaker};

/// Run the full extraction over an already-loaded grid.
///
/// Returns the speaker list and the two-day agenda, both in their final
/// serialization order.
pub fn run_pipeline(grid: &Grid, config: &ExtractConfig) -> (Vec<Speaker>, Vec<AgendaDay>) {
    let scan = extract_speakers(grid, config);
    let agenda = build_agenda(&scan.case_types, &scan.moderators);
    (scan.speakers, agenda)
}
