pub mod extract;
pub mod models;
pub mod utils;

// Re-export commonly used items (avoiding ambiguous re-exports)
pub use extract::{build_agenda, extract_speakers, load_grid, run_pipeline, ExtractConfig, Grid, ScanResult};
pub use models::{AgendaDay, Area, Session, Speaker, PLENARY_AREA};
pub use utils::{clean_name, dedup_key, strip_option_marker};
