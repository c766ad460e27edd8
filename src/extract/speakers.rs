use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use crate::models::{Area, Speaker};
use crate::utils::{clean_name, dedup_key, strip_option_marker};

use super::grid::{Grid, GRID_WIDTH};

/// Column holding the area header label on area rows.
const AREA_COL: usize = 1;
/// Column holding the moderator annotation (area rows) or the specialty
/// label (name rows and the rows above them).
const ANNOTATION_COL: usize = 2;
/// Discriminator column: "tipo" and "nombre" header rows are recognized
/// by this cell.
const KIND_COL: usize = 3;
/// First of the four columns carrying case descriptions / name lists.
const FIRST_DATA_COL: usize = 4;

/// Literal marker introducing a moderator annotation.
const MODERATOR_MARKER: &str = "Moderador";
/// Separator between the moderator and their support staff.
const SUPPORT_SEPARATOR: &str = " con apoyo de ";

/// Institution assigned to moderators appended after the scan; regular
/// speakers carry an empty institution at extraction time.
const MODERATOR_INSTITUTION: &str = "RT International Institute";

/// Tuning knobs for the name heuristics.
///
/// The noise list and minimum length are hand-tuned to one spreadsheet's
/// wording, so they live here as data rather than inside the scan logic.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Lowercased placeholder entries dropped from name cells.
    pub noise_names: Vec<String>,
    /// Minimum character count for a name to survive filtering.
    pub min_name_len: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            noise_names: [
                "n/a",
                "no corresponde",
                "invitado brainlab",
                "equipo diagnostico",
                "equipo diagnóstico",
                "",
                "se elimina",
                "imagenologa hb",
                "endoscopista hospital maciel",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            min_name_len: 3,
        }
    }
}

impl ExtractConfig {
    fn is_noise(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        let lowered = lowered.trim();
        self.noise_names.iter().any(|noise| noise == lowered)
    }
}

/// How a grid row participates in extraction, decided before branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    /// Area block header; may carry a moderator annotation.
    AreaHeader(Area),
    /// "Tipo" row listing the four case descriptions for the block.
    CaseTypeHeader,
    /// "Nombre" row listing speaker names across the case columns.
    NameHeader,
    /// Anything else: spacing, dates, free-form notes.
    Other,
}

fn classify_row(row: &[String]) -> RowKind {
    if let Some(area) = Area::from_header(&row[AREA_COL]) {
        return RowKind::AreaHeader(area);
    }
    match row[KIND_COL].trim().to_lowercase().as_str() {
        "tipo" => RowKind::CaseTypeHeader,
        "nombre" => RowKind::NameHeader,
        _ => RowKind::Other,
    }
}

/// Everything the single scan over the grid produces.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Speakers in discovery order, moderators appended last.
    pub speakers: Vec<Speaker>,
    /// One moderator per area, parsed from the area header annotation.
    pub moderators: BTreeMap<Area, String>,
    /// Up to four case descriptions per area, in slot order.
    pub case_types: BTreeMap<Area, Vec<String>>,
}

/// Mutable accumulator threaded through the scan; a fresh one per run.
struct ScanContext {
    current_area: Option<Area>,
    seen: HashSet<String>,
    next_id: u32,
    result: ScanResult,
}

impl ScanContext {
    fn new() -> Self {
        ScanContext {
            current_area: None,
            seen: HashSet::new(),
            next_id: 0,
            result: ScanResult::default(),
        }
    }

    /// Record a speaker unless the dedup key was already seen.
    fn push_speaker(&mut self, name: String, specialty: &str, institution: &str, area: Area) {
        let key = dedup_key(&name);
        if !self.seen.insert(key) {
            return;
        }
        self.next_id += 1;
        self.result.speakers.push(Speaker {
            id: Speaker::make_id(self.next_id),
            name,
            specialty: specialty.to_string(),
            institution: institution.to_string(),
            area,
            photo: String::new(),
            bio: String::new(),
        });
    }
}

/// Parse the moderator name out of an area header annotation.
///
/// The annotation looks like "(3) Moderador: Dra. Ana Pérez con apoyo de
/// Dr. Juan": the name is whatever follows the last `)`, with the
/// "Moderador:" label and the support clause removed.
fn parse_moderator(annotation: &str) -> Option<String> {
    if !annotation.contains(MODERATOR_MARKER) {
        return None;
    }
    let after_paren = annotation
        .rsplit(')')
        .next()
        .unwrap_or(annotation)
        .trim();
    let name = match after_paren.split_once(SUPPORT_SEPARATOR) {
        Some((before, _)) => before.trim(),
        None => after_paren,
    };
    let name = match name.strip_prefix(MODERATOR_MARKER) {
        Some(rest) => rest.trim_start_matches(':').trim(),
        None => name,
    };
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Resolve the specialty for a name row: the annotation cell on the row
/// itself, or the nearest non-blank annotation within the two rows above
/// it (the sheet only writes the label once per group of name rows).
fn resolve_specialty(grid: &Grid, row_idx: usize) -> String {
    let own = grid.cell(row_idx, ANNOTATION_COL);
    if !own.is_empty() {
        return own.to_string();
    }
    let start = if row_idx >= 3 { row_idx - 2 } else { 1 };
    for j in (start..row_idx).rev() {
        let above = grid.cell(j, ANNOTATION_COL);
        if !above.is_empty() {
            return above.to_string();
        }
    }
    String::new()
}

/// Single top-to-bottom scan extracting speakers, moderators and the
/// per-area case-type table from the normalized grid.
pub fn extract_speakers(grid: &Grid, config: &ExtractConfig) -> ScanResult {
    let mut ctx = ScanContext::new();

    for (i, row) in grid.rows().iter().enumerate() {
        match classify_row(row) {
            RowKind::AreaHeader(area) => {
                ctx.current_area = Some(area);
                if let Some(name) = parse_moderator(&row[ANNOTATION_COL]) {
                    debug!("Moderator for {}: {}", area.slug(), name);
                    ctx.result.moderators.insert(area, name);
                }
            }
            RowKind::CaseTypeHeader => {
                let Some(area) = ctx.current_area else {
                    warn!("Case-type row {} before any area header, skipping", i);
                    continue;
                };
                let cases: Vec<String> = (FIRST_DATA_COL..GRID_WIDTH)
                    .map(|col| grid.cell(i, col).to_string())
                    .collect();
                ctx.result.case_types.insert(area, cases);
            }
            RowKind::NameHeader => {
                let Some(area) = ctx.current_area else {
                    warn!("Name row {} before any area header, skipping", i);
                    continue;
                };
                let specialty = resolve_specialty(grid, i);
                for col in FIRST_DATA_COL..GRID_WIDTH {
                    let cell = grid.cell(i, col);
                    if cell.is_empty() {
                        continue;
                    }
                    for piece in cell.split('/') {
                        let name = clean_name(piece);
                        if config.is_noise(&name) || name.chars().count() < config.min_name_len {
                            continue;
                        }
                        let name = strip_option_marker(&name);
                        ctx.push_speaker(name, &specialty, "", area);
                    }
                }
            }
            RowKind::Other => {}
        }
    }

    // Moderators become speaker records too, unless already listed under
    // one of the name rows.
    let moderators: Vec<(Area, String)> = ctx
        .result
        .moderators
        .iter()
        .map(|(area, name)| (*area, name.clone()))
        .collect();
    for (area, name) in moderators {
        ctx.push_speaker(name, MODERATOR_MARKER, MODERATOR_INSTITUTION, area);
    }

    ctx.result
}
