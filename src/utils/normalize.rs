//! Name cleanup utilities for speaker deduplication.
//!
//! The program spreadsheet repeats the same person across columns, rows
//! and areas with small spacing differences. Cleanup keeps the display
//! form readable while the dedup key collapses the variants that matter.
//! Accents are preserved on purpose: "Pérez" and "Perez" are treated as
//! different people because the source sheet spells each name one way.

/// Clean a raw name cell fragment for display.
///
/// Trims and collapses doubled spaces left behind by the spreadsheet's
/// hand-typed name lists.
///
/// # Examples
///
/// ```
/// use programa::utils::clean_name;
///
/// assert_eq!(clean_name("  Dra. Ana  Pérez "), "Dra. Ana Pérez");
/// assert_eq!(clean_name("Dr. Gómez"), "Dr. Gómez");
/// ```
pub fn clean_name(raw: &str) -> String {
    raw.trim().replace("  ", " ")
}

/// Compute the deduplication key for a speaker name.
///
/// Lowercased with all spaces stripped, so "Ana Pérez" and "ana  pérez"
/// collide while distinct names stay apart.
///
/// # Examples
///
/// ```
/// use programa::utils::dedup_key;
///
/// assert_eq!(dedup_key("Dra. Ana Pérez"), "dra.anapérez");
/// assert_eq!(dedup_key("ANA PEREZ"), dedup_key("Ana Perez"));
/// ```
pub fn dedup_key(name: &str) -> String {
    name.to_lowercase().replace(' ', "")
}

/// Strip a trailing "(opcion N)" style annotation from a name.
///
/// Some cells mark alternates like "Dra. Gómez (opcion 2)"; the
/// annotation is not part of the name. Returns the name truncated at the
/// first `(` when the marker is present, unchanged otherwise.
pub fn strip_option_marker(name: &str) -> String {
    if name.to_lowercase().contains("(opcion") {
        match name.split_once('(') {
            Some((before, _)) => before.trim().to_string(),
            None => name.to_string(),
        }
    } else {
        name.to_string()
    }
}
