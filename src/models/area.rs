use serde::{Deserialize, Serialize};

/// Clinical track partitioning speakers and sessions.
///
/// The program spreadsheet is organized as one block per area; every
/// extracted speaker and every case session belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Area {
    Mama,
    Neuro,
    Pulmon,
    Prostata,
}

/// Header spellings as they appear in the spreadsheet's area rows.
const AREA_HEADERS: &[(&str, Area)] = &[
    ("MAMA", Area::Mama),
    ("NEURO", Area::Neuro),
    ("PULMON", Area::Pulmon),
    ("PROSTATA", Area::Prostata),
];

impl Area {
    /// All areas in canonical program order.
    pub const ALL: [Area; 4] = [Area::Mama, Area::Neuro, Area::Pulmon, Area::Prostata];

    /// Match a header cell against the known area labels.
    ///
    /// # Examples
    /// ```
    /// use programa::models::Area;
    ///
    /// assert_eq!(Area::from_header("MAMA"), Some(Area::Mama));
    /// assert_eq!(Area::from_header("prostata"), Some(Area::Prostata)); // case insensitive
    /// assert_eq!(Area::from_header("Coffee break"), None);
    /// ```
    pub fn from_header(cell: &str) -> Option<Area> {
        let upper = cell.trim().to_uppercase();
        AREA_HEADERS
            .iter()
            .find(|(header, _)| *header == upper)
            .map(|(_, area)| *area)
    }

    /// Lowercase ASCII identifier used in the serialized documents.
    pub fn slug(&self) -> &'static str {
        match self {
            Area::Mama => "mama",
            Area::Neuro => "neuro",
            Area::Pulmon => "pulmon",
            Area::Prostata => "prostata",
        }
    }

    /// Human-facing display label used in session titles.
    pub fn label(&self) -> &'static str {
        match self {
            Area::Mama => "Mama",
            Area::Neuro => "Neuro",
            Area::Pulmon => "Pulmón",
            Area::Prostata => "Próstata",
        }
    }
}
