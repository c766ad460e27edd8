use serde::{Deserialize, Serialize};

use super::Area;

/// One extracted speaker record as written to `speakers.json`.
///
/// `photo` and `bio` are always empty here; a separate enrichment step
/// fills them in downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub institution: String,
    pub area: Area,
    pub photo: String,
    pub bio: String,
}

impl Speaker {
    /// Format the stable sequential identifier (1-based, zero-padded).
    pub fn make_id(seq: u32) -> String {
        format!("speaker-{seq:03}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_format() {
        assert_eq!(Speaker::make_id(1), "speaker-001");
        assert_eq!(Speaker::make_id(42), "speaker-042");
        assert_eq!(Speaker::make_id(117), "speaker-117");
    }

    #[test]
    fn test_serialized_field_order() {
        let speaker = Speaker {
            id: Speaker::make_id(1),
            name: "Dra. Ana Pérez".to_string(),
            specialty: "Radioterapia".to_string(),
            institution: String::new(),
            area: Area::Mama,
            photo: String::new(),
            bio: String::new(),
        };
        let json = serde_json::to_value(&speaker).unwrap();
        assert_eq!(json["id"], "speaker-001");
        assert_eq!(json["area"], "mama");
        assert_eq!(json["photo"], "");
        assert_eq!(json["bio"], "");
    }
}
