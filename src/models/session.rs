use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Area field of a session: the slug of a clinical track, or a neutral
/// placeholder for plenary events (opening, breaks, lunch, dinner,
/// closing) that belong to no track.
pub const PLENARY_AREA: &str = "plenaria";

/// One agenda session as written to `agenda.json`.
///
/// `speakers` is always empty at generation time; session/speaker
/// association happens downstream. `moderator` and `description` are
/// omitted from the JSON entirely when absent, never emitted as "".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub time: String,
    pub end: String,
    pub area: String,
    pub room: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub speakers: Vec<String>,
}

impl Session {
    pub fn new(time: &str, end: &str, area: &str, room: &str, title: &str) -> Self {
        Session {
            time: time.to_string(),
            end: end.to_string(),
            area: area.to_string(),
            room: room.to_string(),
            title: title.to_string(),
            moderator: None,
            description: None,
            speakers: Vec::new(),
        }
    }

    pub fn with_moderator(mut self, moderator: Option<String>) -> Self {
        self.moderator = moderator.filter(|m| !m.is_empty());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// One of the two agenda day records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaDay {
    pub day: u32,
    pub date: NaiveDate,
    pub sessions: Vec<Session>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let session = Session::new("10:15", "10:45", PLENARY_AREA, "Foyer", "Coffee break");
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.get("moderator").is_none());
        assert!(json.get("description").is_none());
        assert_eq!(json["speakers"], serde_json::json!([]));
    }

    #[test]
    fn test_blank_moderator_treated_as_absent() {
        let session = Session::new("09:00", "10:15", "mama", "Sala A", "Caso 1 — Mama")
            .with_moderator(Some(String::new()));
        assert_eq!(session.moderator, None);

        let session = session.with_moderator(Some("Dra. Ana Pérez".to_string()));
        assert_eq!(session.moderator.as_deref(), Some("Dra. Ana Pérez"));
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let day = AgendaDay {
            day: 1,
            date: NaiveDate::from_ymd_opt(2026, 3, 13).unwrap(),
            sessions: vec![],
        };
        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["date"], "2026-03-13");
    }
}
