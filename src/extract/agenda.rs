use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{AgendaDay, Area, Session, PLENARY_AREA};

/// The two convention dates.
const DAY1_DATE: (i32, u32, u32) = (2026, 3, 13);
const DAY2_DATE: (i32, u32, u32) = (2026, 3, 14);

/// Paired tracks per concurrent slot: morning pair runs Mama/Neuro,
/// afternoon pair Pulmón/Próstata, each day.
const MORNING_PAIR: [(Area, &str); 2] = [(Area::Mama, "Sala A"), (Area::Neuro, "Sala B")];
const AFTERNOON_PAIR: [(Area, &str); 2] = [(Area::Pulmon, "Sala A"), (Area::Prostata, "Sala B")];

/// Placeholder shown when a case was pulled from the program.
const REMOVED_MARKER: &str = "SE ELIMINA";
const REMOVED_PLACEHOLDER: &str = "Por confirmar";

/// Synthesize the title for one case session.
///
/// `"Caso {N} — {label}: {description}"`, with the removed-case marker
/// replaced by a placeholder and the colon clause dropped when no
/// description exists for the slot.
fn case_title(area: Area, num: usize, cases: Option<&Vec<String>>) -> String {
    let desc = cases
        .and_then(|c| c.get(num - 1))
        .map(String::as_str)
        .unwrap_or("");
    let desc = if desc == REMOVED_MARKER {
        REMOVED_PLACEHOLDER
    } else {
        desc
    };
    if desc.is_empty() {
        format!("Caso {} — {}", num, area.label())
    } else {
        format!("Caso {} — {}: {}", num, area.label(), desc)
    }
}

/// The two concurrent case sessions for one time slot.
fn case_pair(
    time: &str,
    end: &str,
    pair: &[(Area, &str); 2],
    num: usize,
    case_types: &BTreeMap<Area, Vec<String>>,
    moderators: &BTreeMap<Area, String>,
) -> Vec<Session> {
    pair.iter()
        .map(|&(area, room)| {
            Session::new(time, end, area.slug(), room, &case_title(area, num, case_types.get(&area)))
                .with_moderator(moderators.get(&area).cloned())
        })
        .collect()
}

fn coffee_break(time: &str, end: &str) -> Session {
    Session::new(time, end, PLENARY_AREA, "Foyer", "Coffee break")
}

fn lunch() -> Session {
    Session::new("12:00", "13:30", PLENARY_AREA, "Restaurante", "Almuerzo")
}

/// Build the fixed two-day agenda from the extracted per-area tables.
///
/// The slot skeleton is a template, not derived from the spreadsheet:
/// only titles and moderators vary with the input.
pub fn build_agenda(
    case_types: &BTreeMap<Area, Vec<String>>,
    moderators: &BTreeMap<Area, String>,
) -> Vec<AgendaDay> {
    let mut day1 = Vec::new();
    day1.push(
        Session::new("08:30", "09:00", PLENARY_AREA, "Salón Principal", "Apertura y bienvenida")
            .with_description("Palabras de bienvenida y presentación del formato."),
    );
    day1.extend(case_pair("09:00", "10:15", &MORNING_PAIR, 1, case_types, moderators));
    day1.push(coffee_break("10:15", "10:45"));
    day1.extend(case_pair("10:45", "12:00", &AFTERNOON_PAIR, 1, case_types, moderators));
    day1.push(lunch());
    day1.extend(case_pair("13:30", "14:45", &MORNING_PAIR, 2, case_types, moderators));
    day1.push(coffee_break("14:45", "15:15"));
    day1.extend(case_pair("15:15", "16:30", &AFTERNOON_PAIR, 2, case_types, moderators));
    day1.push(
        Session::new("20:00", "23:00", PLENARY_AREA, "Por confirmar", "Cena de la Convención")
            .with_description("Cena formal de networking para todos los asistentes."),
    );

    let mut day2 = Vec::new();
    day2.extend(case_pair("09:00", "10:15", &MORNING_PAIR, 3, case_types, moderators));
    day2.push(coffee_break("10:15", "10:45"));
    day2.extend(case_pair("10:45", "12:00", &AFTERNOON_PAIR, 3, case_types, moderators));
    day2.push(lunch());
    day2.extend(case_pair("13:30", "14:45", &MORNING_PAIR, 4, case_types, moderators));
    day2.push(coffee_break("14:45", "15:15"));
    day2.extend(case_pair("15:15", "16:30", &AFTERNOON_PAIR, 4, case_types, moderators));
    day2.push(
        Session::new("16:30", "17:00", PLENARY_AREA, "Salón Principal", "Cierre y conclusiones")
            .with_description("Síntesis de las discusiones y próximos pasos."),
    );

    let (y1, m1, d1) = DAY1_DATE;
    let (y2, m2, d2) = DAY2_DATE;
    vec![
        AgendaDay {
            day: 1,
            // Template dates are valid by construction
            date: NaiveDate::from_ymd_opt(y1, m1, d1).unwrap(),
            sessions: day1,
        },
        AgendaDay {
            day: 2,
            date: NaiveDate::from_ymd_opt(y2, m2, d2).unwrap(),
            sessions: day2,
        },
    ]
}
