//! Weekday names, Sunday first.

use serde::Serialize;

use crate::date::DayKey;

/// One row of the weekday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayEntry {
    pub key: DayKey,
    pub nominative_pl: &'static str,
    pub english_name: &'static str,
    /// Grid header label in Polish
    pub abbreviation_pl: &'static str,
    /// Grid header label in English
    pub abbreviation_en: &'static str,
    pub derivation: &'static str,
}

/// All seven weekdays in `DayKey::index` order
pub static DAYS: [DayEntry; 7] = [
    DayEntry {
        key: DayKey::Sunday,
        nominative_pl: "niedziela",
        english_name: "Sunday",
        abbreviation_pl: "Nie",
        abbreviation_en: "Sun",
        derivation: "'Nie działać': the day of not working.",
    },
    DayEntry {
        key: DayKey::Monday,
        nominative_pl: "poniedziałek",
        english_name: "Monday",
        abbreviation_pl: "Pon",
        abbreviation_en: "Mon",
        derivation: "'Po niedzieli': the day after Sunday.",
    },
    DayEntry {
        key: DayKey::Tuesday,
        nominative_pl: "wtorek",
        english_name: "Tuesday",
        abbreviation_pl: "Wt",
        abbreviation_en: "Tue",
        derivation: "From 'wtóry' (second): the second day of the week.",
    },
    DayEntry {
        key: DayKey::Wednesday,
        nominative_pl: "środa",
        english_name: "Wednesday",
        abbreviation_pl: "Śr",
        abbreviation_en: "Wed",
        derivation: "From 'środek' (middle): the middle of the week.",
    },
    DayEntry {
        key: DayKey::Thursday,
        nominative_pl: "czwartek",
        english_name: "Thursday",
        abbreviation_pl: "Czw",
        abbreviation_en: "Thu",
        derivation: "From 'czwarty' (fourth).",
    },
    DayEntry {
        key: DayKey::Friday,
        nominative_pl: "piątek",
        english_name: "Friday",
        abbreviation_pl: "Pt",
        abbreviation_en: "Fri",
        derivation: "From 'piąty' (fifth).",
    },
    DayEntry {
        key: DayKey::Saturday,
        nominative_pl: "sobota",
        english_name: "Saturday",
        abbreviation_pl: "Sob",
        abbreviation_en: "Sat",
        derivation: "From the Hebrew 'shabbat' (Sabbath).",
    },
];
