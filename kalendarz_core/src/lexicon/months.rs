//! Month names
//!
//! Nominative and genitive Polish forms with English names, the season used
//! for theming and a short folk-etymology note for the culture screen.
//!
//! The genitive column is stored, never derived: the Polish month names fall
//! into too many suffix classes (-eń, -iec, -y, -ec, -j, consonant stems) for
//! a rewrite rule to be reliable.

use serde::{Deserialize, Serialize};

/// Meteorological season, used by front-ends for theming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub fn display_name(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
        }
    }

    /// Polish name of the season
    pub fn name_pl(&self) -> &'static str {
        match self {
            Season::Winter => "zima",
            Season::Spring => "wiosna",
            Season::Summer => "lato",
            Season::Autumn => "jesień",
        }
    }
}

/// One row of the month table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthEntry {
    /// 0-based month index
    pub index: u32,
    pub nominative_pl: &'static str,
    pub genitive_pl: &'static str,
    pub english_name: &'static str,
    pub season: Season,
    pub derivation: &'static str,
}

/// All twelve months, indexed 0 (January) through 11 (December)
pub static MONTHS: [MonthEntry; 12] = [
    MonthEntry {
        index: 0,
        nominative_pl: "styczeń",
        genitive_pl: "stycznia",
        english_name: "January",
        season: Season::Winter,
        derivation: "From 'tyka' (a pole): the month when timber was cut, or the 'meeting' (styk) of the old and new year.",
    },
    MonthEntry {
        index: 1,
        nominative_pl: "luty",
        genitive_pl: "lutego",
        english_name: "February",
        season: Season::Winter,
        derivation: "Old Polish 'luty' means fierce or bitter, after the harshest frosts of the year.",
    },
    MonthEntry {
        index: 2,
        nominative_pl: "marzec",
        genitive_pl: "marca",
        english_name: "March",
        season: Season::Spring,
        derivation: "Borrowed from Latin 'Martius', the month of Mars.",
    },
    MonthEntry {
        index: 3,
        nominative_pl: "kwiecień",
        genitive_pl: "kwietnia",
        english_name: "April",
        season: Season::Spring,
        derivation: "From 'kwiat' (flower): the month when everything starts to bloom.",
    },
    MonthEntry {
        index: 4,
        nominative_pl: "maj",
        genitive_pl: "maja",
        english_name: "May",
        season: Season::Spring,
        derivation: "Borrowed from Latin 'Maius', after the goddess Maia.",
    },
    MonthEntry {
        index: 5,
        nominative_pl: "czerwiec",
        genitive_pl: "czerwca",
        english_name: "June",
        season: Season::Summer,
        derivation: "From 'czerw' (larva): cochineal larvae gathered in June gave a red dye, hence also 'czerwony' (red).",
    },
    MonthEntry {
        index: 6,
        nominative_pl: "lipiec",
        genitive_pl: "lipca",
        english_name: "July",
        season: Season::Summer,
        derivation: "From 'lipa' (linden tree), which blossoms in July.",
    },
    MonthEntry {
        index: 7,
        nominative_pl: "sierpień",
        genitive_pl: "sierpnia",
        english_name: "August",
        season: Season::Summer,
        derivation: "From 'sierp' (sickle), the tool of the grain harvest.",
    },
    MonthEntry {
        index: 8,
        nominative_pl: "wrzesień",
        genitive_pl: "września",
        english_name: "September",
        season: Season::Autumn,
        derivation: "From 'wrzos' (heather), which colours the heaths in September.",
    },
    MonthEntry {
        index: 9,
        nominative_pl: "październik",
        genitive_pl: "października",
        english_name: "October",
        season: Season::Autumn,
        derivation: "From 'paździerze', the woody chaff left over when flax and hemp were processed in autumn.",
    },
    MonthEntry {
        index: 10,
        nominative_pl: "listopad",
        genitive_pl: "listopada",
        english_name: "November",
        season: Season::Autumn,
        derivation: "Literally 'leaf-fall': 'liście' (leaves) + 'padać' (to fall).",
    },
    MonthEntry {
        index: 11,
        nominative_pl: "grudzień",
        genitive_pl: "grudnia",
        english_name: "December",
        season: Season::Winter,
        derivation: "From 'gruda', the frozen clods of earth on winter roads.",
    },
];
