//! Hand-tuned pronunciations.
//!
//! Keys are lower-case Polish words. Values mark the stressed syllable in
//! capitals, hyphen-separated.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Months in the genitive, as they appear in a date ("1 maja")
const MONTHS_GENITIVE: [(&str, &str); 12] = [
    ("stycznia", "STITCH-nyah"),
    ("lutego", "loo-TEH-goh"),
    ("marca", "MAR-tsah"),
    ("kwietnia", "KVIET-nyah"),
    ("maja", "MAH-yah"),
    ("czerwca", "CHERV-tsah"),
    ("lipca", "LEEP-tsah"),
    ("sierpnia", "SYERP-nyah"),
    ("września", "VZHESH-nyah"),
    ("października", "pazh-dzier-NEE-kah"),
    ("listopada", "lee-stoh-PAH-dah"),
    ("grudnia", "GROOD-nyah"),
];

const DAYS: [(&str, &str); 7] = [
    ("poniedziałek", "poh-nyeh-DZIA-wek"),
    ("wtorek", "VTO-rek"),
    ("środa", "SHRO-dah"),
    ("czwartek", "CHVAR-tek"),
    ("piątek", "PION-tek"),
    ("sobota", "soh-BO-tah"),
    ("niedziela", "nyeh-DZIE-lah"),
];

/// Words that glue a spoken year together
const YEAR_WORDS: [(&str, &str); 6] = [
    ("roku", "ROH-koo"),
    ("dwa", "dvah"),
    ("trzy", "tshih"),
    ("tysiąc", "TIH-shonts"),
    ("tysiące", "tih-SHON-tseh"),
    ("pierwszego", "pyer-FSHEH-goh"),
];

pub(crate) static OVERRIDES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    MONTHS_GENITIVE
        .iter()
        .chain(DAYS.iter())
        .chain(YEAR_WORDS.iter())
        .copied()
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{DAYS as DAY_TABLE, MONTHS};

    #[test]
    fn test_every_genitive_month_is_covered() {
        for month in MONTHS.iter() {
            assert!(OVERRIDES.contains_key(month.genitive_pl), "{}", month.genitive_pl);
        }
    }

    #[test]
    fn test_every_day_is_covered() {
        for day in DAY_TABLE.iter() {
            assert!(OVERRIDES.contains_key(day.nominative_pl), "{}", day.nominative_pl);
        }
    }

    #[test]
    fn test_keys_are_lowercase() {
        for key in OVERRIDES.keys() {
            assert_eq!(key.to_lowercase(), *key);
        }
        assert_eq!(OVERRIDES.get("marca"), Some(&"MAR-tsah"));
        assert_eq!(OVERRIDES.get("kot"), None);
    }

    #[test]
    fn test_no_duplicate_keys() {
        assert_eq!(OVERRIDES.len(), MONTHS_GENITIVE.len() + DAYS.len() + YEAR_WORDS.len());
    }
}
