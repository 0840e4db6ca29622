//! # Lexicon
//!
//! Static tables of month and weekday names plus the grammar guide. Pure
//! data: every other module reads from here and nothing writes to it.
//!
//! ## Example
//!
//! ```rust
//! use kalendarz_core::lexicon::{self, Season};
//! use kalendarz_core::date::DayKey;
//!
//! let april = lexicon::month(3).unwrap();
//! assert_eq!(april.nominative_pl, "kwiecień");
//! assert_eq!(april.genitive_pl, "kwietnia");
//! assert_eq!(april.season, Season::Spring);
//!
//! assert_eq!(lexicon::day(DayKey::Wednesday).nominative_pl, "środa");
//! ```

pub mod days;
pub mod guide;
pub mod months;

pub use days::{DayEntry, DAYS};
pub use guide::{GrammarGuide, GuideSection, GRAMMAR_GUIDE};
pub use months::{MonthEntry, Season, MONTHS};

use crate::date::DayKey;
use crate::errors::{KalendarzError, KalendarzResult};

/// Look up a month by 0-based index.
pub fn month(index: u32) -> KalendarzResult<&'static MonthEntry> {
    MONTHS
        .get(index as usize)
        .ok_or_else(|| KalendarzError::lookup_failed("months", index.to_string()))
}

/// Look up a weekday. Total: every `DayKey` has a row.
pub fn day(key: DayKey) -> &'static DayEntry {
    &DAYS[key.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_indices_contiguous() {
        for (i, entry) in MONTHS.iter().enumerate() {
            assert_eq!(entry.index as usize, i);
        }
    }

    #[test]
    fn test_day_keys_match_positions() {
        for key in DayKey::ALL {
            assert_eq!(day(key).key, key);
        }
    }

    #[test]
    fn test_month_lookup_out_of_range() {
        let err = month(12).unwrap_err();
        assert!(err.is_lookup_error());
    }

    #[test]
    fn test_seasons() {
        assert_eq!(month(11).unwrap().season, Season::Winter);
        assert_eq!(month(0).unwrap().season, Season::Winter);
        assert_eq!(month(6).unwrap().season, Season::Summer);
        assert_eq!(month(9).unwrap().season, Season::Autumn);
    }

    #[test]
    fn test_every_entry_has_text() {
        for entry in MONTHS.iter() {
            assert!(!entry.derivation.is_empty());
            assert!(!entry.english_name.is_empty());
        }
        for entry in DAYS.iter() {
            assert!(!entry.derivation.is_empty());
        }
        assert_eq!(GRAMMAR_GUIDE.sections.len(), 4);
    }

    #[test]
    fn test_month_serializes() {
        let json = serde_json::to_value(month(4).unwrap()).unwrap();
        assert_eq!(json["genitive_pl"], "maja");
        assert_eq!(json["season"], "spring");
    }
}
