//! # Inflection
//!
//! Case forms used in a date phrase: the weekday in the nominative, the month
//! in the genitive ("3 kwietnia") and the day number as a genitive ordinal.
//!
//! Genitive month forms come straight from the lexicon table. Polish month
//! names do not follow a small set of suffix rules ("lipiec" -> "lipca",
//! "kwiecień" -> "kwietnia", "maj" -> "maja", "listopad" -> "listopada").

use crate::date::DayKey;
use crate::errors::KalendarzResult;
use crate::lexicon;
use crate::numerals;

/// Genitive form of a month name, e.g. 6 -> "lipca".
///
/// # Errors
///
/// `LookupFailed` if `month_index` is outside 0..=11.
pub fn genitive_month(month_index: u32) -> KalendarzResult<&'static str> {
    Ok(lexicon::month(month_index)?.genitive_pl)
}

/// Dictionary (nominative) form of a month name, e.g. 6 -> "lipiec".
pub fn nominative_month(month_index: u32) -> KalendarzResult<&'static str> {
    Ok(lexicon::month(month_index)?.nominative_pl)
}

/// Genitive ordinal for a day of the month, e.g. 4 -> "czwartego".
pub fn ordinal_day_lookup(day: u32) -> KalendarzResult<String> {
    numerals::day_to_words(day)
}

/// Nominative weekday name, e.g. Wednesday -> "środa".
pub fn day_name(day: DayKey) -> &'static str {
    lexicon::day(day).nominative_pl
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genitive_months() {
        let expected = [
            "stycznia",
            "lutego",
            "marca",
            "kwietnia",
            "maja",
            "czerwca",
            "lipca",
            "sierpnia",
            "września",
            "października",
            "listopada",
            "grudnia",
        ];
        for (index, genitive) in expected.iter().enumerate() {
            assert_eq!(genitive_month(index as u32).unwrap(), *genitive);
        }
    }

    #[test]
    fn test_genitive_differs_from_nominative() {
        for index in 0..12 {
            let genitive = genitive_month(index).unwrap();
            let nominative = nominative_month(index).unwrap();
            assert!(!genitive.is_empty());
            assert_ne!(genitive, nominative);
        }
    }

    #[test]
    fn test_suffix_rules_would_misrender_most_months() {
        let suffix_rules = |nominative: &str| -> String {
            if let Some(stem) = nominative.strip_suffix('ń') {
                format!("{}nia", stem)
            } else if let Some(stem) = nominative.strip_suffix("ec") {
                format!("{}ca", stem)
            } else if let Some(stem) = nominative.strip_suffix('y') {
                format!("{}ego", stem)
            } else {
                nominative.to_string()
            }
        };
        let misrendered = (0..12)
            .filter(|&i| suffix_rules(nominative_month(i).unwrap()) != genitive_month(i).unwrap())
            .count();
        assert!(misrendered >= 6, "only {} months differ", misrendered);
        assert_eq!(suffix_rules("lipiec"), "lipica");
        assert_eq!(genitive_month(6).unwrap(), "lipca");
    }

    #[test]
    fn test_invalid_month_index() {
        assert!(genitive_month(12).unwrap_err().is_lookup_error());
        assert!(nominative_month(99).unwrap_err().is_lookup_error());
    }

    #[test]
    fn test_ordinal_day_lookup_delegates() {
        assert_eq!(ordinal_day_lookup(1).unwrap(), "pierwszego");
        assert!(ordinal_day_lookup(32).unwrap_err().is_range_error());
    }

    #[test]
    fn test_day_names() {
        assert_eq!(day_name(DayKey::Sunday), "niedziela");
        assert_eq!(day_name(DayKey::Friday), "piątek");
    }
}
