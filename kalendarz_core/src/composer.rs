//! # Date Phrase Composer
//!
//! The boundary used by front-ends. Given a `CalendarDate` it produces the
//! Polish phrase, its pronunciation guide, a translated display string and
//! the holiday (if any) for that day. Front-ends hold no linguistic logic;
//! they render what comes back.
//!
//! ## Example
//!
//! ```rust
//! use kalendarz_core::composer::{compose_phrase, translated_display};
//! use kalendarz_core::date::{CalendarDate, Locale};
//!
//! let date = CalendarDate::new(2024, 3, 3).unwrap();
//! let phrase = compose_phrase(&date, false).unwrap();
//! assert_eq!(phrase.polish, "Środa, 3 kwietnia");
//! assert_eq!(phrase.phonetic, "SHRO-dah, 3 KVIET-nyah");
//! assert!(phrase.holiday.is_none());
//!
//! assert_eq!(translated_display(&date, Locale::En), "Wednesday, April 3, 2024");
//! assert_eq!(translated_display(&date, Locale::Pl), "środa, 3 kwietnia 2024");
//! ```

use serde::{Deserialize, Serialize};

use crate::date::{CalendarDate, Locale};
use crate::errors::KalendarzResult;
use crate::holidays::{self, Holiday};
use crate::inflection;
use crate::lexicon::{self, Season};
use crate::numerals;
use crate::phonetics;

/// Genitive of "rok", closing a spoken year
const YEAR_NOUN: &str = "roku";

/// How the day of the month is written in the Polish phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralStyle {
    /// "3 kwietnia"
    #[default]
    Digits,
    /// "trzeciego kwietnia"
    Words,
}

/// Language and verbosity selection for a composed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComposeOptions {
    /// Append the spelled-out year ("... dwa tysiące dwudziestego czwartego roku")
    pub include_year: bool,
    pub style: NumeralStyle,
    /// Language of the translated display string
    pub locale: Locale,
}

/// Polish phrase, its pronunciation and the day's holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePhrase {
    pub polish: String,
    pub phonetic: String,
    pub holiday: Option<Holiday>,
}

/// Everything a front-end shows for one selected date.
///
/// ## JSON Example
///
/// ```json
/// {
///   "date": { "year": 2024, "month": 10, "day": 11 },
///   "polish": "Poniedziałek, 11 listopada",
///   "phonetic": "poh-nyeh-DZIA-wek, 11 lee-stoh-PAH-dah",
///   "display": "Monday, November 11, 2024",
///   "holiday": { "key": "10-11", "name": "Narodowe Święto Niepodległości", "...": "..." },
///   "season": "autumn"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCard {
    pub date: CalendarDate,
    pub polish: String,
    pub phonetic: String,
    pub display: String,
    pub holiday: Option<Holiday>,
    pub season: Season,
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Compose with the default (digit) day style.
pub fn compose_phrase(date: &CalendarDate, include_year: bool) -> KalendarzResult<DatePhrase> {
    let options = ComposeOptions {
        include_year,
        ..ComposeOptions::default()
    };
    compose_phrase_with(date, &options)
}

pub fn compose_phrase_with(date: &CalendarDate, options: &ComposeOptions) -> KalendarzResult<DatePhrase> {
    let day_name = inflection::day_name(date.weekday());
    let month = inflection::genitive_month(date.month())?;

    let (day_pl, day_phonetic) = match options.style {
        NumeralStyle::Digits => (date.day().to_string(), date.day().to_string()),
        NumeralStyle::Words => {
            let words = inflection::ordinal_day_lookup(date.day())?;
            let phonetic = phonetics::transliterate(&words);
            (words, phonetic)
        }
    };

    let mut polish = format!("{}, {} {}", capitalize(day_name), day_pl, month);
    let mut phonetic = format!(
        "{}, {} {}",
        phonetics::transliterate(day_name),
        day_phonetic,
        phonetics::transliterate(month)
    );

    if options.include_year {
        let year = numerals::year_to_words(date.year())?;
        polish = format!("{} {} {}", polish, year, YEAR_NOUN);
        phonetic = format!(
            "{} {} {}",
            phonetic,
            phonetics::transliterate(&year),
            phonetics::transliterate(YEAR_NOUN)
        );
    }

    Ok(DatePhrase {
        polish,
        phonetic,
        holiday: holiday_for(date)?,
    })
}

/// The holiday on `date`, if any.
pub fn holiday_for(date: &CalendarDate) -> KalendarzResult<Option<Holiday>> {
    holidays::holiday_on(date)
}

/// Full date as a native speaker of `locale` would write it.
pub fn translated_display(date: &CalendarDate, locale: Locale) -> String {
    match locale {
        Locale::En => date.as_naive().format("%A, %B %-d, %Y").to_string(),
        Locale::Pl => {
            let month = &lexicon::MONTHS[date.month() as usize];
            format!(
                "{}, {} {} {}",
                lexicon::day(date.weekday()).nominative_pl,
                date.day(),
                month.genitive_pl,
                date.year()
            )
        }
    }
}

/// Month heading for a calendar grid ("April 2024" / "Kwiecień 2024").
pub fn month_title(year: i32, month: u32, locale: Locale) -> KalendarzResult<String> {
    let entry = lexicon::month(month)?;
    let name = match locale {
        Locale::En => entry.english_name.to_string(),
        Locale::Pl => capitalize(entry.nominative_pl),
    };
    Ok(format!("{} {}", name, year))
}

/// Grid header labels, Sunday first.
pub fn weekday_labels(locale: Locale) -> [&'static str; 7] {
    lexicon::DAYS.map(|d| match locale {
        Locale::En => d.abbreviation_en,
        Locale::Pl => d.abbreviation_pl,
    })
}

/// All four outputs for `date` plus its season.
pub fn compose_card(date: &CalendarDate, options: &ComposeOptions) -> KalendarzResult<DateCard> {
    let phrase = compose_phrase_with(date, options)?;
    Ok(DateCard {
        date: *date,
        polish: phrase.polish,
        phonetic: phrase.phonetic,
        display: translated_display(date, options.locale),
        holiday: phrase.holiday,
        season: lexicon::month(date.month())?.season,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::days_in_month;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_phrase_without_year() {
        let phrase = compose_phrase(&date(2024, 3, 3), false).unwrap();
        assert_eq!(phrase.polish, "Środa, 3 kwietnia");
        assert_eq!(phrase.phonetic, "SHRO-dah, 3 KVIET-nyah");
    }

    #[test]
    fn test_phrase_with_year() {
        let phrase = compose_phrase(&date(2024, 3, 3), true).unwrap();
        assert_eq!(phrase.polish, "Środa, 3 kwietnia dwa tysiące dwudziestego czwartego roku");
        assert_eq!(
            phrase.phonetic,
            "SHRO-dah, 3 KVIET-nyah dvah tih-SHON-tseh dvoo-jes-TE-go chvar-TE-go ROH-koo"
        );
    }

    #[test]
    fn test_phrase_in_words() {
        let options = ComposeOptions {
            style: NumeralStyle::Words,
            ..ComposeOptions::default()
        };
        let phrase = compose_phrase_with(&date(2024, 0, 1), &options).unwrap();
        assert_eq!(phrase.polish, "Poniedziałek, pierwszego stycznia");
        assert_eq!(phrase.phonetic, "poh-nyeh-DZIA-wek, pyer-FSHEH-goh STITCH-nyah");
    }

    #[test]
    fn test_phrase_round_year() {
        let phrase = compose_phrase(&date(2000, 0, 1), true).unwrap();
        assert_eq!(phrase.polish, "Sobota, 1 stycznia dwutysięcznego roku");
    }

    #[test]
    fn test_holiday_flag_matches_holiday_for() {
        for month in 0..12 {
            for day in 1..=days_in_month(2024, month).unwrap() {
                let d = date(2024, month, day);
                let phrase = compose_phrase(&d, false).unwrap();
                assert_eq!(phrase.holiday, holiday_for(&d).unwrap(), "{}", d);
            }
        }
    }

    #[test]
    fn test_holiday_on_independence_day() {
        let phrase = compose_phrase(&date(2024, 10, 11), false).unwrap();
        assert_eq!(phrase.polish, "Poniedziałek, 11 listopada");
        assert_eq!(phrase.holiday.unwrap().english_name, "Independence Day");
    }

    #[test]
    fn test_translated_display() {
        let d = date(2024, 10, 11);
        assert_eq!(translated_display(&d, Locale::En), "Monday, November 11, 2024");
        assert_eq!(translated_display(&d, Locale::Pl), "poniedziałek, 11 listopada 2024");
    }

    #[test]
    fn test_month_title_and_labels() {
        assert_eq!(month_title(2024, 3, Locale::En).unwrap(), "April 2024");
        assert_eq!(month_title(2024, 3, Locale::Pl).unwrap(), "Kwiecień 2024");
        assert!(month_title(2024, 12, Locale::En).unwrap_err().is_lookup_error());
        assert_eq!(weekday_labels(Locale::Pl)[0], "Nie");
        assert_eq!(weekday_labels(Locale::En)[6], "Sat");
    }

    #[test]
    fn test_compose_card() {
        let options = ComposeOptions {
            locale: Locale::Pl,
            ..ComposeOptions::default()
        };
        let card = compose_card(&date(2024, 11, 25), &options).unwrap();
        assert_eq!(card.polish, "Środa, 25 grudnia");
        assert_eq!(card.display, "środa, 25 grudnia 2024");
        assert_eq!(card.season, Season::Winter);
        assert_eq!(card.holiday.unwrap().name, "Boże Narodzenie");
    }

    #[test]
    fn test_card_serialization() {
        let card = compose_card(&date(2024, 3, 1), &ComposeOptions::default()).unwrap();
        let json = serde_json::to_string_pretty(&card).unwrap();
        let roundtrip: DateCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, roundtrip);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("środa"), "Środa");
        assert_eq!(capitalize(""), "");
    }
}
