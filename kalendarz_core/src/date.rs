//! # Calendar Dates
//!
//! `CalendarDate` is the immutable value every other module derives its output
//! from. Months are 0-based (0 = January) to match the month-day holiday keys;
//! days are 1-based.
//!
//! ## Example
//!
//! ```rust
//! use kalendarz_core::date::{CalendarDate, DayKey};
//!
//! let date = CalendarDate::new(2024, 3, 3).unwrap(); // 3 April 2024
//! assert_eq!(date.weekday(), DayKey::Wednesday);
//! assert!(CalendarDate::new(2023, 1, 29).is_err()); // no 29 February in 2023
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::{KalendarzError, KalendarzResult};

/// Earliest year the date model accepts
pub const MIN_YEAR: i32 = 1900;

/// Latest year the date model accepts
pub const MAX_YEAR: i32 = 3000;

/// Proleptic Gregorian leap-year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a 0-based month.
///
/// Fails with a lookup error when `month` is outside 0..=11.
pub fn days_in_month(year: i32, month: u32) -> KalendarzResult<u32> {
    let days = match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 if is_leap_year(year) => 29,
        1 => 28,
        _ => return Err(KalendarzError::lookup_failed("months", month.to_string())),
    };
    Ok(days)
}

pub(crate) fn check_year(year: i32) -> KalendarzResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(KalendarzError::out_of_range(
            "year",
            year.to_string(),
            format!("Year must be between {} and {}", MIN_YEAR, MAX_YEAR),
        ));
    }
    Ok(())
}

/// A validated Gregorian date.
///
/// ## JSON Example
///
/// ```json
/// { "year": 2024, "month": 3, "day": 3 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "DateParts", into = "DateParts")]
pub struct CalendarDate {
    inner: NaiveDate,
}

/// Wire form of `CalendarDate`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct DateParts {
    year: i32,
    month: u32,
    day: u32,
}

impl TryFrom<DateParts> for CalendarDate {
    type Error = KalendarzError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        CalendarDate::new(parts.year, parts.month, parts.day)
    }
}

impl From<CalendarDate> for DateParts {
    fn from(date: CalendarDate) -> Self {
        DateParts {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl CalendarDate {
    /// Create a date from a year, a 0-based month and a 1-based day.
    ///
    /// # Errors
    ///
    /// * `LookupFailed` if `month` is outside 0..=11
    /// * `OutOfRange` if the year is outside 1900..=3000 or the day does not
    ///   exist in that month
    pub fn new(year: i32, month: u32, day: u32) -> KalendarzResult<Self> {
        check_year(year)?;
        let max_day = days_in_month(year, month)?;
        if day == 0 || day > max_day {
            return Err(KalendarzError::out_of_range(
                "day",
                day.to_string(),
                format!("Day must be between 1 and {} for month {} of {}", max_day, month, year),
            ));
        }
        let inner = NaiveDate::from_ymd_opt(year, month + 1, day).ok_or_else(|| {
            KalendarzError::out_of_range("day", day.to_string(), "Date is not representable")
        })?;
        Ok(CalendarDate { inner })
    }

    /// Wrap a chrono date, checking the supported year span.
    pub fn from_naive(date: NaiveDate) -> KalendarzResult<Self> {
        check_year(date.year())?;
        Ok(CalendarDate { inner: date })
    }

    /// Today's date in the local time zone
    pub fn today() -> KalendarzResult<Self> {
        Self::from_naive(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    /// 0-based month (0 = January)
    pub fn month(&self) -> u32 {
        self.inner.month0()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    pub fn weekday(&self) -> DayKey {
        DayKey::from(self.inner.weekday())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.inner
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.format("%Y-%m-%d"))
    }
}

/// Day-of-week key, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayKey {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayKey {
    /// All days in grid order (Sunday first)
    pub const ALL: [DayKey; 7] = [
        DayKey::Sunday,
        DayKey::Monday,
        DayKey::Tuesday,
        DayKey::Wednesday,
        DayKey::Thursday,
        DayKey::Friday,
        DayKey::Saturday,
    ];

    /// Position in the Sunday-first week (0..=6)
    pub fn index(&self) -> usize {
        match self {
            DayKey::Sunday => 0,
            DayKey::Monday => 1,
            DayKey::Tuesday => 2,
            DayKey::Wednesday => 3,
            DayKey::Thursday => 4,
            DayKey::Friday => 5,
            DayKey::Saturday => 6,
        }
    }
}

impl From<Weekday> for DayKey {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => DayKey::Sunday,
            Weekday::Mon => DayKey::Monday,
            Weekday::Tue => DayKey::Tuesday,
            Weekday::Wed => DayKey::Wednesday,
            Weekday::Thu => DayKey::Thursday,
            Weekday::Fri => DayKey::Friday,
            Weekday::Sat => DayKey::Saturday,
        }
    }
}

/// Interface language for translated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pl,
}

impl Locale {
    /// The other language (EN <-> PL toggle)
    pub fn toggled(&self) -> Locale {
        match self {
            Locale::En => Locale::Pl,
            Locale::Pl => Locale::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pl => "pl",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = KalendarzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" => Ok(Locale::En),
            "pl" | "pl-pl" => Ok(Locale::Pl),
            other => Err(KalendarzError::lookup_failed("locales", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1).unwrap(), 29);
        assert_eq!(days_in_month(2023, 1).unwrap(), 28);
        assert_eq!(days_in_month(2023, 3).unwrap(), 30);
        assert_eq!(days_in_month(2023, 11).unwrap(), 31);
        assert!(days_in_month(2023, 12).unwrap_err().is_lookup_error());
    }

    #[test]
    fn test_new_validates() {
        assert!(CalendarDate::new(2024, 1, 29).is_ok());
        assert!(CalendarDate::new(2023, 1, 29).unwrap_err().is_range_error());
        assert!(CalendarDate::new(2024, 0, 0).unwrap_err().is_range_error());
        assert!(CalendarDate::new(2024, 12, 1).unwrap_err().is_lookup_error());
        assert!(CalendarDate::new(1899, 0, 1).unwrap_err().is_range_error());
        assert!(CalendarDate::new(3001, 0, 1).unwrap_err().is_range_error());
    }

    #[test]
    fn test_accessors_and_weekday() {
        let date = CalendarDate::new(2024, 0, 1).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 0, 1));
        assert_eq!(date.weekday(), DayKey::Monday);
        assert_eq!(date.to_string(), "2024-01-01");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = CalendarDate::new(2024, 0, 31).unwrap();
        let b = CalendarDate::new(2024, 1, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_serialization() {
        let date = CalendarDate::new(2024, 3, 3).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":2024,"month":3,"day":3}"#);
        let roundtrip: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, roundtrip);
    }

    #[test]
    fn test_deserialize_rejects_invalid_date() {
        let result: Result<CalendarDate, _> = serde_json::from_str(r#"{"year":2023,"month":1,"day":30}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_locale_parse_and_toggle() {
        assert_eq!("PL".parse::<Locale>().unwrap(), Locale::Pl);
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
        assert_eq!(Locale::En.toggled(), Locale::Pl);
        assert_eq!(serde_json::to_string(&Locale::Pl).unwrap(), "\"pl\"");
    }
}
