//! # Holidays
//!
//! Polish public holidays and major observances for a given year, keyed by
//! month-day (`"3-1"` is 1 April; months are 0-based).
//!
//! Fixed holidays come from a static table. Movable feasts are offsets from
//! Easter Sunday, found with the Gregorian computus in [`easter`]. When two
//! holidays share a day (15 August) their names and notes are joined.
//!
//! Results are memoized per year in a process-wide, append-only cache.
//! Concurrent callers may compute the same year twice; both results are
//! identical and the first one stored wins.
//!
//! ## Example
//!
//! ```rust
//! use kalendarz_core::holidays::holidays_for_year;
//!
//! let holidays = holidays_for_year(2024).unwrap();
//! assert_eq!(holidays.get_key("0-1").unwrap().name, "Nowy Rok");
//! assert_eq!(holidays.get_key("3-1").unwrap().english_name, "Easter Monday");
//! ```

pub mod easter;
mod table;

pub use easter::easter_sunday;

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate};
use dashmap::DashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::date::{check_year, CalendarDate};
use crate::errors::{KalendarzError, KalendarzResult};
use table::{FixedHoliday, MovableHoliday, FIXED, MOVABLE};

/// Month-day key: 0-based month, 1-based day. Displays as `"M-D"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HolidayKey {
    pub month: u32,
    pub day: u32,
}

impl HolidayKey {
    pub fn new(month: u32, day: u32) -> Self {
        HolidayKey { month, day }
    }

    pub fn of(date: &CalendarDate) -> Self {
        HolidayKey::new(date.month(), date.day())
    }

    fn of_naive(date: NaiveDate) -> Self {
        HolidayKey::new(date.month0(), date.day())
    }
}

impl fmt::Display for HolidayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.month, self.day)
    }
}

impl FromStr for HolidayKey {
    type Err = KalendarzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || KalendarzError::lookup_failed("holiday keys", s);
        let (month, day) = s.split_once('-').ok_or_else(invalid)?;
        let month: u32 = month.trim().parse().map_err(|_| invalid())?;
        let day: u32 = day.trim().parse().map_err(|_| invalid())?;
        if month > 11 || day == 0 || day > 31 {
            return Err(invalid());
        }
        Ok(HolidayKey { month, day })
    }
}

impl From<HolidayKey> for String {
    fn from(key: HolidayKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for HolidayKey {
    type Error = KalendarzError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A holiday on a specific day of a specific year.
///
/// ## JSON Example
///
/// ```json
/// {
///   "key": "3-1",
///   "name": "Poniedziałek Wielkanocny",
///   "english_name": "Easter Monday",
///   "description": "Śmigus-dyngus: people drench each other with water.",
///   "movable": true,
///   "public": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub key: HolidayKey,
    /// Polish name
    pub name: String,
    pub english_name: String,
    /// Cultural note shown to the learner
    pub description: String,
    /// Date depends on Easter
    pub movable: bool,
    /// Statutory non-working day
    pub public: bool,
}

impl Holiday {
    fn from_fixed(def: &FixedHoliday) -> Self {
        Holiday {
            key: HolidayKey::new(def.month, def.day),
            name: def.name.to_string(),
            english_name: def.english_name.to_string(),
            description: def.description.to_string(),
            movable: false,
            public: def.public,
        }
    }

    fn from_movable(def: &MovableHoliday, date: NaiveDate) -> Self {
        Holiday {
            key: HolidayKey::of_naive(date),
            name: def.name.to_string(),
            english_name: def.english_name.to_string(),
            description: def.description.to_string(),
            movable: true,
            public: def.public,
        }
    }

    /// Fold another holiday on the same day into this one, keeping both.
    fn absorb(&mut self, other: Holiday) {
        self.name = format!("{} / {}", self.name, other.name);
        self.english_name = format!("{} / {}", self.english_name, other.english_name);
        self.description = format!("{} {}", self.description, other.description);
        self.movable |= other.movable;
        self.public |= other.public;
    }
}

/// All holidays of one year, in calendar order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearHolidays {
    year: i32,
    entries: BTreeMap<HolidayKey, Holiday>,
}

impl YearHolidays {
    fn new(year: i32) -> Self {
        YearHolidays {
            year,
            entries: BTreeMap::new(),
        }
    }

    fn insert(&mut self, holiday: Holiday) {
        match self.entries.entry(holiday.key) {
            btree_map::Entry::Occupied(mut existing) => existing.get_mut().absorb(holiday),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(holiday);
            }
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn get(&self, key: &HolidayKey) -> Option<&Holiday> {
        self.entries.get(key)
    }

    /// Look up by `"M-D"` string; malformed keys find nothing.
    pub fn get_key(&self, key: &str) -> Option<&Holiday> {
        key.parse::<HolidayKey>().ok().and_then(|k| self.entries.get(&k))
    }

    /// Holiday on `date`, ignoring dates from other years.
    pub fn on(&self, date: &CalendarDate) -> Option<&Holiday> {
        if date.year() != self.year {
            return None;
        }
        self.get(&HolidayKey::of(date))
    }

    /// Holidays in a 0-based month, in day order
    pub fn in_month(&self, month: u32) -> impl Iterator<Item = &Holiday> {
        self.entries
            .range(HolidayKey::new(month, 0)..=HolidayKey::new(month, u32::MAX))
            .map(|(_, h)| h)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute the holidays for `year` without touching the cache.
///
/// # Errors
///
/// `OutOfRange` outside the supported 1900..=3000 span.
pub fn compute_holidays(year: i32) -> KalendarzResult<YearHolidays> {
    check_year(year)?;
    let mut holidays = YearHolidays::new(year);

    for def in FIXED.iter().filter(|d| d.applies_to(year)) {
        holidays.insert(Holiday::from_fixed(def));
    }

    let easter = easter_sunday(year)?;
    for def in MOVABLE {
        let date = easter + Duration::days(def.offset_days);
        holidays.insert(Holiday::from_movable(def, date));
    }

    Ok(holidays)
}

static CACHE: Lazy<DashMap<i32, Arc<YearHolidays>>> = Lazy::new(DashMap::new);

/// Holidays for `year`, computed once and then served from the cache.
pub fn holidays_for_year(year: i32) -> KalendarzResult<Arc<YearHolidays>> {
    if let Some(hit) = CACHE.get(&year) {
        return Ok(Arc::clone(hit.value()));
    }

    let computed = Arc::new(compute_holidays(year)?);
    debug!(year, count = computed.len(), "computed holidays");

    Ok(CACHE.entry(year).or_insert(computed).value().clone())
}

/// The holiday falling on `date`, if any.
pub fn holiday_on(date: &CalendarDate) -> KalendarzResult<Option<Holiday>> {
    let holidays = holidays_for_year(date.year())?;
    Ok(holidays.on(date).cloned())
}
