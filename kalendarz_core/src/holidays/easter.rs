//! Gregorian computus.

use chrono::NaiveDate;

use crate::date::check_year;
use crate::errors::{KalendarzError, KalendarzResult};

/// Date of Easter Sunday in the Gregorian calendar.
///
/// Anonymous Gregorian algorithm (Meeus/Jones/Butcher): the golden number
/// and century corrections give the epact, from which the Paschal full moon
/// and the following Sunday are found.
///
/// # Errors
///
/// `OutOfRange` outside the supported 1900..=3000 span.
pub fn easter_sunday(year: i32) -> KalendarzResult<NaiveDate> {
    check_year(year)?;
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32).ok_or_else(|| {
        KalendarzError::out_of_range("year", year.to_string(), "Easter date is not representable")
    })
}
