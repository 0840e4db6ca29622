//! # Numeral Words
//!
//! Converts day-of-month and year numbers into Polish words.
//!
//! Numbers are decomposed into magnitude buckets (thousands, hundreds, tens,
//! units) and every bucket maps through its own table: Polish numerals are
//! not concatenated digit names (the teens are irregular, and "sto",
//! "dwieście", "trzysta" do not share a stem). Zero buckets are dropped.
//!
//! Dates use the genitive masculine ordinal ("(dnia) trzeciego"). In a
//! compound ordinal only the trailing block is ordinal, the rest stays
//! cardinal: 1984 is "tysiąc dziewięćset osiemdziesiątego czwartego".
//!
//! ## Example
//!
//! ```rust
//! use kalendarz_core::numerals::{day_to_words, year_to_words};
//!
//! assert_eq!(day_to_words(4).unwrap(), "czwartego");
//! assert_eq!(year_to_words(2024).unwrap(), "dwa tysiące dwudziestego czwartego");
//! assert_eq!(year_to_words(2000).unwrap(), "dwutysięcznego");
//! ```

use crate::errors::{KalendarzError, KalendarzResult};

/// Largest number (and year) the numeral tables cover
pub const MAX_NUMBER: u32 = 3000;

/// Word tables for one grammatical form, indexed by digit
struct NumeralForms {
    units: [&'static str; 10],
    /// 10..=19
    teens: [&'static str; 10],
    /// Indexed by the tens digit; 0 and 1 unused
    tens: [&'static str; 10],
    /// Indexed by the hundreds digit; 0 unused
    hundreds: [&'static str; 10],
}

static CARDINAL: NumeralForms = NumeralForms {
    units: [
        "zero", "jeden", "dwa", "trzy", "cztery", "pięć", "sześć", "siedem", "osiem", "dziewięć",
    ],
    teens: [
        "dziesięć",
        "jedenaście",
        "dwanaście",
        "trzynaście",
        "czternaście",
        "piętnaście",
        "szesnaście",
        "siedemnaście",
        "osiemnaście",
        "dziewiętnaście",
    ],
    tens: [
        "",
        "",
        "dwadzieścia",
        "trzydzieści",
        "czterdzieści",
        "pięćdziesiąt",
        "sześćdziesiąt",
        "siedemdziesiąt",
        "osiemdziesiąt",
        "dziewięćdziesiąt",
    ],
    hundreds: [
        "",
        "sto",
        "dwieście",
        "trzysta",
        "czterysta",
        "pięćset",
        "sześćset",
        "siedemset",
        "osiemset",
        "dziewięćset",
    ],
};

/// Genitive masculine ordinals
static ORDINAL: NumeralForms = NumeralForms {
    units: [
        "zerowego",
        "pierwszego",
        "drugiego",
        "trzeciego",
        "czwartego",
        "piątego",
        "szóstego",
        "siódmego",
        "ósmego",
        "dziewiątego",
    ],
    teens: [
        "dziesiątego",
        "jedenastego",
        "dwunastego",
        "trzynastego",
        "czternastego",
        "piętnastego",
        "szesnastego",
        "siedemnastego",
        "osiemnastego",
        "dziewiętnastego",
    ],
    tens: [
        "",
        "",
        "dwudziestego",
        "trzydziestego",
        "czterdziestego",
        "pięćdziesiątego",
        "sześćdziesiątego",
        "siedemdziesiątego",
        "osiemdziesiątego",
        "dziewięćdziesiątego",
    ],
    hundreds: [
        "",
        "setnego",
        "dwusetnego",
        "trzechsetnego",
        "czterechsetnego",
        "pięćsetnego",
        "sześćsetnego",
        "siedemsetnego",
        "osiemsetnego",
        "dziewięćsetnego",
    ],
};

/// Ordinal forms for a number ending in its thousands bucket (1000, 2000, 3000)
const THOUSANDS_ORDINAL: [&str; 4] = ["", "tysięcznego", "dwutysięcznego", "trzytysięcznego"];

/// A number split into its decimal magnitude buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Magnitudes {
    thousands: u32,
    hundreds: u32,
    tens: u32,
    units: u32,
}

impl Magnitudes {
    fn of(n: u32) -> Self {
        Magnitudes {
            thousands: n / 1000,
            hundreds: (n / 100) % 10,
            tens: (n / 10) % 10,
            units: n % 10,
        }
    }

    fn below_hundred(&self) -> u32 {
        self.tens * 10 + self.units
    }
}

/// Cardinal thousands with Polish plural agreement
fn thousands_cardinal(thousands: u32) -> String {
    match thousands {
        1 => "tysiąc".to_string(),
        2..=4 => format!("{} tysiące", CARDINAL.units[thousands as usize]),
        _ => format!("{} tysięcy", CARDINAL.units[thousands as usize]),
    }
}

/// Words for 1..=99 in the given form; `None` for zero.
fn below_hundred(n: u32, forms: &NumeralForms) -> Option<String> {
    match n {
        0 => None,
        10..=19 => Some(forms.teens[(n - 10) as usize].to_string()),
        _ => {
            let tens = (n / 10) as usize;
            let units = (n % 10) as usize;
            let words: Vec<&str> = [
                (tens >= 2).then(|| forms.tens[tens]),
                (units > 0).then(|| forms.units[units]),
            ]
            .into_iter()
            .flatten()
            .collect();
            Some(words.join(" "))
        }
    }
}

fn check_number(field: &str, value: i64, min: i64, max: i64) -> KalendarzResult<()> {
    if value < min || value > max {
        return Err(KalendarzError::out_of_range(
            field,
            value.to_string(),
            format!("Must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// Day of month as a genitive ordinal ("pierwszego", "dwudziestego czwartego").
///
/// # Errors
///
/// `OutOfRange` if `day` is outside 1..=31.
pub fn day_to_words(day: u32) -> KalendarzResult<String> {
    check_number("day", i64::from(day), 1, 31)?;
    below_hundred(day, &ORDINAL).ok_or_else(|| {
        KalendarzError::out_of_range("day", day.to_string(), "Day must be positive")
    })
}

/// Year as it is read in a date ("dwa tysiące dwudziestego czwartego").
///
/// The trailing non-zero block is ordinal: tens and units together if
/// present, otherwise the hundreds, otherwise the thousands. Everything
/// before it is cardinal.
///
/// # Errors
///
/// `OutOfRange` if `year` is outside 0..=3000.
pub fn year_to_words(year: i32) -> KalendarzResult<String> {
    check_number("year", i64::from(year), 0, i64::from(MAX_NUMBER))?;
    let n = year as u32;
    if n == 0 {
        return Ok(ORDINAL.units[0].to_string());
    }

    let m = Magnitudes::of(n);
    let mut words: Vec<String> = Vec::with_capacity(4);

    if let Some(tail) = below_hundred(m.below_hundred(), &ORDINAL) {
        if m.thousands > 0 {
            words.push(thousands_cardinal(m.thousands));
        }
        if m.hundreds > 0 {
            words.push(CARDINAL.hundreds[m.hundreds as usize].to_string());
        }
        words.push(tail);
    } else if m.hundreds > 0 {
        if m.thousands > 0 {
            words.push(thousands_cardinal(m.thousands));
        }
        words.push(ORDINAL.hundreds[m.hundreds as usize].to_string());
    } else {
        words.push(THOUSANDS_ORDINAL[m.thousands as usize].to_string());
    }

    Ok(words.join(" "))
}

/// Plain cardinal number ("dwa tysiące dwadzieścia cztery").
///
/// # Errors
///
/// `OutOfRange` if `n` exceeds 3000.
pub fn cardinal_to_words(n: u32) -> KalendarzResult<String> {
    check_number("number", i64::from(n), 0, i64::from(MAX_NUMBER))?;
    if n == 0 {
        return Ok(CARDINAL.units[0].to_string());
    }

    let m = Magnitudes::of(n);
    let mut words: Vec<String> = Vec::with_capacity(4);
    if m.thousands > 0 {
        words.push(thousands_cardinal(m.thousands));
    }
    if m.hundreds > 0 {
        words.push(CARDINAL.hundreds[m.hundreds as usize].to_string());
    }
    if let Some(tail) = below_hundred(m.below_hundred(), &CARDINAL) {
        words.push(tail);
    }
    Ok(words.join(" "))
}
