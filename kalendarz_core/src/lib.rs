//! # kalendarz_core - Polish Date Phrase Engine
//!
//! `kalendarz_core` turns a calendar date into the phrase a Polish speaker
//! would say for it, a pronunciation guide for English speakers, a translated
//! display string and the Polish holiday falling on that day. All outputs are
//! JSON-serializable so any front-end can render them.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over static tables; the only shared state
//!   is the per-year holiday cache
//! - **JSON-First**: Result types implement Serialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use kalendarz_core::composer::{compose_card, ComposeOptions};
//! use kalendarz_core::date::CalendarDate;
//!
//! let date = CalendarDate::new(2024, 4, 3).unwrap();
//! let card = compose_card(&date, &ComposeOptions::default()).unwrap();
//! assert_eq!(card.polish, "Piątek, 3 maja");
//! assert_eq!(card.holiday.as_ref().unwrap().english_name, "Constitution Day");
//!
//! let json = serde_json::to_string_pretty(&card).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`composer`] - The front-end boundary: phrases, display strings, date cards
//! - [`date`] - Validated calendar dates, weekdays, locales
//! - [`lexicon`] - Month and day tables, grammar guide
//! - [`inflection`] - Genitive month and ordinal day forms
//! - [`numerals`] - Polish number words for days and years
//! - [`phonetics`] - Override dictionary with transliteration fallback
//! - [`holidays`] - Easter computus and the per-year holiday map
//! - [`settings`] - Front-end configuration
//! - [`errors`] - Structured error types
//! - [`file_io`] - Settings load and atomic save

pub mod composer;
pub mod date;
pub mod errors;
pub mod file_io;
pub mod holidays;
pub mod inflection;
pub mod lexicon;
pub mod numerals;
pub mod phonetics;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use composer::{compose_card, compose_phrase, ComposeOptions, DateCard, DatePhrase, NumeralStyle};
pub use date::{CalendarDate, DayKey, Locale};
pub use errors::{KalendarzError, KalendarzResult};
pub use file_io::{load_settings, save_settings};
pub use holidays::{Holiday, HolidayKey, YearHolidays};
pub use settings::{NavigationRange, Settings};
