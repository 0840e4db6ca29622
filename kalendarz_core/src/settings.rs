//! # Settings
//!
//! User-facing configuration for front-ends: interface language, how the day
//! number is written, whether the year is spoken, and the range of years the
//! calendar may navigate. Stored as JSON (see [`crate::file_io`]).
//!
//! ## Example
//!
//! ```rust
//! use kalendarz_core::settings::Settings;
//!
//! let settings: Settings = serde_json::from_str(r#"{ "locale": "pl", "include_year": true }"#).unwrap();
//! assert!(settings.validate().is_ok());
//! assert_eq!(settings.navigation.first_year, 2020);
//! assert!(settings.compose_options().include_year);
//! ```

use serde::{Deserialize, Serialize};

use crate::composer::{ComposeOptions, NumeralStyle};
use crate::date::{Locale, MAX_YEAR, MIN_YEAR};
use crate::errors::{KalendarzError, KalendarzResult};

/// Current schema version for settings files
pub const SETTINGS_VERSION: &str = "0.1.0";

/// Front-end configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Settings schema version
    pub version: String,

    /// Interface language for translated output
    pub locale: Locale,

    /// Digits ("3 kwietnia") or words ("trzeciego kwietnia")
    pub numeral_style: NumeralStyle,

    /// Speak the year after the date
    pub include_year: bool,

    /// Years reachable by month navigation
    pub navigation: NavigationRange,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: SETTINGS_VERSION.to_string(),
            locale: Locale::En,
            numeral_style: NumeralStyle::Digits,
            include_year: false,
            navigation: NavigationRange::default(),
        }
    }
}

impl Settings {
    /// Validate ranges that serde cannot express.
    pub fn validate(&self) -> KalendarzResult<()> {
        let NavigationRange { first_year, last_year } = self.navigation;
        if first_year < MIN_YEAR || last_year > MAX_YEAR {
            return Err(KalendarzError::invalid_settings(
                "navigation",
                format!("Years must lie within {}..={}", MIN_YEAR, MAX_YEAR),
            ));
        }
        if first_year > last_year {
            return Err(KalendarzError::invalid_settings(
                "navigation",
                format!("first_year {} is after last_year {}", first_year, last_year),
            ));
        }
        Ok(())
    }

    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            include_year: self.include_year,
            style: self.numeral_style,
            locale: self.locale,
        }
    }
}

/// Inclusive span of navigable years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRange {
    pub first_year: i32,
    pub last_year: i32,
}

impl Default for NavigationRange {
    fn default() -> Self {
        NavigationRange {
            first_year: 2020,
            last_year: 2035,
        }
    }
}

impl NavigationRange {
    pub fn contains(&self, year: i32) -> bool {
        (self.first_year..=self.last_year).contains(&year)
    }

    /// Nearest navigable year
    pub fn clamp(&self, year: i32) -> i32 {
        year.clamp(self.first_year, self.last_year)
    }
}
