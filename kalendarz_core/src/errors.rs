//! # Error Types
//!
//! Structured error types for kalendarz_core. Out-of-range input fails fast
//! with a typed error instead of producing silently wrong Polish.
//!
//! ## Example
//!
//! ```rust
//! use kalendarz_core::errors::{KalendarzError, KalendarzResult};
//!
//! fn validate_day(day: u32) -> KalendarzResult<()> {
//!     if !(1..=31).contains(&day) {
//!         return Err(KalendarzError::out_of_range(
//!             "day",
//!             day.to_string(),
//!             "Day of month must be between 1 and 31",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_day(0).unwrap_err().is_range_error());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for kalendarz_core operations
pub type KalendarzResult<T> = Result<T, KalendarzError>;

/// Structured error type for date phrasing operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum KalendarzError {
    /// A numeric or date input is outside the supported bounds
    #[error("Value out of range for '{field}': {value} - {reason}")]
    OutOfRange {
        field: String,
        value: String,
        reason: String,
    },

    /// An index or key is outside a fixed lexicon table
    #[error("Lookup failed in {table}: no entry for {key}")]
    LookupFailed { table: String, key: String },

    /// Settings file I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Settings are well-formed JSON but semantically invalid
    #[error("Invalid settings for '{field}': {reason}")]
    InvalidSettings { field: String, reason: String },
}

impl KalendarzError {
    /// Create an OutOfRange error
    pub fn out_of_range(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        KalendarzError::OutOfRange {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a LookupFailed error
    pub fn lookup_failed(table: impl Into<String>, key: impl Into<String>) -> Self {
        KalendarzError::LookupFailed {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        KalendarzError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(field: impl Into<String>, reason: impl Into<String>) -> Self {
        KalendarzError::InvalidSettings {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn is_range_error(&self) -> bool {
        matches!(self, KalendarzError::OutOfRange { .. })
    }

    pub fn is_lookup_error(&self) -> bool {
        matches!(self, KalendarzError::LookupFailed { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            KalendarzError::OutOfRange { .. } => "RANGE_ERROR",
            KalendarzError::LookupFailed { .. } => "LOOKUP_ERROR",
            KalendarzError::FileError { .. } => "FILE_ERROR",
            KalendarzError::SerializationError { .. } => "SERIALIZATION_ERROR",
            KalendarzError::InvalidSettings { .. } => "INVALID_SETTINGS",
        }
    }
}

impl From<serde_json::Error> for KalendarzError {
    fn from(err: serde_json::Error) -> Self {
        KalendarzError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = KalendarzError::out_of_range("year", "3001", "Year must be at most 3000");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"OutOfRange\""));
        let roundtrip: KalendarzError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(KalendarzError::lookup_failed("months", "12").error_code(), "LOOKUP_ERROR");
        assert_eq!(KalendarzError::out_of_range("day", "0", "too small").error_code(), "RANGE_ERROR");
        assert_eq!(KalendarzError::invalid_settings("locale", "bad").error_code(), "INVALID_SETTINGS");
    }

    #[test]
    fn test_error_kinds() {
        assert!(KalendarzError::lookup_failed("months", "12").is_lookup_error());
        assert!(!KalendarzError::lookup_failed("months", "12").is_range_error());
        assert!(KalendarzError::out_of_range("day", "32", "too large").is_range_error());
    }

    #[test]
    fn test_display_message() {
        let error = KalendarzError::lookup_failed("months", "12");
        assert_eq!(error.to_string(), "Lookup failed in months: no entry for 12");
    }
}
