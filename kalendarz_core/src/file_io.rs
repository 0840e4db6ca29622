//! # File I/O Module
//!
//! Loads and saves [`Settings`] as JSON:
//! - **Atomic saves**: write to `.tmp`, sync, rename, so an interrupted save
//!   never leaves a half-written settings file
//! - **Validation**: loaded settings are range-checked and version-checked
//!
//! ## Example
//!
//! ```rust,no_run
//! use kalendarz_core::file_io::{load_settings, save_settings};
//! use kalendarz_core::settings::Settings;
//! use std::path::Path;
//!
//! let path = Path::new("kalendarz.json");
//! save_settings(&Settings::default(), path)?;
//! let settings = load_settings(path)?;
//! # Ok::<(), kalendarz_core::errors::KalendarzError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::errors::{KalendarzError, KalendarzResult};
use crate::settings::{Settings, SETTINGS_VERSION};

/// Save settings with atomic write semantics.
///
/// 1. Validate and serialize to JSON
/// 2. Verify the JSON parses back
/// 3. Write to a temporary file next to `path`
/// 4. Sync to disk
/// 5. Rename over `path`
pub fn save_settings(settings: &Settings, path: &Path) -> KalendarzResult<()> {
    settings.validate()?;
    let json = serde_json::to_string_pretty(settings)?;
    let _: Settings = serde_json::from_str(&json)?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        KalendarzError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        KalendarzError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        KalendarzError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        KalendarzError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), "saved settings");
    Ok(())
}

/// Load and validate settings from a JSON file.
///
/// # Returns
///
/// * `Err(KalendarzError::FileError)` - I/O error
/// * `Err(KalendarzError::SerializationError)` - Invalid JSON
/// * `Err(KalendarzError::InvalidSettings)` - Incompatible version or bad ranges
pub fn load_settings(path: &Path) -> KalendarzResult<Settings> {
    let mut file = File::open(path).map_err(|e| {
        KalendarzError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        KalendarzError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let settings: Settings =
        serde_json::from_str(&contents).map_err(|e| KalendarzError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&settings.version)?;
    settings.validate()?;

    debug!(path = %path.display(), locale = %settings.locale, "loaded settings");
    Ok(settings)
}

/// Major versions must match; in 0.x a newer minor version is rejected.
fn validate_version(file_version: &str) -> KalendarzResult<()> {
    let parse = |v: &str| -> Vec<u32> { v.split('.').filter_map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version);
    let current_parts = parse(SETTINGS_VERSION);

    let mismatch = || {
        KalendarzError::invalid_settings(
            "version",
            format!("file version {}, expected {}", file_version, SETTINGS_VERSION),
        )
    };

    match (file_parts.as_slice(), current_parts.as_slice()) {
        ([file_major, ..], [current_major, ..]) if file_major != current_major => Err(mismatch()),
        ([0, file_minor, ..], [0, current_minor, ..]) if file_minor > current_minor => Err(mismatch()),
        ([_, ..], [_, ..]) => Ok(()),
        _ => Err(mismatch()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::NumeralStyle;
    use crate::date::Locale;
    use crate::settings::NavigationRange;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_settings_path(name: &str) -> PathBuf {
        temp_dir().join(format!("kalendarz_test_{}.json", name))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_settings_path("roundtrip");
        let settings = Settings {
            locale: Locale::Pl,
            numeral_style: NumeralStyle::Words,
            include_year: true,
            ..Settings::default()
        };
        save_settings(&settings, &path).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_settings_path("atomic");
        let tmp_path = path.with_extension("json.tmp");

        save_settings(&Settings::default(), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_rejects_invalid_settings() {
        let path = temp_settings_path("invalid_save");
        let settings = Settings {
            navigation: NavigationRange { first_year: 2040, last_year: 2030 },
            ..Settings::default()
        };
        assert!(save_settings(&settings, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_settings(&temp_settings_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_bad_json() {
        let path = temp_settings_path("bad_json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SETTINGS_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
