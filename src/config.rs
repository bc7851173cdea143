//! Runtime settings for the device channel.
//!
//! Settings come from built-in defaults, optionally replaced by a JSON file
//! (`--config`), then overridden field by field from the command line.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{FossifyError, Result};

/// Default per-command timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Upper bound accepted for the per-command timeout
pub const MAX_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// adb executable, looked up in PATH when not absolute
    pub adb_path: String,
    /// Time budget for each adb invocation
    pub timeout_secs: u64,
    /// Android user the uninstall/reinstall commands target
    pub user: u32,
    /// Device serial passed as `adb -s`
    pub serial: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            adb_path: "adb".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user: 0,
            serial: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. Missing fields keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let parsed: anyhow::Result<Self> = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))
            .and_then(|content| {
                serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse settings JSON in {:?}", path))
            });
        parsed.map_err(|e| FossifyError::config(format!("{:#}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.adb_path.trim().is_empty() {
            return Err(FossifyError::config("adb path must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(FossifyError::config("timeout must be at least 1 second"));
        }
        if self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(FossifyError::config(format!(
                "timeout must not exceed {} seconds",
                MAX_TIMEOUT_SECS
            )));
        }
        if let Some(serial) = &self.serial {
            if serial.trim().is_empty() {
                return Err(FossifyError::config("device serial must not be empty"));
            }
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.adb_path, "adb");
        assert_eq!(settings.timeout(), Duration::from_secs(10));
        assert_eq!(settings.user, 0);
        assert!(settings.serial.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.timeout_secs = 0;
        assert!(settings.validate().is_err());

        settings.timeout_secs = MAX_TIMEOUT_SECS + 1;
        assert!(settings.validate().is_err());

        let settings = Settings {
            adb_path: "  ".into(),
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(FossifyError::Config(_))));

        let settings = Settings {
            serial: Some(String::new()),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fossify.json");
        fs::write(&path, r#"{ "timeout_secs": 30, "serial": "emulator-5554" }"#).unwrap();

        let settings = Settings::load_from_file(&path).unwrap();
        assert_eq!(settings.timeout_secs, 30);
        assert_eq!(settings.serial.as_deref(), Some("emulator-5554"));
        assert_eq!(settings.adb_path, "adb");
    }

    #[test]
    fn test_serialized_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fossify.json");
        let settings = Settings {
            adb_path: "/opt/platform-tools/adb".into(),
            user: 10,
            ..Settings::default()
        };
        fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        assert_eq!(Settings::load_from_file(&path).unwrap(), settings);
    }

    #[test]
    fn test_load_errors_are_config_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = Settings::load_from_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(missing, FossifyError::Config(ref msg) if msg.contains("absent.json")));

        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{ "timout_secs": 5 }"#).unwrap();
        let unknown = Settings::load_from_file(&path).unwrap_err();
        assert!(matches!(unknown, FossifyError::Config(_)));
    }
}
