//! Navigator policy configuration.
//!
//! # Responsibility
//! - Hold behavior switches that differ between app shells.
//! - Resolve them from the process environment when the shell does not
//!   pass them explicitly.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable controlling the delete confirmation dialog.
pub const CONFIRM_DELETE_ENV: &str = "WORKOUT_CONFIRM_DELETE";

/// Navigator behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// When set, a delete request opens a confirm/cancel dialog instead of
    /// removing the record immediately.
    pub confirm_before_delete: bool,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            confirm_before_delete: true,
        }
    }
}

impl NavigatorConfig {
    /// Reads configuration from the process environment.
    ///
    /// Unset or blank variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(CONFIRM_DELETE_ENV).ok();
        Self::from_env_value(raw.as_deref())
    }

    /// Builds configuration from a raw `WORKOUT_CONFIRM_DELETE` value.
    pub fn from_env_value(raw: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) {
            config.confirm_before_delete =
                parse_flag(value).ok_or_else(|| ConfigError::InvalidFlag {
                    key: CONFIRM_DELETE_ENV,
                    value: value.to_string(),
                })?;
        }
        Ok(config)
    }
}

/// Configuration resolution errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidFlag { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFlag { key, value } => write!(
                f,
                "invalid value `{value}` for {key}; expected 1|true|yes|on|0|false|no|off"
            ),
        }
    }
}

impl Error for ConfigError {}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, NavigatorConfig, CONFIRM_DELETE_ENV};

    #[test]
    fn defaults_to_confirming_deletes() {
        assert!(NavigatorConfig::default().confirm_before_delete);
        assert_eq!(
            NavigatorConfig::from_env_value(None).unwrap(),
            NavigatorConfig::default()
        );
        assert_eq!(
            NavigatorConfig::from_env_value(Some("  ")).unwrap(),
            NavigatorConfig::default()
        );
    }

    #[test]
    fn parses_flag_values_case_insensitively() {
        assert!(!NavigatorConfig::from_env_value(Some("OFF")).unwrap().confirm_before_delete);
        assert!(NavigatorConfig::from_env_value(Some(" Yes ")).unwrap().confirm_before_delete);
    }

    #[test]
    fn rejects_unknown_flag_values() {
        let err = NavigatorConfig::from_env_value(Some("maybe")).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidFlag {
                key: CONFIRM_DELETE_ENV,
                value: "maybe".to_string()
            }
        );
    }
}
