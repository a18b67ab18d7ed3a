//! Parser settings and the TOML configuration file
//!
//! All keys are optional. A missing file yields the defaults:
//!
//! ```toml
//! validation = "lenient"
//! today = "2024-03-01"
//!
//! [days]
//! critical = 2
//! deadline_approaching = 4
//! should_probably_begin_working_on_this = 7
//! ```

use crate::parsing::{DiagnosticsParser, ParserOptions};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Day thresholds that map a distance to a deadline onto a severity
///
/// Expected to satisfy `critical < deadline_approaching < should_probably_begin_working_on_this`.
/// Inverted values are accepted and simply produce odd diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaySettings {
    pub critical: i64,
    pub deadline_approaching: i64,
    pub should_probably_begin_working_on_this: i64,
}

impl Default for DaySettings {
    fn default() -> Self {
        Self {
            critical: 2,
            deadline_approaching: 4,
            should_probably_begin_working_on_this: 7,
        }
    }
}

/// How strictly date literals are checked
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateValidation {
    /// Out-of-range components roll over and suspicious dates are only logged
    #[default]
    lenient,
    /// Out-of-range components and past years abort the parse
    strict,
}

impl FromStr for DateValidation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lenient" => Ok(DateValidation::lenient),
            "strict" => Ok(DateValidation::strict),
            _ => Err(format!(
                "Invalid validation mode '{}'. Valid options are: lenient, strict",
                s
            )),
        }
    }
}

/// Contents of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub validation: DateValidation,
    /// Pinned reference date; the local date is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
    pub days: DaySettings,
}

impl Config {
    /// Load the configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// The parsed configuration, or the defaults if the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parse the configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Serialize the configuration back to TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build a parser using these settings
    pub fn parser(&self) -> DiagnosticsParser {
        DiagnosticsParser::new(ParserOptions {
            day_settings: Some(self.days),
            today: self.today,
            validation: self.validation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_settings_default() {
        let days = DaySettings::default();
        assert_eq!(days.critical, 2);
        assert_eq!(days.deadline_approaching, 4);
        assert_eq!(days.should_probably_begin_working_on_this, 7);
    }

    // Keys left out of the file keep their defaults
    #[test]
    fn test_partial_config() {
        let config = Config::from_toml("[days]\ncritical = 1\n").unwrap();
        assert_eq!(config.days.critical, 1);
        assert_eq!(config.days.deadline_approaching, 4);
        assert_eq!(config.validation, DateValidation::lenient);
        assert!(config.today.is_none());
    }

    #[test]
    fn test_full_config() {
        let content = r#"
validation = "strict"
today = "2024-03-01"

[days]
critical = 3
deadline_approaching = 5
should_probably_begin_working_on_this = 10
"#;
        let config = Config::from_toml(content).unwrap();
        assert_eq!(config.validation, DateValidation::strict);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(
            config.days,
            DaySettings {
                critical: 3,
                deadline_approaching: 5,
                should_probably_begin_working_on_this: 10,
            }
        );
    }

    #[test]
    fn test_invalid_validation_mode() {
        assert!(Config::from_toml("validation = \"paranoid\"").is_err());
        assert!("paranoid".parse::<DateValidation>().is_err());
        assert_eq!(
            "strict".parse::<DateValidation>().unwrap(),
            DateValidation::strict
        );
    }

    // Serialization followed by parsing gives back the same configuration
    #[test]
    fn test_toml_round_trip() {
        let config = Config {
            validation: DateValidation::strict,
            today: NaiveDate::from_ymd_opt(2020, 1, 5),
            days: DaySettings::default(),
        };
        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }
}
