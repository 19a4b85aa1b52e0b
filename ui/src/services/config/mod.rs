//! Static configuration for the form pages
//!
//! The option lists, submission delay and wish text are supplied once when a page
//! is built and never change afterwards. Everything has a sensible default, so
//! embedders only override what they need via [`FormConfig::from_json`].

use serde::{Deserialize, Serialize};

use crate::features::registration::{Course, Major};
use crate::services::errors::ConfigError;

/// Delay the simulated submission waits before acknowledging, in milliseconds
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1500;

pub const DEFAULT_WISH_BODY: &str = "Wishing you a year full of laughter, adventures and \
everything that makes you smile. Thank you for being the best friend anyone could ask for!";

/// Configuration for every page in the app
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub registration: RegistrationConfig,
    pub birthday: BirthdayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Majors offered in the dropdown, first entry is the default
    pub majors: Vec<Major>,

    /// Courses offered in the dropdown, first entry is the default
    pub courses: Vec<Course>,

    /// How long the simulated submission takes
    pub submit_delay_ms: u32,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            majors: Major::ALL.to_vec(),
            courses: Course::ALL.to_vec(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthdayConfig {
    /// Text rendered under the "Happy Birthday" heading
    pub wish_body: String,
}

impl Default for BirthdayConfig {
    fn default() -> Self {
        Self {
            wish_body: DEFAULT_WISH_BODY.to_string(),
        }
    }
}

impl FormConfig {
    /// Parse a JSON override. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.registration.majors.is_empty() {
            return Err(ConfigError::EmptyOptions {
                field: "registration.majors".to_string(),
            });
        }
        if self.registration.courses.is_empty() {
            return Err(ConfigError::EmptyOptions {
                field: "registration.courses".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.registration.submit_delay_ms, 1500);
        assert_eq!(config.registration.majors.len(), 8);
        assert_eq!(config.registration.courses.len(), 8);
        assert_eq!(config.registration.majors[0], Major::ComputerScience);
        assert_eq!(config.registration.courses[0], Course::SE101);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_keeps_unset_defaults() {
        let config = FormConfig::from_json(r#"{"registration": {"submit_delay_ms": 10}}"#).unwrap();
        assert_eq!(config.registration.submit_delay_ms, 10);
        assert_eq!(config.registration.majors, Major::ALL.to_vec());
        assert_eq!(config.birthday.wish_body, DEFAULT_WISH_BODY);
    }

    #[test]
    fn test_from_json_reads_option_labels() {
        let config = FormConfig::from_json(
            r#"{"registration": {"majors": ["Data Science", "Other"], "courses": ["SE701"]}}"#,
        )
        .unwrap();
        assert_eq!(config.registration.majors, vec![Major::DataScience, Major::Other]);
        assert_eq!(config.registration.courses, vec![Course::SE701]);
    }

    #[test]
    fn test_from_json_rejects_empty_options() {
        let err = FormConfig::from_json(r#"{"registration": {"courses": []}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyOptions { ref field } if field == "registration.courses"));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = FormConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
