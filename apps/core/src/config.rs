//! Runtime configuration read from the environment.
//!
//! `main` loads an optional `.env` file first; this module only reads
//! variables that are already set.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use validator::Validate;

use crate::dialogue::DEFAULT_RESTAURANT_NAME;
use crate::error::AppError;

pub const RESTAURANT_NAME_VAR: &str = "KITCHEN_RESTAURANT_NAME";
pub const REPORT_FORMAT_VAR: &str = "KITCHEN_REPORT_FORMAT";
pub const LOG_FORMAT_VAR: &str = "KITCHEN_LOG_FORMAT";

/// How the scenario report is printed on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Running transcript plus summary
    #[default]
    Text,
    /// A single JSON document
    Json,
}

impl FromStr for ReportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'text' or 'json', got '{}'",
                REPORT_FORMAT_VAR, other
            ))),
        }
    }
}

/// Shape of log lines on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'pretty' or 'json', got '{}'",
                LOG_FORMAT_VAR, other
            ))),
        }
    }
}

/// Settings for one run of the intent detection node.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Shown in the neutral greeting ("Welcome to <name>.")
    #[validate(length(min = 1, max = 64))]
    pub restaurant_name: String,
    pub report_format: ReportFormat,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            restaurant_name: DEFAULT_RESTAURANT_NAME.to_string(),
            report_format: ReportFormat::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let config = Self {
            restaurant_name: env::var(RESTAURANT_NAME_VAR)
                .map(|name| name.trim().to_string())
                .unwrap_or(defaults.restaurant_name),
            report_format: match env::var(REPORT_FORMAT_VAR) {
                Ok(value) => value.parse()?,
                Err(_) => defaults.report_format,
            },
            log_format: match env::var(LOG_FORMAT_VAR) {
                Ok(value) => value.parse()?,
                Err(_) => defaults.log_format,
            },
        };

        config.validate()?;
        Ok(config)
    }
}
