//! Default values and configuration structs with default implementations.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::layout::Layout;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(default_country, String, "US".to_string());
default_fn!(default_min_age, u32, crate::form::DEFAULT_MIN_AGE);
default_fn!(
    default_phone_min_digits,
    usize,
    crate::phone::DEFAULT_MIN_DIGITS
);

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// How the form behaves and looks
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormConfig {
    /// Presentation skin (default: stepped)
    #[serde(default)]
    pub layout: Layout,
    /// Country whose dial code is added to national phone numbers (default: US)
    #[serde(default = "default_country")]
    pub default_country: String,
    /// Smallest accepted age (default: 1)
    #[serde(default = "default_min_age")]
    pub min_age: u32,
    /// Fewest digits in an international phone number (default: 10)
    #[serde(default = "default_phone_min_digits")]
    pub phone_min_digits: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            default_country: default_country(),
            min_age: default_min_age(),
            phone_min_digits: default_phone_min_digits(),
        }
    }
}

/// Output format for a completed submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary followed by a confirmation line
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Where completed submissions go
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SubmissionConfig {
    /// Console output format (default: text)
    #[serde(default)]
    pub format: OutputFormat,
    /// Directory to write JSON submissions to instead of printing them
    #[serde(default)]
    pub output_dir: Option<String>,
    /// Tera template replacing the text summary
    #[serde(default)]
    pub template: Option<String>,
}

/// Country reference data
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CountriesConfig {
    /// YAML country list replacing the built-in one
    #[serde(default)]
    pub path: Option<String>,
}
