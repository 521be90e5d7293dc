use std::env;

use linkbio_core::config::{ValidationPolicy, DEFAULT_CONFIG_PATH};
use linkbio_core::page::DEFAULT_THEME;

/// Pipeline configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Configuration document path relative to the site (default: "./content/data.json")
    pub config_path: String,
    /// Theme used when the document names none (default: "technicallyweb3")
    pub default_theme: String,
    /// Which sections a document must contain (default: strict)
    pub validation: ValidationPolicy,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LINKBIO_CONFIG_PATH` - Configuration document path (default: "./content/data.json")
    /// - `LINKBIO_DEFAULT_THEME` - Fallback theme name (default: "technicallyweb3")
    /// - `LINKBIO_VALIDATION` - `strict` or `lenient` (default: strict)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            config_path: lookup("LINKBIO_CONFIG_PATH")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.config_path),
            default_theme: lookup("LINKBIO_DEFAULT_THEME")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.default_theme),
            validation: lookup("LINKBIO_VALIDATION")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.validation),
        }
    }

    /// Overrides the validation policy when one is given.
    pub fn with_validation(mut self, validation: Option<ValidationPolicy>) -> Self {
        if let Some(validation) = validation {
            self.validation = validation;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            default_theme: DEFAULT_THEME.to_string(),
            validation: ValidationPolicy::default(),
        }
    }
}
