// src/config.rs

//! Defines the configuration structures for the pixel editor.
//!
//! The page may hand the editor a JSON object to customize its behavior. Every
//! section carries `#[serde(default)]`, so a partial object only overrides
//! what it names and an empty one (`{}`) yields the defaults.

use crate::color::NamedColor;
use crate::location::PATTERN_PARAM;
use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Process-wide default configuration.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration for the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Share link settings.
    pub sharing: SharingConfig,
    /// Behavior of destructive actions.
    pub behavior: BehaviorConfig,
    /// Palette settings.
    pub palette: PaletteConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl Config {
    /// Parses a (possibly partial) JSON configuration object.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Resolves the configuration handed over by the page. An absent or
    /// invalid object falls back to [`CONFIG`].
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            None => CONFIG.clone(),
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                warn!("Ignoring invalid configuration: {}", e);
                CONFIG.clone()
            }
        }
    }
}

// --- Sharing Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharingConfig {
    /// Name of the query parameter carrying the pattern.
    pub param_name: String,
    /// Acknowledgment shown after the link is copied.
    pub copied_message: String,
}

impl Default for SharingConfig {
    fn default() -> Self {
        SharingConfig {
            param_name: PATTERN_PARAM.to_string(),
            copied_message: "URL copied to clipboard!".to_string(),
        }
    }
}

// --- Behavior Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Ask before clearing the grid. Disabling this clears immediately.
    pub confirm_clear: bool,
    /// Prompt shown when asking.
    pub clear_prompt: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            confirm_clear: true,
            clear_prompt: "Are you sure you want to clear the grid?".to_string(),
        }
    }
}

// --- Palette Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Color selected when the page loads.
    pub default_color: NamedColor,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        PaletteConfig {
            default_color: NamedColor::Black,
        }
    }
}

// --- Logging Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level forwarded to the console ("error" .. "trace", or "off").
    pub level: log::LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: log::LevelFilter::Info,
        }
    }
}
