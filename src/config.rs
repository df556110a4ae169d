//! Application Configuration
//!
//! Compiled-in defaults. The log level can be set at build time through
//! the `PROPERTY_SEARCH_LOG` environment variable.

use std::str::FromStr;

use log::LevelFilter;

/// Storage slot holding the favorites list
pub const FAVORITES_KEY: &str = "techPropertyFavorites";

/// Price selector options (value, label); empty value means "Any"
pub const PRICE_OPTIONS: &[(&str, &str)] = &[
    ("", "Any"),
    ("100000", "£100,000"),
    ("200000", "£200,000"),
    ("300000", "£300,000"),
    ("400000", "£400,000"),
    ("500000", "£500,000"),
    ("600000", "£600,000"),
    ("700000", "£700,000"),
    ("800000", "£800,000"),
    ("900000", "£900,000"),
    ("1000000", "£1,000,000"),
];

/// Bedroom selector options (value, label)
pub const BEDROOM_OPTIONS: &[(&str, &str)] = &[
    ("any", "Any"),
    ("1", "1"),
    ("2", "2"),
    ("3", "3"),
    ("4", "4"),
    ("5", "5+"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub favorites_key: String,
    /// Delay before the catalog is shown, in milliseconds
    pub catalog_delay_ms: u32,
    /// Characters of description shown on result cards
    pub description_preview_chars: usize,
    /// Characters of location shown in the favorites sidebar
    pub favorite_location_chars: usize,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            favorites_key: FAVORITES_KEY.to_string(),
            catalog_delay_ms: 500,
            description_preview_chars: 100,
            favorite_location_chars: 25,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Defaults with build-time overrides applied
    pub fn from_build_env() -> Self {
        Self::default().with_log_level(option_env!("PROPERTY_SEARCH_LOG"))
    }

    fn with_log_level(mut self, level: Option<&str>) -> Self {
        if let Some(level) = level.and_then(|l| LevelFilter::from_str(l.trim()).ok()) {
            self.log_level = level;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.favorites_key, FAVORITES_KEY);
        assert_eq!(config.catalog_delay_ms, 500);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_log_level_override() {
        assert_eq!(AppConfig::default().with_log_level(Some("debug")).log_level, LevelFilter::Debug);
        assert_eq!(AppConfig::default().with_log_level(Some("loud")).log_level, LevelFilter::Info);
        assert_eq!(AppConfig::default().with_log_level(None).log_level, LevelFilter::Info);
    }

    #[test]
    fn test_log_level_maps_to_console_level() {
        assert_eq!(AppConfig::default().log_level.to_level(), Some(log::Level::Info));
        assert_eq!(AppConfig::default().with_log_level(Some("off")).log_level.to_level(), None);
    }

    #[test]
    fn test_price_options_parse() {
        for (value, _) in PRICE_OPTIONS.iter().skip(1) {
            assert!(value.parse::<u64>().is_ok());
        }
    }
}
