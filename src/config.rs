//! Layout window and palette configuration.
//!
//! The visible window is a presentation constant, not derived from
//! data. It defaults to 8 AM – 6 PM (10 hour columns) with a palette of
//! five scene styles.
//!
//! # File Form
//!
//! ```toml
//! start_hour = 7
//! end_hour = 19
//! palette_size = 4
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default first visible hour (8 AM).
pub const DEFAULT_START_HOUR: u32 = 8;
/// Default end of the visible window, exclusive (6 PM).
pub const DEFAULT_END_HOUR: u32 = 18;
/// Default number of distinct scene styles.
pub const DEFAULT_PALETTE_SIZE: usize = 5;

/// Errors raised while building or loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid layout window: start hour {start} must be before end hour {end} (max 24)")]
    InvalidWindow { start: u32, end: u32 },

    #[error("palette must have at least one style")]
    EmptyPalette,

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Layout configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// First visible hour of day (inclusive).
    pub start_hour: u32,
    /// Last visible hour of day (exclusive).
    pub end_hour: u32,
    /// Number of styles scenes cycle through within a day.
    pub palette_size: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
            palette_size: DEFAULT_PALETTE_SIZE,
        }
    }
}

impl LayoutConfig {
    /// Creates a validated configuration for the window `[start, end)`.
    pub fn window(start_hour: u32, end_hour: u32) -> Result<Self, ConfigError> {
        let config = Self {
            start_hour,
            end_hour,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the palette size.
    pub fn with_palette_size(mut self, palette_size: usize) -> Self {
        self.palette_size = palette_size;
        self
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the window is non-empty and within a day, and that
    /// the palette has at least one style.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(ConfigError::InvalidWindow {
                start: self.start_hour,
                end: self.end_hour,
            });
        }
        if self.palette_size == 0 {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    /// Number of hour columns. Zero for an inverted window.
    #[inline]
    pub fn column_count(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }

    /// Visible hours, in order.
    pub fn hours(&self) -> impl Iterator<Item = u32> {
        self.start_hour..self.start_hour + self.column_count()
    }

    /// Palette size usable as a modulus (never zero).
    #[inline]
    pub(crate) fn effective_palette_size(&self) -> usize {
        self.palette_size.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window() {
        let config = LayoutConfig::default();
        assert_eq!(config.column_count(), 10);
        assert_eq!(config.hours().collect::<Vec<_>>(), (8..18).collect::<Vec<_>>());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_window_constructor() {
        let config = LayoutConfig::window(6, 20).unwrap();
        assert_eq!(config.column_count(), 14);
        assert_eq!(config.palette_size, DEFAULT_PALETTE_SIZE);
    }

    #[test]
    fn test_invalid_windows() {
        assert!(matches!(
            LayoutConfig::window(18, 8),
            Err(ConfigError::InvalidWindow { start: 18, end: 8 })
        ));
        assert!(LayoutConfig::window(8, 8).is_err());
        assert!(LayoutConfig::window(20, 25).is_err());
        assert!(LayoutConfig::window(0, 24).is_ok());
    }

    #[test]
    fn test_empty_palette() {
        let config = LayoutConfig::default().with_palette_size(0);
        assert!(matches!(config.validate(), Err(ConfigError::EmptyPalette)));
        assert_eq!(config.effective_palette_size(), 1);
    }

    #[test]
    fn test_inverted_window_has_no_columns() {
        let config = LayoutConfig {
            start_hour: 18,
            end_hour: 8,
            palette_size: 5,
        };
        assert_eq!(config.column_count(), 0);
        assert_eq!(config.hours().count(), 0);
    }

    #[test]
    fn test_from_toml() {
        let config = LayoutConfig::from_toml_str("start_hour = 7\nend_hour = 19\npalette_size = 4\n")
            .unwrap();
        assert_eq!(config.column_count(), 12);
        assert_eq!(config.palette_size, 4);
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let config = LayoutConfig::from_toml_str("end_hour = 20").unwrap();
        assert_eq!(config.start_hour, DEFAULT_START_HOUR);
        assert_eq!(config.column_count(), 12);

        let empty = LayoutConfig::from_toml_str("").unwrap();
        assert_eq!(empty, LayoutConfig::default());
    }

    #[test]
    fn test_from_toml_errors() {
        assert!(matches!(
            LayoutConfig::from_toml_str("start_hour = \"eight\""),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            LayoutConfig::from_toml_str("start_hour = 19"),
            Err(ConfigError::InvalidWindow { .. })
        ));
    }
}
