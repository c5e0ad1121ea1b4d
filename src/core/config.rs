//! Game configuration.
//!
//! Loaded before the board builder runs. Values can come from code via the
//! builder methods or from a TOML document:
//!
//! ```
//! use memory_pairs::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str(r#"
//!     columns = 4
//!     rows = 3
//!     turn_target_duration = 0.25
//!
//!     [layout]
//!     offset_x = 0.2
//! "#).unwrap();
//!
//! assert_eq!(config.pair_count(), 6);
//! assert_eq!(config.resolution_timeout, 1.0);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, SetupError};
use super::geometry::Vec2;

/// Placement of the grid in world space.
///
/// Cell `(x, y)` lands at
/// `anchor + (x * (card_width + offset_x), y * (card_height + offset_y))`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// World position of cell `(0, 0)`.
    pub anchor: Vec2,
    /// Horizontal gap between neighbouring cards.
    pub offset_x: f32,
    /// Vertical gap between neighbouring cards.
    pub offset_y: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            anchor: Vec2::ZERO,
            offset_x: 0.1,
            offset_y: 0.1,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid columns (> 0).
    pub columns: u32,

    /// Grid rows (> 0). `columns * rows` must be even.
    pub rows: u32,

    /// Seconds a card takes to turn over (> 0).
    pub turn_target_duration: f32,

    /// Seconds a fully revealed pair stays visible before it is resolved (>= 0).
    pub resolution_timeout: f32,

    /// Grid placement in world space.
    pub layout: LayoutConfig,

    /// Seed for face selection, back selection and shuffling.
    /// Same seed produces the same board.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            rows: 4,
            turn_target_duration: 0.3,
            resolution_timeout: 1.0,
            layout: LayoutConfig::default(),
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, SetupError> {
        let config: GameConfig =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every constraint the board builder and state machines rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::ZeroDimension {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if (u64::from(self.columns) * u64::from(self.rows)) % 2 != 0 {
            return Err(ConfigError::OddCardCount {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.turn_target_duration.is_nan() || self.turn_target_duration <= 0.0 {
            return Err(ConfigError::NonPositiveTurnDuration(self.turn_target_duration));
        }
        if self.resolution_timeout.is_nan() || self.resolution_timeout < 0.0 {
            return Err(ConfigError::NegativeResolutionTimeout(self.resolution_timeout));
        }
        Ok(())
    }

    /// Number of pairs on the board. Only meaningful once validated.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        (self.columns as usize * self.rows as usize) / 2
    }

    /// Set the grid size.
    #[must_use]
    pub fn with_grid(mut self, columns: u32, rows: u32) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    /// Set the flip animation duration.
    #[must_use]
    pub fn with_turn_duration(mut self, seconds: f32) -> Self {
        self.turn_target_duration = seconds;
        self
    }

    /// Set how long a revealed pair stays visible.
    #[must_use]
    pub fn with_resolution_timeout(mut self, seconds: f32) -> Self {
        self.resolution_timeout = seconds;
        self
    }

    /// Set the grid placement.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.columns, 4);
        assert_eq!(config.rows, 4);
        assert_eq!(config.pair_count(), 8);
        assert_eq!(config.turn_target_duration, 0.3);
        assert_eq!(config.resolution_timeout, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_grid(6, 5)
            .with_turn_duration(0.5)
            .with_resolution_timeout(0.0)
            .with_seed(123);

        assert_eq!(config.pair_count(), 15);
        assert_eq!(config.turn_target_duration, 0.5);
        assert_eq!(config.resolution_timeout, 0.0);
        assert_eq!(config.seed, 123);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_odd_grid_rejected() {
        let config = GameConfig::default().with_grid(3, 3);
        assert_eq!(
            config.validate(),
            Err(ConfigError::OddCardCount { columns: 3, rows: 3 })
        );
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let config = GameConfig::default().with_grid(0, 4);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroDimension { .. })));
    }

    #[test]
    fn test_durations_rejected() {
        let config = GameConfig::default().with_turn_duration(0.0);
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveTurnDuration(0.0)));

        let config = GameConfig::default().with_turn_duration(f32::NAN);
        assert!(config.validate().is_err());

        let config = GameConfig::default().with_resolution_timeout(-1.0);
        assert_eq!(config.validate(), Err(ConfigError::NegativeResolutionTimeout(-1.0)));
    }

    #[test]
    fn test_from_toml() {
        let config = GameConfig::from_toml_str(
            r#"
            columns = 6
            rows = 2
            seed = 9

            [layout]
            anchor = { x = -3.0, y = 1.5 }
            offset_y = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.columns, 6);
        assert_eq!(config.rows, 2);
        assert_eq!(config.seed, 9);
        assert_eq!(config.layout.anchor, Vec2::new(-3.0, 1.5));
        assert_eq!(config.layout.offset_x, 0.1);
        assert_eq!(config.layout.offset_y, 0.5);
    }

    #[test]
    fn test_from_toml_validates() {
        let err = GameConfig::from_toml_str("columns = 5\nrows = 3").unwrap_err();
        assert!(matches!(
            err,
            SetupError::Configuration(ConfigError::OddCardCount { columns: 5, rows: 3 })
        ));

        let err = GameConfig::from_toml_str("columns = \"four\"").unwrap_err();
        assert!(matches!(err, SetupError::Configuration(ConfigError::Parse(_))));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
