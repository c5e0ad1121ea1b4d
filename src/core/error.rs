//! Error types.
//!
//! Two families:
//!
//! - `SetupError`: fatal, returned before any board is exposed to play.
//! - `PlayError`: recoverable anomalies during play. The round loop absorbs
//!   them (logging a warning); they are returned so callers and tests can
//!   see what was skipped.

use serde::{Deserialize, Serialize};

use super::entity::CardId;

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `columns * rows` is odd, so the cards cannot all be paired.
    OddCardCount { columns: u32, rows: u32 },
    /// A grid dimension is zero.
    ZeroDimension { columns: u32, rows: u32 },
    /// Flip animations need a positive duration.
    NonPositiveTurnDuration(f32),
    /// The resolution delay cannot be negative.
    NegativeResolutionTimeout(f32),
    /// The configuration text could not be parsed.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::OddCardCount { columns, rows } => write!(
                f,
                "can't play memory with an uneven amount of cards ({columns}x{rows})"
            ),
            ConfigError::ZeroDimension { columns, rows } => {
                write!(f, "grid must have at least one column and row ({columns}x{rows})")
            }
            ConfigError::NonPositiveTurnDuration(d) => {
                write!(f, "turn target duration must be positive, got {d}")
            }
            ConfigError::NegativeResolutionTimeout(t) => {
                write!(f, "resolution timeout must not be negative, got {t}")
            }
            ConfigError::Parse(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Not enough assets to build the requested board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetShortage {
    NotEnoughFaces { needed: usize, available: usize },
    NoBackAssets,
}

impl std::fmt::Display for AssetShortage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetShortage::NotEnoughFaces { needed, available } => write!(
                f,
                "not enough face assets to make {needed} pairs ({available} available)"
            ),
            AssetShortage::NoBackAssets => write!(f, "there are no back assets"),
        }
    }
}

impl std::error::Error for AssetShortage {}

/// Fatal error while setting up a game.
#[derive(Clone, Debug, PartialEq)]
pub enum SetupError {
    Configuration(ConfigError),
    AssetShortage(AssetShortage),
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::Configuration(e) => write!(f, "configuration error: {e}"),
            SetupError::AssetShortage(e) => write!(f, "asset shortage: {e}"),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Configuration(e) => Some(e),
            SetupError::AssetShortage(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SetupError {
    fn from(e: ConfigError) -> Self {
        SetupError::Configuration(e)
    }
}

impl From<AssetShortage> for SetupError {
    fn from(e: AssetShortage) -> Self {
        SetupError::AssetShortage(e)
    }
}

/// Which visual slot of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetSlot {
    Front,
    Back,
}

impl std::fmt::Display for AssetSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetSlot::Front => write!(f, "front"),
            AssetSlot::Back => write!(f, "back"),
        }
    }
}

/// Recoverable anomaly during play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayError {
    /// `select` was called for a card that was not selectable.
    InvalidSelection(CardId),
    /// The card has no visual slot to receive the asset.
    MissingAssetSlot { card: CardId, slot: AssetSlot },
    /// No card with this id is on the board.
    UnknownCard(CardId),
}

impl std::fmt::Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::InvalidSelection(card) => write!(f, "{card} is not selectable"),
            PlayError::MissingAssetSlot { card, slot } => {
                write!(f, "{card} has no {slot} slot")
            }
            PlayError::UnknownCard(card) => write!(f, "{card} is not on the board"),
        }
    }
}

impl std::error::Error for PlayError {}
