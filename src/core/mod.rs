//! Core types: card ids, geometry, RNG, configuration, errors.
//!
//! Everything here is independent of the board and round rules.

pub mod entity;
pub mod geometry;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::CardId;
pub use geometry::{GridPos, Orientation, Vec2};
pub use rng::GameRng;
pub use config::{GameConfig, LayoutConfig};
pub use error::{AssetShortage, AssetSlot, ConfigError, PlayError, SetupError};
