//! # memory-pairs
//!
//! Gameplay core for a memory-matching (pairs) card game.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: No engine, no scene graph. The caller owns the loop
//!    and calls `tick(delta_time)`; the core only updates state.
//!
//! 2. **Reproducible Boards**: Asset selection and shuffling use a seeded
//!    ChaCha8 RNG, so a seed fully determines the deal.
//!
//! 3. **Explicit Seams**: Assets come from an `AssetProvider`, visual
//!    updates go to a `Presenter`, and the round controller acts on cards
//!    only through `CardCommands`.
//!
//! ## Architecture
//!
//! - **Card state machine**: each card turns between back and front over a
//!   configured duration and reports when a turn completes.
//!
//! - **Round controller**: enforces which cards may be selected, compares
//!   the two selected cards, and resolves the round once both cards have
//!   finished turning and the resolution timeout has passed.
//!
//! ## Modules
//!
//! - `core`: Card ids, geometry, RNG, configuration, errors
//! - `assets`: Asset handles and providers
//! - `cards`: The per-card flip state machine
//! - `board`: Board building, grid and layout
//! - `round`: Selection and resolution
//! - `game`: The session tying it together

pub mod core;
pub mod assets;
pub mod cards;
pub mod board;
pub mod round;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CardId, GridPos, Orientation, Vec2,
    GameRng,
    GameConfig, LayoutConfig,
    AssetShortage, AssetSlot, ConfigError, PlayError, SetupError,
};

pub use crate::assets::{Asset, AssetId, AssetPool, AssetProvider};

pub use crate::cards::{Card, CardSlots, Facing, FlipEvent};

pub use crate::board::{Board, BoardBuilder, Grid};

pub use crate::round::{CardCommands, Outcome, Resolution, RoundController, RoundStats, RoundStatus};

pub use crate::game::{Activation, MemoryGame, NullPresenter, Presenter};
