//! Board generation and layout.
//!
//! ## Key Types
//!
//! - `BoardBuilder`: Validates the grid, selects assets, deals the deck
//! - `Board`: The dealt cards, their grid cells and world positions
//! - `Grid`: Cell occupancy
//! - `cell_position`: The layout formula

pub mod builder;
pub mod grid;
pub mod layout;
pub mod state;

pub use builder::BoardBuilder;
pub use grid::Grid;
pub use layout::cell_position;
pub use state::{Board, FlipEvents};
