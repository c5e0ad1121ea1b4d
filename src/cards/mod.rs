//! Cards and their flip state machine.
//!
//! ## Key Types
//!
//! - `Card`: Identity, pair key, facing, rotation and placement
//! - `Facing`: Visible side plus any turn in progress
//! - `FlipEvent`: Emitted when a turn completes
//! - `CardSlots`: Which visual slots a card is built with

pub mod card;
pub mod facing;

pub use card::{Card, CardSlots};
pub use facing::{Facing, FlipEvent};
