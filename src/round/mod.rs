//! Round control: selection rules, match evaluation, timed resolution.
//!
//! ## Key Types
//!
//! - [`RoundController`]: The round state machine
//! - [`RoundStatus`]: Where the current round stands
//! - [`CardCommands`]: What the controller asks of the cards at resolution
//! - [`Resolution`]: How a round ended

mod commands;
mod controller;

pub use commands::CardCommands;
pub use controller::{Outcome, Resolution, RoundController, RoundStats, RoundStatus};
