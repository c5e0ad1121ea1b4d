//! Presentation seam.
//!
//! The host renders; the core tells it what changed. Every method has a
//! no-op default so a presenter only implements what it draws.

use crate::assets::Asset;
use crate::core::{CardId, Orientation, Vec2};

/// Receives visual updates from a running game.
pub trait Presenter {
    /// A card was given its world position.
    fn position_assigned(&mut self, _card: CardId, _position: Vec2) {}

    /// A card's face and back assets. `None` for a slot the card lacks.
    fn assets_assigned(&mut self, _card: CardId, _front: Option<&Asset>, _back: Option<&Asset>) {}

    /// A turning card's rotation changed this tick.
    fn orientation_changed(&mut self, _card: CardId, _orientation: Orientation) {}

    /// A matched card left play and should be hidden.
    fn card_deactivated(&mut self, _card: CardId) {}
}

/// Presenter that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}
