//! Card facing and flip events.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, Orientation};

/// Visible side of a card plus any turn in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    ShowingBack,
    ShowingFront,
    RotatingToFront,
    RotatingToBack,
}

impl Facing {
    /// True while a turn animation is running.
    #[must_use]
    pub const fn is_rotating(self) -> bool {
        matches!(self, Facing::RotatingToFront | Facing::RotatingToBack)
    }

    /// The facing a rotation settles into, or `None` if not rotating.
    #[must_use]
    pub const fn settles_to(self) -> Option<Facing> {
        match self {
            Facing::RotatingToFront => Some(Facing::ShowingFront),
            Facing::RotatingToBack => Some(Facing::ShowingBack),
            Facing::ShowingBack | Facing::ShowingFront => None,
        }
    }

    /// Orientation a card has once it rests in this facing.
    #[must_use]
    pub const fn resting_orientation(self) -> Orientation {
        match self {
            Facing::ShowingFront | Facing::RotatingToFront => Orientation::FRONT,
            Facing::ShowingBack | Facing::RotatingToBack => Orientation::BACK,
        }
    }
}

/// Emitted by a card in the tick its turn animation completes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlipEvent {
    /// The card that finished turning.
    pub card: CardId,
    /// Facing before completion (always a rotating state).
    pub previous: Facing,
    /// Facing reached.
    pub reached: Facing,
    /// Seconds of the completing tick that passed after the turn finished.
    pub overshoot: f32,
}

impl FlipEvent {
    /// A to-front turn that has visibly finished.
    #[must_use]
    pub fn settled_front(&self) -> bool {
        self.previous == Facing::RotatingToFront && self.reached == Facing::ShowingFront
    }
}
