//! The per-card flip state machine.
//!
//! ```text
//! ShowingBack -> RotatingToFront -> ShowingFront -> RotatingToBack -> ShowingBack
//! ```
//!
//! Flip requests are only honoured from the matching resting state; any
//! other request is ignored. While rotating, `advance` sweeps the
//! orientation from where the turn started towards the target and emits a
//! `FlipEvent` in the tick the turn completes.
//!
//! ## Example
//!
//! ```
//! use memory_pairs::assets::AssetId;
//! use memory_pairs::cards::{Card, Facing};
//! use memory_pairs::core::CardId;
//!
//! let mut card = Card::new(CardId::new(0), AssetId::new(7), "fox", 0.3);
//! assert!(card.request_flip_to_front());
//!
//! assert!(card.advance(0.1).is_none());
//! let event = card.advance(0.25).unwrap();
//!
//! assert!(event.settled_front());
//! assert_eq!(card.facing(), Facing::ShowingFront);
//! assert_eq!(card.rotation_progress(), 0.0);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::facing::{Facing, FlipEvent};
use crate::assets::{Asset, AssetId};
use crate::core::{AssetSlot, CardId, GridPos, Orientation, PlayError, Vec2};

/// Which visual slots a card is built with.
///
/// Real cards have both. A card missing one is a construction bug that
/// shows up as `PlayError::MissingAssetSlot` when an asset is assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSlots {
    pub front: bool,
    pub back: bool,
}

impl Default for CardSlots {
    fn default() -> Self {
        Self { front: true, back: true }
    }
}

/// A visual slot holding at most one asset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct VisualSlot {
    asset: Option<Asset>,
}

/// A card on the board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    id: CardId,

    /// Shared by exactly the two cards of a pair.
    pair_key: AssetId,

    /// Name of the face asset.
    name: String,

    facing: Facing,

    /// Seconds into the current turn; 0 when not rotating.
    rotation_progress: f32,

    turn_target_duration: f32,

    start: Orientation,
    target: Orientation,
    orientation: Orientation,

    /// Set once by the board builder.
    grid_position: Option<GridPos>,
    world_position: Vec2,

    front: Option<VisualSlot>,
    back: Option<VisualSlot>,

    /// False once the card's pair has been matched and removed from play.
    active: bool,
}

impl Card {
    /// Create a face-down card with both visual slots.
    pub fn new(
        id: CardId,
        pair_key: AssetId,
        name: impl Into<String>,
        turn_target_duration: f32,
    ) -> Self {
        let facing = Facing::ShowingBack;
        Self {
            id,
            pair_key,
            name: name.into(),
            facing,
            rotation_progress: 0.0,
            turn_target_duration: turn_target_duration.max(f32::MIN_POSITIVE),
            start: facing.resting_orientation(),
            target: facing.resting_orientation(),
            orientation: facing.resting_orientation(),
            grid_position: None,
            world_position: Vec2::ZERO,
            front: Some(VisualSlot::default()),
            back: Some(VisualSlot::default()),
            active: true,
        }
    }

    /// Rebuild the card with only the given visual slots.
    #[must_use]
    pub fn with_slots(mut self, slots: CardSlots) -> Self {
        if !slots.front {
            self.front = None;
        }
        if !slots.back {
            self.back = None;
        }
        self
    }

    // === Identity ===

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn pair_key(&self) -> AssetId {
        self.pair_key
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check whether two cards form a pair.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.pair_key == other.pair_key
    }

    // === Flip State Machine ===

    #[must_use]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    #[must_use]
    pub fn rotation_progress(&self) -> f32 {
        self.rotation_progress
    }

    #[must_use]
    pub fn turn_target_duration(&self) -> f32 {
        self.turn_target_duration
    }

    /// Current rotation, updated every tick while turning.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Start turning to the front. Only valid from `ShowingBack`.
    ///
    /// Returns whether the request was accepted.
    pub fn request_flip_to_front(&mut self) -> bool {
        if self.facing != Facing::ShowingBack {
            debug!("{} ignored flip to front while {:?}", self.id, self.facing);
            return false;
        }
        self.begin_turn(Orientation::FRONT, Facing::RotatingToFront);
        true
    }

    /// Start turning to the back. Only valid from `ShowingFront`.
    ///
    /// Returns whether the request was accepted.
    pub fn request_flip_to_back(&mut self) -> bool {
        if self.facing != Facing::ShowingFront {
            debug!("{} ignored flip to back while {:?}", self.id, self.facing);
            return false;
        }
        self.begin_turn(Orientation::BACK, Facing::RotatingToBack);
        true
    }

    fn begin_turn(&mut self, target: Orientation, facing: Facing) {
        self.start = self.orientation;
        self.target = target;
        self.rotation_progress = 0.0;
        self.facing = facing;
    }

    /// Advance a running turn by `delta_time` seconds.
    ///
    /// Does nothing unless rotating. The orientation uses the clamped
    /// fraction; completion uses the raw one.
    pub fn advance(&mut self, delta_time: f32) -> Option<FlipEvent> {
        let reached = self.facing.settles_to()?;

        self.rotation_progress += delta_time.max(0.0);
        let fraction = self.rotation_progress / self.turn_target_duration;
        self.orientation = Orientation::slerp(self.start, self.target, fraction);

        if fraction < 1.0 {
            return None;
        }

        let previous = self.facing;
        let overshoot = (self.rotation_progress - self.turn_target_duration).max(0.0);
        self.facing = reached;
        self.rotation_progress = 0.0;
        debug!("{} finished turning: {:?}", self.id, reached);

        Some(FlipEvent {
            card: self.id,
            previous,
            reached,
            overshoot,
        })
    }

    // === Assets ===

    /// Assign the face asset.
    pub fn set_front_asset(&mut self, asset: Asset) -> Result<(), PlayError> {
        let id = self.id;
        Self::assign(&mut self.front, id, AssetSlot::Front, asset)
    }

    /// Assign the back asset.
    pub fn set_back_asset(&mut self, asset: Asset) -> Result<(), PlayError> {
        let id = self.id;
        Self::assign(&mut self.back, id, AssetSlot::Back, asset)
    }

    fn assign(
        slot: &mut Option<VisualSlot>,
        card: CardId,
        which: AssetSlot,
        asset: Asset,
    ) -> Result<(), PlayError> {
        match slot {
            Some(slot) => {
                slot.asset = Some(asset);
                Ok(())
            }
            None => {
                warn!("{card} has no {which} slot; skipping {}", asset.name);
                Err(PlayError::MissingAssetSlot { card, slot: which })
            }
        }
    }

    #[must_use]
    pub fn front_asset(&self) -> Option<&Asset> {
        self.front.as_ref()?.asset.as_ref()
    }

    #[must_use]
    pub fn back_asset(&self) -> Option<&Asset> {
        self.back.as_ref()?.asset.as_ref()
    }

    /// Bounds of the face asset, if one is assigned.
    #[must_use]
    pub fn front_size(&self) -> Option<Vec2> {
        self.front_asset().map(|a| a.size)
    }

    /// Bounds of the back asset, if one is assigned.
    #[must_use]
    pub fn back_size(&self) -> Option<Vec2> {
        self.back_asset().map(|a| a.size)
    }

    // === Placement ===

    #[must_use]
    pub fn grid_position(&self) -> Option<GridPos> {
        self.grid_position
    }

    #[must_use]
    pub fn world_position(&self) -> Vec2 {
        self.world_position
    }

    /// Record the grid cell. Returns false if the card was already placed.
    pub(crate) fn place(&mut self, pos: GridPos) -> bool {
        if self.grid_position.is_some() {
            return false;
        }
        self.grid_position = Some(pos);
        true
    }

    pub(crate) fn set_world_position(&mut self, position: Vec2) {
        self.world_position = position;
    }

    // === Play ===

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }
}
