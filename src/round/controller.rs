//! The round state machine.
//!
//! ```text
//! WaitingFirstCard -> WaitingSecondCard -> MatchFound | NoMatchFound -> WaitingFirstCard
//! ```
//!
//! ## Settling
//!
//! The second card of a round starts turning later than the first, so a
//! fixed delay measured from the second selection would resolve the round
//! before the second card is readable. Instead the controller counts
//! completed to-front turns of the selected cards and only starts the
//! resolution timer once both have settled, whenever each one started.
//! The timer measures time since the later card finished, so the part of
//! the settling tick spent turning never counts towards the timeout.
//!
//! ## Example
//!
//! ```
//! use memory_pairs::assets::AssetId;
//! use memory_pairs::cards::Card;
//! use memory_pairs::core::CardId;
//! use memory_pairs::round::{RoundController, RoundStatus};
//!
//! let mut round = RoundController::new(1.0);
//! let a = Card::new(CardId::new(0), AssetId::new(1), "fox", 0.3);
//! let b = Card::new(CardId::new(1), AssetId::new(2), "owl", 0.3);
//!
//! assert!(round.is_selectable(a.id()));
//! round.select(&a).unwrap();
//! assert!(!round.is_selectable(a.id()));
//!
//! assert_eq!(round.select(&b), Ok(RoundStatus::NoMatchFound));
//! assert!(!round.is_selectable(a.id()));
//! ```

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::commands::CardCommands;
use crate::assets::AssetId;
use crate::cards::{Card, FlipEvent};
use crate::core::{CardId, PlayError};

/// Where the current round stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    #[default]
    WaitingFirstCard,
    WaitingSecondCard,
    MatchFound,
    NoMatchFound,
}

impl RoundStatus {
    /// Both cards are chosen and the round is waiting to resolve.
    #[must_use]
    pub const fn is_resolving(self) -> bool {
        matches!(self, RoundStatus::MatchFound | RoundStatus::NoMatchFound)
    }
}

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The pair was removed from play.
    Match,
    /// Both cards were turned back over.
    Mismatch,
}

/// A resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub outcome: Outcome,
    /// First and second selected card.
    pub cards: [CardId; 2],
}

/// Running totals over a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub rounds: u32,
    pub matches: u32,
    pub mismatches: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Selection {
    card: CardId,
    pair_key: AssetId,
}

/// Game-level selection and resolution.
///
/// Owns the selected pair and the settled flip counter. Cards are only
/// touched through the two resolution commands in `CardCommands`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundController {
    status: RoundStatus,
    selected: [Option<Selection>; 2],
    settled_flip_count: u8,
    /// Smallest overshoot among settles observed since the last tick.
    latest_settle: Option<f32>,
    /// Timer value to start from in the tick both cards settled.
    visible_since: Option<f32>,
    resolution_timer: f32,
    resolution_timeout: f32,
    stats: RoundStats,
}

impl RoundController {
    /// Controller that keeps a revealed pair visible for
    /// `resolution_timeout` seconds before resolving it.
    #[must_use]
    pub fn new(resolution_timeout: f32) -> Self {
        Self {
            status: RoundStatus::WaitingFirstCard,
            selected: [None, None],
            settled_flip_count: 0,
            latest_settle: None,
            visible_since: None,
            resolution_timer: 0.0,
            resolution_timeout: resolution_timeout.max(0.0),
            stats: RoundStats::default(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Selected cards, first then second.
    #[must_use]
    pub fn selected(&self) -> [Option<CardId>; 2] {
        self.selected.map(|s| s.map(|s| s.card))
    }

    /// Selected cards whose to-front turn has completed (0 to 2).
    #[must_use]
    pub fn settled_flip_count(&self) -> u8 {
        self.settled_flip_count
    }

    /// Seconds both selected cards have been fully visible.
    #[must_use]
    pub fn resolution_timer(&self) -> f32 {
        self.resolution_timer
    }

    #[must_use]
    pub fn resolution_timeout(&self) -> f32 {
        self.resolution_timeout
    }

    #[must_use]
    pub fn stats(&self) -> RoundStats {
        self.stats
    }

    fn is_selected(&self, card: CardId) -> bool {
        self.selected.iter().flatten().any(|s| s.card == card)
    }

    /// Whether `card` may be selected now.
    ///
    /// True with nothing selected, true with one selected if `card` is a
    /// different card, false with two selected.
    #[must_use]
    pub fn is_selectable(&self, card: CardId) -> bool {
        match self.selected {
            [None, _] => true,
            [Some(first), None] => first.card != card,
            [Some(_), Some(_)] => false,
        }
    }

    // === Selection ===

    /// Select a card. The caller turns it over.
    ///
    /// Rejected without any state change if the card is not selectable.
    pub fn select(&mut self, card: &Card) -> Result<RoundStatus, PlayError> {
        if !self.is_selectable(card.id()) {
            warn!("ignored selection of {} while {:?}", card.id(), self.status);
            return Err(PlayError::InvalidSelection(card.id()));
        }

        let selection = Selection {
            card: card.id(),
            pair_key: card.pair_key(),
        };

        match self.selected {
            [None, _] => {
                self.selected[0] = Some(selection);
                self.status = RoundStatus::WaitingSecondCard;
            }
            [Some(first), _] => {
                self.selected[1] = Some(selection);
                self.resolution_timer = 0.0;
                self.status = if first.pair_key == selection.pair_key {
                    RoundStatus::MatchFound
                } else {
                    RoundStatus::NoMatchFound
                };
            }
        }

        debug!("selected {}: {:?}", card.id(), self.status);
        Ok(self.status)
    }

    // === Flip Tracking ===

    /// Count a selected card's completed to-front turn.
    ///
    /// Other events are ignored. When this makes two, the pair has been
    /// visible since the later of the completions in this tick, i.e. for the
    /// smallest overshoot.
    pub fn observe_flip(&mut self, event: &FlipEvent) {
        if !event.settled_front() || !self.is_selected(event.card) {
            return;
        }
        let overshoot = event.overshoot.max(0.0);
        let latest = self.latest_settle.map_or(overshoot, |o| o.min(overshoot));
        self.latest_settle = Some(latest);

        self.settled_flip_count = (self.settled_flip_count + 1).min(2);
        if self.settled_flip_count == 2 {
            self.visible_since = Some(latest);
        }
        debug!("{} settled ({}/2)", event.card, self.settled_flip_count);
    }

    // === Resolution ===

    /// Advance the resolution timer and resolve the round when it expires.
    ///
    /// The timer only runs once both selected cards have settled. In the
    /// tick they settle it starts from the time left after the later turn
    /// finished, not the whole `delta_time`. Must be called once per tick,
    /// after this tick's flip events have been observed.
    pub fn tick(&mut self, delta_time: f32, commands: &mut impl CardCommands) -> Option<Resolution> {
        self.latest_settle = None;
        if !self.status.is_resolving() || self.settled_flip_count < 2 {
            return None;
        }

        match self.visible_since.take() {
            Some(visible) => self.resolution_timer = visible,
            None => self.resolution_timer += delta_time.max(0.0),
        }
        if self.resolution_timer < self.resolution_timeout {
            return None;
        }

        let [Some(first), Some(second)] = self.selected else {
            return None;
        };
        let cards = [first.card, second.card];

        let outcome = if self.status == RoundStatus::MatchFound {
            for card in cards {
                commands.deactivate(card);
            }
            self.stats.matches += 1;
            Outcome::Match
        } else {
            for card in cards {
                commands.flip_to_back(card);
            }
            self.stats.mismatches += 1;
            Outcome::Mismatch
        };
        self.stats.rounds += 1;

        self.settled_flip_count = 0;
        self.visible_since = None;
        self.resolution_timer = 0.0;
        self.selected = [None, None];
        self.status = RoundStatus::WaitingFirstCard;

        info!("round {} resolved: {:?} {} {}", self.stats.rounds, outcome, cards[0], cards[1]);
        Some(Resolution { outcome, cards })
    }
}
