//! A running game: board plus round controller, driven by a caller loop.
//!
//! Each tick runs in a fixed order: cards advance first and their flip
//! events reach the controller, then the controller ticks. A flip that
//! completes in a tick is therefore seen by the controller in that same
//! tick.
//!
//! ## Example
//!
//! ```
//! use memory_pairs::assets::AssetPool;
//! use memory_pairs::core::GameConfig;
//! use memory_pairs::game::{MemoryGame, NullPresenter};
//!
//! let mut game = MemoryGame::new(GameConfig::default(), &AssetPool::numbered(10, 1)).unwrap();
//! let first = game.board().cards()[0].id();
//!
//! game.activate_card(first).unwrap();
//! game.tick(0.1, &mut NullPresenter);
//! assert_eq!(game.pairs_remaining(), 8);
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::presenter::Presenter;
use crate::assets::AssetProvider;
use crate::board::{Board, BoardBuilder};
use crate::cards::Facing;
use crate::core::{CardId, GameConfig, GameRng, PlayError, SetupError};
use crate::round::{Outcome, Resolution, RoundController, RoundStatus};

/// What an input activation did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    /// The card was selected and started turning to the front.
    Selected(RoundStatus),
    /// Nothing happened (inactive, not selectable, face up, or mid-turn).
    Ignored,
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct MemoryGame {
    config: GameConfig,
    board: Board,
    round: RoundController,
}

impl MemoryGame {
    /// Validate the configuration and deal a board.
    ///
    /// Nothing is returned on failure; there is no partially built game.
    pub fn new(config: GameConfig, assets: &impl AssetProvider) -> Result<Self, SetupError> {
        config.validate()?;
        let board = BoardBuilder::from_config(&config).build(assets, &GameRng::new(config.seed))?;
        let round = RoundController::new(config.resolution_timeout);

        info!("new game: {} pairs, seed {}", board.pair_count(), config.seed);
        Ok(Self { config, board, round })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn round(&self) -> &RoundController {
        &self.round
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.round.status()
    }

    /// Send every card's assets and world position to the presenter.
    pub fn present_layout(&self, presenter: &mut impl Presenter) {
        for card in self.board.cards() {
            presenter.assets_assigned(card.id(), card.front_asset(), card.back_asset());
            presenter.position_assigned(card.id(), card.world_position());
        }
    }

    /// Pairs not yet matched.
    #[must_use]
    pub fn pairs_remaining(&self) -> usize {
        self.board.active_cards().count() / 2
    }

    /// True once every pair has been matched.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.board.is_cleared()
    }

    /// Handle a "card was activated" input event.
    ///
    /// Inactive cards and cards the round will not accept are ignored. A
    /// face-down card is selected and starts turning over. Only selected
    /// cards are ever face up, so any other facing is ignored too.
    pub fn activate_card(&mut self, id: CardId) -> Result<Activation, PlayError> {
        let card = self.board.card(id).ok_or(PlayError::UnknownCard(id))?;

        if !card.is_active() || !self.round.is_selectable(id) {
            debug!("ignored activation of {id}");
            return Ok(Activation::Ignored);
        }

        if card.facing() != Facing::ShowingBack {
            debug!("ignored activation of {id} while {:?}", card.facing());
            return Ok(Activation::Ignored);
        }

        let status = self.round.select(card)?;
        if let Some(card) = self.board.card_mut(id) {
            card.request_flip_to_front();
        }
        Ok(Activation::Selected(status))
    }

    /// Advance the game by `delta_time` seconds.
    ///
    /// Returns the round resolution if one happened this tick.
    pub fn tick(&mut self, delta_time: f32, presenter: &mut impl Presenter) -> Option<Resolution> {
        let events = self.board.advance(delta_time);
        for event in &events {
            self.round.observe_flip(event);
        }

        for card in self.board.cards() {
            if card.facing().is_rotating() || events.iter().any(|e| e.card == card.id()) {
                presenter.orientation_changed(card.id(), card.orientation());
            }
        }

        let resolution = self.round.tick(delta_time, &mut self.board)?;
        if resolution.outcome == Outcome::Match {
            for card in resolution.cards {
                presenter.card_deactivated(card);
            }
        }
        if self.board.is_cleared() {
            info!("board cleared after {} rounds", self.round.stats().rounds);
        }
        Some(resolution)
    }
}
