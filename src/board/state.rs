//! The dealt board: every card, where it sits, and the shared back asset.

use log::warn;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::grid::Grid;
use super::layout::cell_position;
use crate::assets::Asset;
use crate::cards::{Card, FlipEvent};
use crate::core::{CardId, GridPos, LayoutConfig, PlayError, Vec2};
use crate::round::CardCommands;

/// Flip events produced in one tick. Two selected cards is the common case.
pub type FlipEvents = SmallVec<[FlipEvent; 2]>;

/// A fully dealt board.
///
/// Only `BoardBuilder` creates boards, and only once every cell is filled,
/// so a `Board` value always satisfies: one card per cell, no card in two
/// cells, exactly two cards per pair key.
#[derive(Clone, Debug)]
pub struct Board {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
    grid: Grid,
    back: Asset,
    setup_warnings: Vec<PlayError>,
}

impl Board {
    pub(crate) fn new(
        cards: Vec<Card>,
        grid: Grid,
        back: Asset,
        setup_warnings: Vec<PlayError>,
    ) -> Self {
        let index = cards
            .iter()
            .enumerate()
            .map(|(i, card)| (card.id(), i))
            .collect();
        Self {
            cards,
            index,
            grid,
            back,
            setup_warnings,
        }
    }

    // === Shape ===

    #[must_use]
    pub fn columns(&self) -> u32 {
        self.grid.columns()
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.grid.rows()
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The back asset shared by all cards.
    #[must_use]
    pub fn back_asset(&self) -> &Asset {
        &self.back
    }

    /// Recoverable problems met while dealing (missing visual slots).
    #[must_use]
    pub fn setup_warnings(&self) -> &[PlayError] {
        &self.setup_warnings
    }

    // === Cards ===

    /// All cards, in deck construction order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(*self.index.get(&id)?)
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let i = *self.index.get(&id)?;
        self.cards.get_mut(i)
    }

    #[must_use]
    pub fn card_at(&self, pos: GridPos) -> Option<&Card> {
        self.card(self.grid.get(pos)?)
    }

    /// Cards still in play.
    pub fn active_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.is_active())
    }

    /// True once every pair has been matched.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cards.iter().all(|c| !c.is_active())
    }

    // === Animation ===

    /// Advance every turning card, collecting completion events.
    pub fn advance(&mut self, delta_time: f32) -> FlipEvents {
        self.cards
            .iter_mut()
            .filter_map(|card| card.advance(delta_time))
            .collect()
    }

    // === Layout ===

    /// Assign each card its world position.
    ///
    /// Cards without a back asset are laid out as if zero-sized.
    pub(crate) fn apply_layout(&mut self, layout: &LayoutConfig) {
        for card in &mut self.cards {
            let Some(pos) = card.grid_position() else {
                continue;
            };
            let size = card.back_size().unwrap_or_else(|| {
                warn!("{} has no back asset to size its cell", card.id());
                Vec2::ZERO
            });
            card.set_world_position(cell_position(layout, size, pos));
        }
    }
}

impl CardCommands for Board {
    fn flip_to_back(&mut self, card: CardId) {
        match self.card_mut(card) {
            Some(c) => {
                c.request_flip_to_back();
            }
            None => warn!("cannot flip unknown {card}"),
        }
    }

    fn deactivate(&mut self, card: CardId) {
        match self.card_mut(card) {
            Some(c) => c.deactivate(),
            None => warn!("cannot deactivate unknown {card}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetId;
    use crate::cards::Facing;

    fn two_card_board() -> Board {
        let back = Asset::new(AssetId(9), "plain").with_size(Vec2::new(1.0, 2.0));
        let mut grid = Grid::new(2, 1);
        let mut cards = Vec::new();
        for i in 0..2 {
            let mut card = Card::new(CardId(i), AssetId(1), "fox", 0.5);
            card.set_back_asset(back.clone()).unwrap();
            let pos = GridPos::new(i, 0);
            card.place(pos);
            grid.occupy(pos, card.id());
            cards.push(card);
        }
        Board::new(cards, grid, back, Vec::new())
    }

    #[test]
    fn test_lookup() {
        let board = two_card_board();
        assert_eq!(board.pair_count(), 1);
        assert_eq!(board.card(CardId(1)).unwrap().id(), CardId(1));
        assert!(board.card(CardId(7)).is_none());
        assert_eq!(board.card_at(GridPos::new(1, 0)).unwrap().id(), CardId(1));
    }

    #[test]
    fn test_apply_layout() {
        let mut board = two_card_board();
        let layout = LayoutConfig {
            anchor: Vec2::new(0.0, 0.0),
            offset_x: 0.5,
            offset_y: 0.5,
        };
        board.apply_layout(&layout);

        assert_eq!(board.card(CardId(0)).unwrap().world_position(), Vec2::new(0.0, 0.0));
        assert_eq!(board.card(CardId(1)).unwrap().world_position(), Vec2::new(1.5, 0.0));
    }

    #[test]
    fn test_advance_collects_events() {
        let mut board = two_card_board();
        board.card_mut(CardId(0)).unwrap().request_flip_to_front();
        board.card_mut(CardId(1)).unwrap().request_flip_to_front();

        assert!(board.advance(0.25).is_empty());
        let events = board.advance(0.25);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(FlipEvent::settled_front));
    }

    #[test]
    fn test_card_commands() {
        let mut board = two_card_board();

        board.card_mut(CardId(0)).unwrap().request_flip_to_front();
        board.advance(1.0);
        board.flip_to_back(CardId(0));
        assert_eq!(board.card(CardId(0)).unwrap().facing(), Facing::RotatingToBack);

        board.deactivate(CardId(0));
        board.deactivate(CardId(1));
        assert!(board.is_cleared());
        assert_eq!(board.active_cards().count(), 0);
    }
}
