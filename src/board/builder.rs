//! Board construction: pair count, asset selection, deck, shuffle, layout.
//!
//! All checks run before anything is built, so a failed build never leaves
//! a partial board behind.
//!
//! ## Example
//!
//! ```
//! use memory_pairs::assets::AssetPool;
//! use memory_pairs::board::BoardBuilder;
//! use memory_pairs::core::GameRng;
//!
//! let assets = AssetPool::numbered(10, 1);
//! let board = BoardBuilder::new(4, 4)
//!     .build(&assets, &GameRng::new(42))
//!     .unwrap();
//!
//! assert_eq!(board.pair_count(), 8);
//! assert!(board.grid().is_full());
//! ```

use log::info;
use rustc_hash::FxHashSet;

use super::grid::Grid;
use super::state::Board;
use crate::assets::{Asset, AssetProvider};
use crate::cards::{Card, CardSlots};
use crate::core::{
    AssetShortage, CardId, ConfigError, GameConfig, GameRng, GridPos, LayoutConfig, PlayError,
    SetupError,
};

/// Builds boards from a grid size and an asset provider.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    columns: u32,
    rows: u32,
    turn_target_duration: f32,
    layout: LayoutConfig,
    slots: CardSlots,
}

impl BoardBuilder {
    /// Builder for a `columns x rows` board with default timing and layout.
    #[must_use]
    pub fn new(columns: u32, rows: u32) -> Self {
        let defaults = GameConfig::default();
        Self {
            columns,
            rows,
            turn_target_duration: defaults.turn_target_duration,
            layout: defaults.layout,
            slots: CardSlots::default(),
        }
    }

    /// Builder matching a game configuration.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.columns, config.rows)
            .with_turn_duration(config.turn_target_duration)
            .with_layout(config.layout.clone())
    }

    /// Set the flip duration given to every card.
    #[must_use]
    pub fn with_turn_duration(mut self, seconds: f32) -> Self {
        self.turn_target_duration = seconds;
        self
    }

    /// Set the grid placement.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Set which visual slots each card is built with.
    #[must_use]
    pub fn with_slots(mut self, slots: CardSlots) -> Self {
        self.slots = slots;
        self
    }

    /// Number of pairs the grid holds.
    pub fn pair_count(&self) -> Result<usize, ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::ZeroDimension {
                columns: self.columns,
                rows: self.rows,
            });
        }
        let cells = self.columns as usize * self.rows as usize;
        if cells % 2 != 0 {
            return Err(ConfigError::OddCardCount {
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(cells / 2)
    }

    /// Build a fully dealt and laid-out board.
    ///
    /// Face selection, back selection and shuffling each use their own
    /// stream derived from `rng`, so the same seed always deals the same
    /// board.
    pub fn build(&self, assets: &impl AssetProvider, rng: &GameRng) -> Result<Board, SetupError> {
        let pair_count = self.pair_count()?;
        let faces = select_faces(assets.face_assets(), pair_count, &mut rng.for_context("faces"))?;
        let back = select_back(assets.back_assets(), &mut rng.for_context("back"))?;

        let (deck, warnings) = self.construct_deck(&faces, &back);
        let (cards, grid) = self.shuffle_onto_grid(deck, &mut rng.for_context("shuffle"));

        let mut board = Board::new(cards, grid, back, warnings);
        board.apply_layout(&self.layout);

        info!(
            "dealt {}x{} board: {} pairs, back {}",
            self.columns,
            self.rows,
            pair_count,
            board.back_asset().name
        );
        Ok(board)
    }

    /// Two cards per face, all sharing the back asset.
    ///
    /// Missing visual slots are recorded and skipped, never fatal.
    fn construct_deck(&self, faces: &[Asset], back: &Asset) -> (Vec<Card>, Vec<PlayError>) {
        let mut deck = Vec::with_capacity(faces.len() * 2);
        let mut warnings = Vec::new();
        let mut next_id = CardId::new(0);

        for face in faces {
            for _ in 0..2 {
                let mut card = Card::new(next_id, face.id, face.name.clone(), self.turn_target_duration)
                    .with_slots(self.slots);
                next_id = next_id.next();

                if let Err(e) = card.set_back_asset(back.clone()) {
                    warnings.push(e);
                }
                if let Err(e) = card.set_front_asset(face.clone()) {
                    warnings.push(e);
                }
                deck.push(card);
            }
        }
        (deck, warnings)
    }

    /// Deal the deck from the top onto random empty cells.
    ///
    /// A draw that lands on an occupied cell is discarded and redrawn, which
    /// keeps every permutation equally likely.
    fn shuffle_onto_grid(&self, mut deck: Vec<Card>, rng: &mut GameRng) -> (Vec<Card>, Grid) {
        let mut grid = Grid::new(self.columns, self.rows);
        let mut placed = Vec::with_capacity(deck.len());

        while let Some(mut card) = deck.pop() {
            loop {
                let pos = GridPos::new(
                    rng.draw_index(self.columns as usize).unwrap_or(0) as u32,
                    rng.draw_index(self.rows as usize).unwrap_or(0) as u32,
                );
                if grid.occupy(pos, card.id()) {
                    card.place(pos);
                    break;
                }
            }
            placed.push(card);
        }

        // Keep deck construction order for lookups
        placed.sort_by_key(Card::id);
        (placed, grid)
    }
}

/// Draw `pair_count` distinct faces uniformly at random.
fn select_faces(
    pool: Vec<Asset>,
    pair_count: usize,
    rng: &mut GameRng,
) -> Result<Vec<Asset>, AssetShortage> {
    let mut seen = FxHashSet::default();
    let pool: Vec<Asset> = pool.into_iter().filter(|a| seen.insert(a.id)).collect();

    let indices = rng
        .draw_distinct(pool.len(), pair_count)
        .ok_or(AssetShortage::NotEnoughFaces {
            needed: pair_count,
            available: pool.len(),
        })?;

    Ok(indices.into_iter().map(|i| pool[i].clone()).collect())
}

/// Pick the back asset shared by every card.
fn select_back(pool: Vec<Asset>, rng: &mut GameRng) -> Result<Asset, AssetShortage> {
    rng.pick(&pool).cloned().ok_or(AssetShortage::NoBackAssets)
}
