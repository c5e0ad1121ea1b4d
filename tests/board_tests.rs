//! Board builder integration tests.
//!
//! These tests verify the dealt board invariants: one card per cell, no
//! card in two cells, exactly two cards per pair key, and that setup
//! failures never produce a board.

use proptest::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use memory_pairs::assets::{Asset, AssetId, AssetPool};
use memory_pairs::board::{Board, BoardBuilder};
use memory_pairs::core::{
    AssetShortage, ConfigError, GameRng, GridPos, LayoutConfig, SetupError, Vec2,
};

fn assert_well_formed(board: &Board) {
    let cells = board.columns() as usize * board.rows() as usize;
    assert_eq!(board.cards().len(), cells);
    assert!(board.grid().is_full());

    let mut seen = FxHashSet::default();
    for (pos, id) in board.grid().iter() {
        assert!(seen.insert(id), "{id} placed twice");
        assert_eq!(board.card(id).unwrap().grid_position(), Some(pos));
    }
    assert_eq!(seen.len(), cells);

    let mut per_key: FxHashMap<AssetId, usize> = FxHashMap::default();
    for card in board.cards() {
        *per_key.entry(card.pair_key()).or_default() += 1;
    }
    assert_eq!(per_key.len(), cells / 2);
    assert!(per_key.values().all(|&n| n == 2));
}

// =============================================================================
// Deal Tests
// =============================================================================

/// Reference scene: 4x4 grid, 10 faces, 1 back.
#[test]
fn test_reference_board() {
    let board = BoardBuilder::new(4, 4)
        .build(&AssetPool::numbered(10, 1), &GameRng::new(42))
        .unwrap();

    assert_well_formed(&board);
    assert_eq!(board.pair_count(), 8);
    assert_eq!(board.back_asset().name, "back_0");
    assert!(board.setup_warnings().is_empty());

    for card in board.cards() {
        assert_eq!(card.back_asset(), Some(board.back_asset()));
        assert_eq!(card.front_asset().unwrap().id, card.pair_key());
        assert_eq!(card.name(), card.front_asset().unwrap().name);
    }
}

/// Exactly as many faces as pairs uses every face.
#[test]
fn test_exact_face_count() {
    let board = BoardBuilder::new(6, 2)
        .build(&AssetPool::numbered(6, 2), &GameRng::new(3))
        .unwrap();

    let keys: FxHashSet<_> = board.cards().iter().map(|c| c.pair_key()).collect();
    let expected: FxHashSet<_> = (0..6).map(AssetId::new).collect();
    assert_eq!(keys, expected);
}

/// Odd row counts deal fine when the column count is even.
#[test]
fn test_odd_rows_even_columns() {
    for (columns, rows) in [(2, 3), (4, 5), (6, 1)] {
        let board = BoardBuilder::new(columns, rows)
            .build(&AssetPool::numbered(20, 1), &GameRng::new(5))
            .unwrap();
        assert_well_formed(&board);
    }
}

/// Different seeds deal different boards.
#[test]
fn test_seed_changes_deal() {
    let assets = AssetPool::numbered(20, 4);
    let a = BoardBuilder::new(4, 4).build(&assets, &GameRng::new(1)).unwrap();
    let b = BoardBuilder::new(4, 4).build(&assets, &GameRng::new(2)).unwrap();

    assert_ne!(a.grid(), b.grid());
}

/// Layout spaces cards by their back size plus the configured offset.
#[test]
fn test_layout_positions() {
    let assets = AssetPool::numbered(4, 0)
        .with_back(Asset::new(AssetId::new(100), "tall").with_size(Vec2::new(1.0, 2.0)));
    let layout = LayoutConfig {
        anchor: Vec2::new(-1.0, -1.0),
        offset_x: 0.5,
        offset_y: 0.5,
    };

    let board = BoardBuilder::new(4, 2)
        .with_layout(layout)
        .build(&assets, &GameRng::new(8))
        .unwrap();

    for column in 0..4 {
        for row in 0..2 {
            let card = board.card_at(GridPos::new(column, row)).unwrap();
            let expected = Vec2::new(-1.0 + column as f32 * 1.5, -1.0 + row as f32 * 2.5);
            assert_eq!(card.world_position(), expected);
        }
    }
}

// =============================================================================
// Setup Failure Tests
// =============================================================================

/// Odd grids are a configuration error.
#[test]
fn test_odd_grid() {
    let result = BoardBuilder::new(5, 3).build(&AssetPool::numbered(20, 1), &GameRng::new(1));
    assert!(matches!(
        result,
        Err(SetupError::Configuration(ConfigError::OddCardCount { columns: 5, rows: 3 }))
    ));
}

/// Too few faces or no backs is an asset shortage.
#[test]
fn test_asset_shortage() {
    let result = BoardBuilder::new(4, 4).build(&AssetPool::numbered(7, 1), &GameRng::new(1));
    assert!(matches!(
        result,
        Err(SetupError::AssetShortage(AssetShortage::NotEnoughFaces { needed: 8, available: 7 }))
    ));

    let result = BoardBuilder::new(4, 4).build(&AssetPool::numbered(10, 0), &GameRng::new(1));
    assert!(matches!(
        result,
        Err(SetupError::AssetShortage(AssetShortage::NoBackAssets))
    ));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_even_grids_are_well_formed(
        columns in 1u32..9,
        rows in 1u32..9,
        extra_faces in 0u32..6,
        backs in 1u32..4,
        seed in any::<u64>(),
    ) {
        prop_assume!((columns * rows) % 2 == 0);
        let pairs = columns * rows / 2;
        let assets = AssetPool::numbered(pairs + extra_faces, backs);

        let board = BoardBuilder::new(columns, rows)
            .build(&assets, &GameRng::new(seed))
            .unwrap();

        assert_well_formed(&board);
    }

    #[test]
    fn prop_odd_grids_always_fail(
        half_columns in 0u32..5,
        half_rows in 0u32..5,
        seed in any::<u64>(),
    ) {
        let columns = half_columns * 2 + 1;
        let rows = half_rows * 2 + 1;

        let result = BoardBuilder::new(columns, rows)
            .build(&AssetPool::numbered(100, 1), &GameRng::new(seed));

        let is_odd_error = matches!(
            result,
            Err(SetupError::Configuration(ConfigError::OddCardCount { .. }))
        );
        prop_assert!(is_odd_error);
    }
}
