//! World placement of grid cells.

use crate::core::{GridPos, LayoutConfig, Vec2};

/// World position of a cell.
///
/// `card_size` is the card's bounds when showing its back.
#[must_use]
pub fn cell_position(layout: &LayoutConfig, card_size: Vec2, pos: GridPos) -> Vec2 {
    let step = Vec2::new(card_size.x + layout.offset_x, card_size.y + layout.offset_y);
    layout.anchor + Vec2::new(pos.column as f32 * step.x, pos.row as f32 * step.y)
}
