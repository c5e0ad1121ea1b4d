//! Grid occupancy: which card sits in which cell.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, GridPos};

/// Rectangular `columns x rows` grid, each cell holding at most one card.
///
/// Cells are filled once during the shuffle and never change afterwards;
/// matched cards are deactivated, not removed from their cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    columns: u32,
    rows: u32,
    cells: Vec<Option<CardId>>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            cells: vec![None; columns as usize * rows as usize],
        }
    }

    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, pos: GridPos) -> Option<usize> {
        if pos.column >= self.columns || pos.row >= self.rows {
            return None;
        }
        Some(pos.row as usize * self.columns as usize + pos.column as usize)
    }

    /// Card in a cell, if any.
    #[must_use]
    pub fn get(&self, pos: GridPos) -> Option<CardId> {
        self.cells.get(self.index(pos)?).copied().flatten()
    }

    /// Put a card in an empty cell.
    ///
    /// Returns false if the cell is occupied or out of bounds.
    pub fn occupy(&mut self, pos: GridPos, card: CardId) -> bool {
        let Some(index) = self.index(pos) else {
            return false;
        };
        match self.cells[index] {
            Some(_) => false,
            None => {
                self.cells[index] = Some(card);
                true
            }
        }
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True when every cell holds a card.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterate occupied cells row by row.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, CardId)> + '_ {
        let columns = self.columns as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            let pos = GridPos::new((i % columns) as u32, (i / columns) as u32);
            cell.map(|card| (pos, card))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.occupied(), 0);
        assert!(!grid.is_full());
        assert_eq!(grid.get(GridPos::new(0, 0)), None);
    }

    #[test]
    fn test_occupy_once() {
        let mut grid = Grid::new(2, 2);

        assert!(grid.occupy(GridPos::new(1, 0), CardId(5)));
        assert!(!grid.occupy(GridPos::new(1, 0), CardId(6)));
        assert_eq!(grid.get(GridPos::new(1, 0)), Some(CardId(5)));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(2, 2);
        assert!(!grid.occupy(GridPos::new(2, 0), CardId(1)));
        assert!(!grid.occupy(GridPos::new(0, 2), CardId(1)));
        assert_eq!(grid.get(GridPos::new(5, 5)), None);
    }

    #[test]
    fn test_iter_row_major() {
        let mut grid = Grid::new(2, 2);
        grid.occupy(GridPos::new(1, 1), CardId(3));
        grid.occupy(GridPos::new(0, 1), CardId(2));
        grid.occupy(GridPos::new(1, 0), CardId(1));
        grid.occupy(GridPos::new(0, 0), CardId(0));

        assert!(grid.is_full());
        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(
            cells,
            vec![
                (GridPos::new(0, 0), CardId(0)),
                (GridPos::new(1, 0), CardId(1)),
                (GridPos::new(0, 1), CardId(2)),
                (GridPos::new(1, 1), CardId(3)),
            ]
        );
    }
}
