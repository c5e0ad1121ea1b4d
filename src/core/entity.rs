//! Card identification.
//!
//! Every card dealt onto the board has a unique `CardId`. Ids are allocated
//! sequentially by the board builder in deck construction order, so the two
//! cards of a pair always receive neighbouring ids. The id says nothing about
//! where the card ends up on the grid; that is decided by the shuffle.
//!
//! ```
//! use memory_pairs::core::CardId;
//!
//! let first = CardId::new(0);
//! assert_eq!(first.next(), CardId::new(1));
//! assert_eq!(first.to_string(), "Card(0)");
//! ```

use serde::{Deserialize, Serialize};

/// Stable identity of a card for the whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
