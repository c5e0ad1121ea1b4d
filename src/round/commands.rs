//! Commands the round controller issues when a round resolves.

use crate::core::CardId;

/// Card operations the round controller needs at resolution time.
///
/// `Board` is the production implementation. Tests can substitute a
/// recorder to see exactly which commands a resolution issued.
pub trait CardCommands {
    /// Turn a mismatched card back over.
    fn flip_to_back(&mut self, card: CardId);

    /// Take a matched card out of play.
    fn deactivate(&mut self, card: CardId);
}
