//! Game session wiring the board, the cards and the round controller.
//!
//! - [`MemoryGame`]: Input dispatch and the per-tick update order
//! - [`Presenter`]: Where visual updates go

mod presenter;
mod session;

pub use presenter::{NullPresenter, Presenter};
pub use session::{Activation, MemoryGame};
