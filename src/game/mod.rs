//! Game session state machine
//!
//! The controller buffers key presses into the open row, validates submissions,
//! resolves them against the secret and reports progress to its observer.

mod attempt;
mod controller;
mod error;
mod key;
mod observer;
mod stats;
mod summary;

pub use attempt::Attempt;
pub use controller::{Game, GameState, Transition};
pub use error::GameError;
pub use key::Key;
pub use observer::GameObserver;
pub use stats::Statistics;
pub use summary::Summary;

/// Rows on the board
pub const MAX_ATTEMPTS: usize = 6;
