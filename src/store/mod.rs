//! The puzzle store and its state machine.
//!
//! `GameStore` owns the screen, level, progress counter, tiles and slots.
//! Its methods are the only way to change any of them.
//!
//! ## Puzzle lifecycle
//!
//! - `initialize_puzzle` scatters fresh tiles and empties the slots (`Initial`)
//! - placing or returning tiles moves to `Playing`
//! - filling the last slot schedules validation, which lands on `Success`
//!   or `Error` once the delay passes
//! - `complete_puzzle` leaves a solved board; `reset_puzzle` rebuilds it

mod error;
mod game_store;
mod state;
mod timers;

pub use error::GameError;
pub use game_store::{GameStore, Placement, Slots};
pub use state::{PuzzleState, Screen};
pub use timers::{Deferred, DeferredQueue};
