//! # pajamagrams
//!
//! A birthday anagram game: drag letter tiles into slots to spell the
//! answer to a clue, unpeel every banana on the progress map, reach the
//! finale.
//!
//! ## Design Principles
//!
//! 1. **One Store**: All mutable state sits in `GameStore`. Its methods are
//!    the only write surface; frontends read it and call actions.
//!
//! 2. **Seeded Layouts**: Scatter positions come from a `GameRng`, so a
//!    logged seed reproduces every tile placement of a session.
//!
//! 3. **Hit-Testing at the Edge**: Pointer-to-slot resolution depends on
//!    where slots are drawn, so it lives in `input`, not in the store.
//!
//! ## Modules
//!
//! - `core`: Geometry, tiles, RNG, configuration
//! - `puzzles`: Puzzle definitions and the read-only catalog
//! - `layout`: Scatter layout generation
//! - `store`: The game store, its state machine and deferred operations
//! - `input`: Slot hit-testing and the drag controller

pub mod core;
pub mod input;
pub mod layout;
pub mod puzzles;
pub mod store;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, Point, Rect, Tile, TileId, TrayArea};

pub use crate::puzzles::{CatalogError, PuzzleCatalog, PuzzleDefinition};

pub use crate::layout::{scatter_layout, ScatterPosition};

pub use crate::store::{GameError, GameStore, Placement, PuzzleState, Screen};

pub use crate::input::{find_slot_at_point, DragController, DropOutcome, DropSurface, HoverTracker, SlotBounds};
