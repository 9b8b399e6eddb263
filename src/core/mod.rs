//! Core types: geometry, tiles, RNG, configuration.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod geometry;
pub mod rng;
pub mod tile;

pub use config::{GameConfig, TrayArea};
pub use geometry::{Point, Rect};
pub use rng::GameRng;
pub use tile::{Tile, TileId};
