//! Tray layout generation.

mod scatter;

pub use scatter::{random_tray_position, scatter_layout, ScatterPosition, PRESET_POSITIONS, SCATTER_ROTATION_SPREAD};
