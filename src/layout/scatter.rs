//! Scatter layouts for tray tiles.
//!
//! The first tiles of every puzzle land on hand-picked spots that look
//! natural on a phone-sized canvas; any beyond those get random spots
//! inside the tray. The resulting list is shuffled so a given letter
//! index never maps to the same spot across levels.
//!
//! Everything here is a pure function of its inputs and the RNG, so
//! layouts are reproducible from a seed.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Point, TrayArea};

/// Rotation spread (degrees) for randomly placed scatter tiles.
pub const SCATTER_ROTATION_SPREAD: f32 = 50.0;

/// A resting place for a tray tile.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScatterPosition {
    pub position: Point,
    /// Rotation in degrees.
    pub rotation: f32,
}

impl ScatterPosition {
    const fn preset(x: f32, y: f32, rotation: f32) -> Self {
        Self {
            position: Point::new(x, y),
            rotation,
        }
    }
}

/// Hand-picked positions in the lower part of the design canvas.
pub const PRESET_POSITIONS: [ScatterPosition; 8] = [
    ScatterPosition::preset(101.0, 420.0, 0.0),
    ScatterPosition::preset(148.0, 455.0, 5.0),
    ScatterPosition::preset(190.0, 440.0, -18.0),
    ScatterPosition::preset(280.0, 500.0, 22.0),
    ScatterPosition::preset(165.0, 520.0, -30.0),
    ScatterPosition::preset(111.0, 550.0, 15.0),
    ScatterPosition::preset(250.0, 580.0, -12.0),
    ScatterPosition::preset(80.0, 500.0, 8.0),
];

/// Draw a random point inside the tray.
pub fn random_tray_position(tray: &TrayArea, rng: &mut GameRng) -> Point {
    Point::new(
        rng.gen_range_f32(tray.x..tray.x + tray.width),
        rng.gen_range_f32(tray.y..tray.y + tray.height),
    )
}

/// Generate `count` tray positions: presets first, random beyond them, shuffled.
pub fn scatter_layout(count: usize, tray: &TrayArea, rng: &mut GameRng) -> Vec<ScatterPosition> {
    let mut positions: Vec<ScatterPosition> = PRESET_POSITIONS.iter().copied().take(count).collect();

    while positions.len() < count {
        positions.push(ScatterPosition {
            position: random_tray_position(tray, rng),
            rotation: rng.rotation(SCATTER_ROTATION_SPREAD),
        });
    }

    rng.shuffle(&mut positions);
    positions
}
