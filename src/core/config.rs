//! Game configuration.
//!
//! Everything tunable about the game lives here:
//! - `TrayArea`: where scattered and evicted tiles may land
//! - Rotation spreads for evicted, returned and moved tiles
//! - The two deferred delays (auto-validation, progress fade)
//! - An optional RNG seed
//!
//! All fields have defaults, so partial config files deserialize cleanly.

use serde::{Deserialize, Serialize};

use super::geometry::Point;

/// Region of design space where tray tiles are placed at random.
///
/// Random positions are drawn from `x..x + width` and `y..y + height`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayArea {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for TrayArea {
    fn default() -> Self {
        Self {
            x: 80.0,
            y: 420.0,
            width: 250.0,
            height: 180.0,
        }
    }
}

impl TrayArea {
    /// Check if a point falls within the random placement range.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tray placement area.
    pub tray: TrayArea,

    /// Full rotation spread (degrees) for tiles evicted from a slot.
    pub eviction_rotation_spread: f32,

    /// Full rotation spread (degrees) for tiles returned or moved in the tray.
    pub tray_rotation_spread: f32,

    /// Delay between the last slot filling and answer validation.
    pub validation_delay_ms: u64,

    /// How long the progress map shows the just-completed transition.
    pub completion_fade_ms: u64,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Text shown on the finale screen.
    pub finale_message: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tray: TrayArea::default(),
            eviction_rotation_spread: 50.0,
            tray_rotation_spread: 30.0,
            validation_delay_ms: 300,
            completion_fade_ms: 1000,
            seed: None,
            finale_message: "Happy Birthday!!!".to_string(),
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the auto-validation delay.
    #[must_use]
    pub fn with_validation_delay(mut self, ms: u64) -> Self {
        self.validation_delay_ms = ms;
        self
    }

    /// Set the progress fade delay.
    #[must_use]
    pub fn with_completion_fade(mut self, ms: u64) -> Self {
        self.completion_fade_ms = ms;
        self
    }

    /// Set the tray area.
    #[must_use]
    pub fn with_tray(mut self, tray: TrayArea) -> Self {
        self.tray = tray;
        self
    }

    /// Set the finale message.
    #[must_use]
    pub fn with_finale_message(mut self, message: impl Into<String>) -> Self {
        self.finale_message = message.into();
        self
    }
}
