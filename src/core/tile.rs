//! Letter tiles.
//!
//! Every tile on the board has a `TileId`. Ids are allocated per puzzle:
//! tile `n` is the `n`th letter of the puzzle's tile list, so ids are only
//! meaningful until the puzzle is re-initialized.
//!
//! ```
//! use pajamagrams::core::TileId;
//!
//! let id = TileId::new(3);
//! assert_eq!(id.index(), 3);
//! assert_eq!(id.to_string(), "tile-3");
//! ```

use serde::{Deserialize, Serialize};

use super::geometry::Point;

/// Identifier of a tile within the current puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position of this tile in the puzzle's tile list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tile-{}", self.0)
    }
}

/// A draggable letter tile.
///
/// `position` and `rotation` describe where the tile rests in the tray.
/// While `in_slot` is set they are kept but not shown; slotted tiles are
/// drawn upright inside their slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub letter: String,
    pub position: Point,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Slot index, or `None` while in the tray.
    pub in_slot: Option<usize>,
}

impl Tile {
    /// Create a tray tile.
    #[must_use]
    pub fn new(id: TileId, letter: impl Into<String>, position: Point, rotation: f32) -> Self {
        Self {
            id,
            letter: letter.into(),
            position,
            rotation,
            in_slot: None,
        }
    }

    /// Check if the tile is resting in the tray.
    #[must_use]
    pub fn in_tray(&self) -> bool {
        self.in_slot.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TileId(42)), "tile-42");
    }

    #[test]
    fn test_new_tile_is_in_tray() {
        let tile = Tile::new(TileId::new(0), "A", Point::new(101.0, 420.0), 12.0);

        assert!(tile.in_tray());
        assert_eq!(tile.rotation, 12.0);
    }

    #[test]
    fn test_slotted_tile_leaves_tray() {
        let mut tile = Tile::new(TileId::new(1), "B", Point::default(), -18.0);
        tile.in_slot = Some(2);

        assert!(!tile.in_tray());
    }

    #[test]
    fn test_serialization() {
        let tile = Tile::new(TileId::new(5), "Z", Point::new(1.0, 2.0), 3.0);
        let json = serde_json::to_string(&tile).unwrap();
        let deserialized: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(tile, deserialized);
    }
}
