//! Translating pointer drags into store actions.
//!
//! The drag controller sits between a rendering surface and the store. The
//! surface knows where slots are drawn and how its coordinates map to the
//! tray; the controller decides which store action a drag-move or drop
//! turns into.
//!
//! Pointer positions are `Option<Point>`: `None` stands for an event that
//! carried no usable coordinates.

use tracing::{debug, warn};

use super::hit_test::{find_slot_at_point, HoverTracker};
use crate::core::{Point, Rect, TileId};
use crate::store::{GameError, GameStore, Placement};

/// Geometry a frontend exposes to the drag controller.
pub trait DropSurface {
    /// Slot under a surface point, if any.
    fn slot_at(&self, point: Point) -> Option<usize>;

    /// Store (design space) position for a tile dropped at a surface point,
    /// or `None` if the point is outside the tray.
    fn tray_position(&self, point: Point) -> Option<Point>;
}

/// A surface whose slot rectangles and tray share the store's coordinate space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlotBounds {
    pub slots: Vec<Rect>,
    pub tray: Option<Rect>,
}

impl DropSurface for SlotBounds {
    fn slot_at(&self, point: Point) -> Option<usize> {
        find_slot_at_point(&self.slots, point)
    }

    fn tray_position(&self, point: Point) -> Option<Point> {
        self.tray.filter(|tray| tray.contains(point)).map(|_| point)
    }
}

/// How a drop was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The tile went into a slot.
    Placed(Placement),
    /// A slotted tile went back to the tray.
    ReturnedToTray,
    /// A tray tile moved to a new tray spot.
    Moved,
    /// Nothing changed.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ActiveDrag {
    tile: TileId,
    origin_slot: Option<usize>,
}

/// Drag state for a single pointer.
#[derive(Clone, Debug, Default)]
pub struct DragController {
    active: Option<ActiveDrag>,
    hover: HoverTracker,
}

impl DragController {
    /// Create an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tile being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<TileId> {
        self.active.map(|drag| drag.tile)
    }

    /// Start dragging a tile.
    ///
    /// Refused (returns `false`) when dragging is disabled or the tile is unknown.
    pub fn begin(&mut self, store: &GameStore, tile: TileId) -> bool {
        if !store.can_drag() {
            debug!(%tile, state = %store.puzzle_state(), "Drag refused");
            return false;
        }
        let Some(found) = store.tile(tile) else {
            warn!(%tile, "Drag started on unknown tile");
            return false;
        };

        self.active = Some(ActiveDrag {
            tile,
            origin_slot: found.in_slot,
        });
        self.hover = HoverTracker::new();
        true
    }

    /// Handle a drag-move: update the hovered slot when it changes.
    pub fn drag_to(&mut self, store: &mut GameStore, surface: &impl DropSurface, pointer: Option<Point>) {
        if self.active.is_none() {
            return;
        }
        let Some(point) = pointer else {
            return;
        };

        if let Some(slot) = self.hover.update(surface.slot_at(point)) {
            store.set_hovered_slot(slot);
        }
    }

    /// Handle the end of a drag.
    pub fn drop_at(
        &mut self,
        store: &mut GameStore,
        surface: &impl DropSurface,
        pointer: Option<Point>,
    ) -> Result<DropOutcome, GameError> {
        let Some(drag) = self.active.take() else {
            return Ok(DropOutcome::Ignored);
        };
        self.clear_hover(store);

        let Some(point) = pointer else {
            return match drag.origin_slot {
                Some(_) => Self::returned(store.return_tile_to_tray(drag.tile, None)?),
                None => Ok(DropOutcome::Ignored),
            };
        };

        if let Some(slot) = surface.slot_at(point) {
            return store.place_tile_in_slot(drag.tile, slot).map(DropOutcome::Placed);
        }

        let tray_position = surface.tray_position(point);
        match (drag.origin_slot, tray_position) {
            (Some(_), position) => Self::returned(store.return_tile_to_tray(drag.tile, position)?),
            (None, Some(position)) => {
                if store.update_tile_position(drag.tile, position)? {
                    Ok(DropOutcome::Moved)
                } else {
                    Ok(DropOutcome::Ignored)
                }
            }
            (None, None) => Ok(DropOutcome::Ignored),
        }
    }

    /// Abandon the current drag without touching the tile.
    pub fn cancel(&mut self, store: &mut GameStore) {
        self.active = None;
        self.clear_hover(store);
    }

    fn clear_hover(&mut self, store: &mut GameStore) {
        if self.hover.clear() {
            store.set_hovered_slot(None);
        }
    }

    fn returned(changed: bool) -> Result<DropOutcome, GameError> {
        Ok(if changed {
            DropOutcome::ReturnedToTray
        } else {
            DropOutcome::Ignored
        })
    }
}
