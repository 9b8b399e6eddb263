//! Drag controller integration tests.
//!
//! Uses `SlotBounds`, a surface laid out in the store's own design space:
//! five 53 x 53 slots in a row at y = 250 and the default tray below.

use pajamagrams::{
    DragController, DropOutcome, GameConfig, GameStore, Point, PuzzleCatalog, PuzzleDefinition, PuzzleState,
    Rect, SlotBounds, TileId,
};

fn surface() -> SlotBounds {
    SlotBounds {
        slots: (0..5)
            .map(|i| Rect::new(40.0 + i as f32 * 61.0, 250.0, 53.0, 53.0))
            .collect(),
        tray: Some(Rect::new(80.0, 420.0, 250.0, 180.0)),
    }
}

fn slot_centre(slot: usize) -> Point {
    Point::new(40.0 + slot as f32 * 61.0 + 26.0, 276.0)
}

fn store() -> GameStore {
    let catalog = PuzzleCatalog::new(vec![PuzzleDefinition::new("Fruit", "APPLE", ["A", "P", "P", "L", "E"])]).unwrap();
    let mut store = GameStore::new(catalog, GameConfig::default().with_seed(21));
    store.start_game();
    store.select_progress_item(0).unwrap();
    store
}

// =============================================================================
// Hover Tests
// =============================================================================

/// Moving over a slot hovers it; the drop clears the hover.
#[test]
fn test_hover_follows_pointer() {
    let mut store = store();
    let surface = surface();
    let mut drag = DragController::new();

    assert!(drag.begin(&store, TileId::new(0)));
    drag.drag_to(&mut store, &surface, Some(slot_centre(2)));
    assert_eq!(store.hovered_slot(), Some(2));

    drag.drag_to(&mut store, &surface, Some(Point::new(5.0, 5.0)));
    assert_eq!(store.hovered_slot(), None);

    drag.drag_to(&mut store, &surface, Some(slot_centre(3)));
    drag.drag_to(&mut store, &surface, None);
    assert_eq!(store.hovered_slot(), Some(3));

    drag.drop_at(&mut store, &surface, Some(slot_centre(3))).unwrap();
    assert_eq!(store.hovered_slot(), None);
}

/// Moves without an active drag do nothing.
#[test]
fn test_drag_to_without_begin() {
    let mut store = store();
    let mut drag = DragController::new();

    drag.drag_to(&mut store, &surface(), Some(slot_centre(1)));
    assert_eq!(store.hovered_slot(), None);
    assert_eq!(drag.drop_at(&mut store, &surface(), Some(slot_centre(1))), Ok(DropOutcome::Ignored));
}

// =============================================================================
// Drop Tests
// =============================================================================

/// Dropping on a slot places the tile.
#[test]
fn test_drop_on_slot_places() {
    let mut store = store();
    let mut drag = DragController::new();

    drag.begin(&store, TileId::new(4));
    let outcome = drag.drop_at(&mut store, &surface(), Some(slot_centre(1))).unwrap();

    match outcome {
        DropOutcome::Placed(placement) => {
            assert_eq!(placement.tile, TileId::new(4));
            assert_eq!(placement.slot, 1);
        }
        other => panic!("expected placement, got {other:?}"),
    }
    assert_eq!(store.slots()[1], Some(TileId::new(4)));
    assert_eq!(drag.dragging(), None);
}

/// Dragging a slotted tile to another slot moves it.
#[test]
fn test_slot_to_slot_move() {
    let mut store = store();
    let mut drag = DragController::new();
    store.place_tile_in_slot(TileId::new(2), 0).unwrap();

    drag.begin(&store, TileId::new(2));
    let outcome = drag.drop_at(&mut store, &surface(), Some(slot_centre(4))).unwrap();

    assert!(matches!(outcome, DropOutcome::Placed(p) if p.vacated == Some(0)));
    assert_eq!(store.slots()[0], None);
    assert_eq!(store.slots()[4], Some(TileId::new(2)));
}

/// A slotted tile dropped in the tray lands where it was dropped.
#[test]
fn test_slotted_tile_dropped_in_tray() {
    let mut store = store();
    let mut drag = DragController::new();
    store.place_tile_in_slot(TileId::new(1), 3).unwrap();

    drag.begin(&store, TileId::new(1));
    let drop = Point::new(200.0, 500.0);
    assert_eq!(drag.drop_at(&mut store, &surface(), Some(drop)), Ok(DropOutcome::ReturnedToTray));

    let tile = store.tile(TileId::new(1)).unwrap();
    assert!(tile.in_tray());
    assert_eq!(tile.position, drop);
}

/// A slotted tile dropped without coordinates goes to a random tray spot.
#[test]
fn test_slotted_tile_dropped_without_pointer() {
    let mut store = store();
    let mut drag = DragController::new();
    store.place_tile_in_slot(TileId::new(3), 2).unwrap();

    drag.begin(&store, TileId::new(3));
    assert_eq!(drag.drop_at(&mut store, &surface(), None), Ok(DropOutcome::ReturnedToTray));
    assert!(store.tile(TileId::new(3)).unwrap().in_tray());
    assert_eq!(store.slots()[2], None);
}

/// A tray tile dropped elsewhere in the tray just moves.
#[test]
fn test_tray_tile_moves_within_tray() {
    let mut store = store();
    let mut drag = DragController::new();

    drag.begin(&store, TileId::new(0));
    let drop = Point::new(300.0, 590.0);
    assert_eq!(drag.drop_at(&mut store, &surface(), Some(drop)), Ok(DropOutcome::Moved));
    assert_eq!(store.tile(TileId::new(0)).unwrap().position, drop);
    assert_eq!(store.puzzle_state(), PuzzleState::Initial);
}

/// A tray tile dropped nowhere useful, or without coordinates, stays put.
#[test]
fn test_tray_tile_dropped_outside() {
    let mut store = store();
    let mut drag = DragController::new();
    let before = store.tile(TileId::new(0)).unwrap().clone();

    drag.begin(&store, TileId::new(0));
    assert_eq!(drag.drop_at(&mut store, &surface(), Some(Point::new(5.0, 5.0))), Ok(DropOutcome::Ignored));

    drag.begin(&store, TileId::new(0));
    assert_eq!(drag.drop_at(&mut store, &surface(), None), Ok(DropOutcome::Ignored));

    assert_eq!(store.tile(TileId::new(0)).unwrap(), &before);
}

/// Dragging is refused once the board is judged.
#[test]
fn test_no_drag_after_judgement() {
    let mut store = store();
    for (slot, tile) in [1u32, 0, 2, 3, 4].into_iter().enumerate() {
        store.place_tile_in_slot(TileId::new(tile), slot).unwrap();
    }
    store.advance_clock(300);
    assert_eq!(store.puzzle_state(), PuzzleState::Error);

    let mut drag = DragController::new();
    assert!(!drag.begin(&store, TileId::new(0)));
    assert!(!drag.begin(&store, TileId::new(99)));
}

/// Cancelling forgets the drag and the hover.
#[test]
fn test_cancel() {
    let mut store = store();
    let mut drag = DragController::new();

    drag.begin(&store, TileId::new(0));
    drag.drag_to(&mut store, &surface(), Some(slot_centre(0)));
    drag.cancel(&mut store);

    assert_eq!(drag.dragging(), None);
    assert_eq!(store.hovered_slot(), None);
    assert!(store.slots().iter().all(Option::is_none));
}
