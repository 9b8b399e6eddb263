//! Screen geometry in terminal cells.
//!
//! The store works on a 430 x 932 design canvas. `Viewport` scales that
//! canvas onto the terminal, and the per-screen layouts place slots,
//! buttons and progress items directly in cells. Pointer points are cell
//! centres (`column + 0.5`, `row + 0.5`).

use ratatui::layout::Rect;

use pajamagrams::core::Rect as HitRect;
use pajamagrams::{find_slot_at_point, DropSurface, GameStore, Point, Tile, TileId};

pub const DESIGN_WIDTH: f32 = 430.0;
pub const DESIGN_HEIGHT: f32 = 932.0;

pub const TILE_WIDTH: u16 = 5;
pub const TILE_HEIGHT: u16 = 3;
const SLOT_GAP: u16 = 1;

const ITEM_WIDTH: u16 = 20;
const ITEM_HEIGHT: u16 = 3;
const ITEM_COLUMNS: u16 = 2;

/// Mapping between design space and terminal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub area: Rect,
}

impl Viewport {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// Terminal row at a fraction of the design height.
    pub fn row_at(&self, design_y: f32) -> u16 {
        self.area.y + (design_y / DESIGN_HEIGHT * f32::from(self.area.height)).round() as u16
    }

    /// Top-left cell for a design-space point, kept inside the area so a
    /// whole tile fits.
    pub fn to_cell(&self, point: Point) -> (u16, u16) {
        let max_col = self.area.right().saturating_sub(TILE_WIDTH).max(self.area.x);
        let max_row = self.area.bottom().saturating_sub(TILE_HEIGHT).max(self.area.y);
        let col = f32::from(self.area.x) + point.x / DESIGN_WIDTH * f32::from(self.area.width);
        let row = f32::from(self.area.y) + point.y / DESIGN_HEIGHT * f32::from(self.area.height);
        (
            (col.round().max(0.0) as u16).clamp(self.area.x, max_col),
            (row.round().max(0.0) as u16).clamp(self.area.y, max_row),
        )
    }

    /// Design-space point for a cell-space point, clamped to the canvas.
    pub fn to_design(&self, point: Point) -> Point {
        let width = f32::from(self.area.width.max(1));
        let height = f32::from(self.area.height.max(1));
        Point::new(
            ((point.x - f32::from(self.area.x)) / width * DESIGN_WIDTH).clamp(0.0, DESIGN_WIDTH),
            ((point.y - f32::from(self.area.y)) / height * DESIGN_HEIGHT).clamp(0.0, DESIGN_HEIGHT),
        )
    }
}

/// Cell-space point for a terminal cell.
pub fn cell_point(column: u16, row: u16) -> Point {
    Point::new(f32::from(column) + 0.5, f32::from(row) + 0.5)
}

/// Check whether a cell-space point lands in a terminal rect.
pub fn rect_contains(rect: Rect, point: Point) -> bool {
    to_hit_rect(rect).contains(point)
}

fn to_hit_rect(rect: Rect) -> HitRect {
    HitRect::new(
        f32::from(rect.x),
        f32::from(rect.y),
        f32::from(rect.width),
        f32::from(rect.height),
    )
}

/// Rect of `width` x `height` centred horizontally in `area` at `row`.
fn centered(area: Rect, width: u16, height: u16, row: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, row, width, height)
}

/// Layout of the puzzle screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleLayout {
    pub viewport: Viewport,
    pub clue: Rect,
    pub slots: Vec<Rect>,
    /// Region where a drop counts as "in the tray".
    pub tray: Rect,
    pub button: Rect,
}

impl PuzzleLayout {
    pub fn new(area: Rect, slot_count: usize) -> Self {
        let viewport = Viewport::new(area);
        let clue = Rect::new(area.x, viewport.row_at(150.0), area.width, 2);

        let slot_count = slot_count as u16;
        let row_width = slot_count * TILE_WIDTH + slot_count.saturating_sub(1) * SLOT_GAP;
        let slot_row = centered(area, row_width, TILE_HEIGHT, viewport.row_at(250.0));
        let slots = (0..slot_count)
            .map(|i| Rect::new(slot_row.x + i * (TILE_WIDTH + SLOT_GAP), slot_row.y, TILE_WIDTH, TILE_HEIGHT))
            .collect();

        let button = centered(area, 18, 3, viewport.row_at(780.0));
        let tray_top = slot_row.bottom() + 1;
        let tray = Rect::new(
            area.x,
            tray_top,
            area.width,
            button.y.saturating_sub(tray_top),
        );

        Self {
            viewport,
            clue,
            slots,
            tray,
            button,
        }
    }

    /// Where a tile is drawn when it is not being dragged.
    pub fn tile_rect(&self, tile: &Tile) -> Rect {
        if let Some(slot) = tile.in_slot.and_then(|s| self.slots.get(s)) {
            return *slot;
        }
        let (col, row) = self.viewport.to_cell(tile.position);
        Rect::new(col, row, TILE_WIDTH, TILE_HEIGHT)
    }

    /// Topmost tile under a point. Tray tiles are drawn in id order, so
    /// later ids sit on top; tray tiles are hidden once the board is judged.
    pub fn tile_at(&self, store: &GameStore, point: Point) -> Option<TileId> {
        let slotted = (0..self.slots.len())
            .filter_map(|slot| store.slot_tile(slot))
            .find(|tile| rect_contains(self.tile_rect(tile), point));
        if let Some(tile) = slotted {
            return Some(tile.id);
        }
        if store.puzzle_state().is_judged() {
            return None;
        }
        store
            .tray_tiles()
            .filter(|tile| rect_contains(self.tile_rect(tile), point))
            .last()
            .map(|tile| tile.id)
    }
}

/// A puzzle layout seen through an in-flight drag.
///
/// Slot hit-testing uses the raw pointer; tray drops place the tile's
/// corner where the pointer was relative to the tile when it was grabbed.
pub struct DragSurface<'a> {
    pub layout: &'a PuzzleLayout,
    /// Pointer position minus the grabbed tile's top-left corner.
    pub grab_offset: Point,
}

impl DropSurface for DragSurface<'_> {
    fn slot_at(&self, point: Point) -> Option<usize> {
        let bounds: Vec<HitRect> = self.layout.slots.iter().copied().map(to_hit_rect).collect();
        find_slot_at_point(&bounds, point)
    }

    fn tray_position(&self, point: Point) -> Option<Point> {
        if !rect_contains(self.layout.tray, point) {
            return None;
        }
        let corner = point.offset(Point::new(-self.grab_offset.x, -self.grab_offset.y));
        let design = self.layout.viewport.to_design(corner);
        // Keep the whole tile on the canvas.
        Some(Point::new(
            design.x.min(DESIGN_WIDTH - 53.0),
            design.y.min(DESIGN_HEIGHT - 53.0),
        ))
    }
}

/// Layout of the progress map and finale gift grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressLayout {
    pub title: Rect,
    pub items: Vec<Rect>,
}

impl ProgressLayout {
    pub fn new(area: Rect, count: usize) -> Self {
        let viewport = Viewport::new(area);
        let title = Rect::new(area.x, viewport.row_at(123.0), area.width, 2);

        let grid_width = ITEM_COLUMNS * ITEM_WIDTH + (ITEM_COLUMNS - 1) * 2;
        let grid = centered(area, grid_width, 0, title.bottom() + 1);
        let items = (0..count as u16)
            .map(|i| {
                let col = i % ITEM_COLUMNS;
                let row = i / ITEM_COLUMNS;
                Rect::new(
                    grid.x + col * (ITEM_WIDTH + 2),
                    grid.y + row * (ITEM_HEIGHT + 1),
                    ITEM_WIDTH,
                    ITEM_HEIGHT,
                )
            })
            .collect();

        Self { title, items }
    }

    /// Index of the item under a point.
    pub fn item_at(&self, point: Point) -> Option<usize> {
        self.items.iter().position(|rect| rect_contains(*rect, point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(0, 0, 86, 40)
    }

    #[test]
    fn test_viewport_round_trip_is_close() {
        let viewport = Viewport::new(area());
        let (col, row) = viewport.to_cell(Point::new(215.0, 466.0));
        assert_eq!((col, row), (43, 20));

        let back = viewport.to_design(Point::new(f32::from(col), f32::from(row)));
        assert!((back.x - 215.0).abs() < 1.0);
        assert!((back.y - 466.0).abs() < 1.0);
    }

    #[test]
    fn test_to_cell_keeps_tile_inside() {
        let viewport = Viewport::new(area());
        let (col, row) = viewport.to_cell(Point::new(430.0, 932.0));
        assert_eq!(col, 86 - TILE_WIDTH);
        assert_eq!(row, 40 - TILE_HEIGHT);
    }

    #[test]
    fn test_slots_are_centred_and_spaced() {
        let layout = PuzzleLayout::new(area(), 4);
        assert_eq!(layout.slots.len(), 4);

        let first = layout.slots[0];
        let last = layout.slots[3];
        assert_eq!(last.x - first.x, 3 * (TILE_WIDTH + SLOT_GAP));
        let left_margin = first.x;
        let right_margin = 86 - last.right();
        assert!(left_margin.abs_diff(right_margin) <= 1);
    }

    #[test]
    fn test_tray_sits_between_slots_and_button() {
        let layout = PuzzleLayout::new(area(), 5);
        assert!(layout.tray.y > layout.slots[0].bottom());
        assert!(layout.tray.bottom() <= layout.button.y);
    }

    #[test]
    fn test_drag_surface_hits_slots_and_tray() {
        let layout = PuzzleLayout::new(area(), 3);
        let surface = DragSurface {
            layout: &layout,
            grab_offset: Point::new(2.5, 1.5),
        };

        let slot = layout.slots[1];
        assert_eq!(surface.slot_at(cell_point(slot.x, slot.y)), Some(1));
        assert_eq!(surface.slot_at(cell_point(0, 0)), None);

        let inside = cell_point(40, layout.tray.y + 2);
        let dropped = surface.tray_position(inside).unwrap();
        assert!(dropped.x >= 0.0 && dropped.x <= DESIGN_WIDTH - 53.0);
        assert!(surface.tray_position(cell_point(40, 0)).is_none());
    }

    #[test]
    fn test_progress_items_grid() {
        let layout = ProgressLayout::new(area(), 6);
        assert_eq!(layout.items.len(), 6);
        assert_eq!(layout.items[0].y, layout.items[1].y);
        assert!(layout.items[2].y > layout.items[0].y);

        let third = layout.items[2];
        assert_eq!(layout.item_at(cell_point(third.x + 1, third.y + 1)), Some(2));
        assert_eq!(layout.item_at(cell_point(0, 0)), None);
    }
}
