//! Terminal app state: the store plus everything the frontend tracks on
//! top of it (drag in flight, terminal size, finale confetti).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, warn};

use pajamagrams::{
    DragController, DropOutcome, GameError, GameRng, GameStore, Point, PuzzleState, Screen, TileId,
};

use super::layout::{cell_point, rect_contains, DragSurface, ProgressLayout, PuzzleLayout, DESIGN_WIDTH};

const CONFETTI_PIECES: usize = 100;

/// A tile held by the mouse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grab {
    pub tile: TileId,
    /// Pointer minus the tile's top-left corner at grab time.
    pub offset: Point,
    /// Latest pointer position.
    pub pointer: Point,
}

/// One falling confetti piece on the finale screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiPiece {
    /// Horizontal position in design space.
    pub x: f32,
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub color: usize,
    pub glyph: char,
}

pub struct App {
    pub store: GameStore,
    drag: DragController,
    grab: Option<Grab>,
    area: Rect,
    now_ms: u64,
    finale_started_ms: Option<u64>,
    confetti: Vec<ConfettiPiece>,
    quit: bool,
}

impl App {
    pub fn new(store: GameStore) -> Self {
        Self {
            store,
            drag: DragController::new(),
            grab: None,
            area: Rect::default(),
            now_ms: 0,
            finale_started_ms: None,
            confetti: Vec::new(),
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn grab(&self) -> Option<Grab> {
        self.grab
    }

    pub fn confetti(&self) -> &[ConfettiPiece] {
        &self.confetti
    }

    /// Milliseconds since the finale appeared.
    pub fn finale_elapsed_ms(&self) -> u64 {
        self.finale_started_ms.map_or(0, |start| self.now_ms.saturating_sub(start))
    }

    /// Record the terminal area the next frame renders into.
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn puzzle_layout(&self) -> PuzzleLayout {
        PuzzleLayout::new(self.area, self.store.slots().len())
    }

    pub fn progress_layout(&self) -> ProgressLayout {
        ProgressLayout::new(self.area, self.store.puzzle_count())
    }

    /// Advance time: fire due store callbacks and start the finale effects.
    pub fn tick(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        let fired = self.store.advance_clock(now_ms);
        if fired > 0 {
            debug!(fired, state = %self.store.puzzle_state(), "Deferred operations fired");
        }

        if self.grab.is_some() && !self.store.can_drag() {
            // The board was judged mid-drag.
            self.drag.cancel(&mut self.store);
            self.grab = None;
        }

        if self.store.screen() == Screen::Finale && self.finale_started_ms.is_none() {
            self.finale_started_ms = Some(now_ms);
            self.confetti = Self::make_confetti(self.store.seed());
        }
    }

    /// Stop pending timers before the terminal goes away.
    pub fn shutdown(&mut self) {
        self.store.teardown();
    }

    fn make_confetti(seed: u64) -> Vec<ConfettiPiece> {
        let mut rng = GameRng::new(seed).for_context("confetti");
        let glyphs = ['*', '+', 'o', '.', '~'];
        (0..CONFETTI_PIECES)
            .map(|_| ConfettiPiece {
                x: rng.gen_range_f32(0.0..DESIGN_WIDTH),
                delay_ms: rng.gen_range_usize(0..2000) as u64,
                duration_ms: rng.gen_range_usize(3000..5000) as u64,
                color: rng.gen_range_usize(0..super::theme::CONFETTI.len()),
                glyph: rng.choose(&glyphs).copied().unwrap_or('*'),
            })
            .collect()
    }

    // === Keyboard ===

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }
        match key.code {
            KeyCode::Esc if self.grab.is_some() => {
                self.drag.cancel(&mut self.store);
                self.grab = None;
                return;
            }
            KeyCode::Esc => {
                self.quit = true;
                return;
            }
            _ => {}
        }

        match self.store.screen() {
            Screen::Landing if key.code == KeyCode::Char('q') => self.quit = true,
            Screen::Landing => self.store.start_game(),
            Screen::ProgressMap => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let next = self.store.completed_puzzles();
                    let result = self.store.select_progress_item(next);
                    self.report(result);
                }
                KeyCode::Char('q') => self.quit = true,
                _ => {}
            },
            Screen::Puzzle => self.handle_puzzle_key(key.code),
            Screen::Finale => {
                if key.code == KeyCode::Char('q') {
                    self.quit = true;
                }
            }
        }
    }

    fn handle_puzzle_key(&mut self, code: KeyCode) {
        match (code, self.store.puzzle_state()) {
            (KeyCode::Enter | KeyCode::Char(' '), PuzzleState::Success) => {
                let result = self.store.complete_puzzle().map(|_| ());
                self.report(result);
            }
            (KeyCode::Enter | KeyCode::Char(' '), PuzzleState::Error) => {
                let result = self.store.reset_puzzle();
                self.report(result);
            }
            (KeyCode::Backspace, state) if !state.is_judged() => self.unplace_last(),
            (KeyCode::Char(c), state) if !state.is_judged() && c.is_alphabetic() => self.type_letter(c),
            _ => {}
        }
    }

    /// Move the first tray tile showing `letter` into the first empty slot.
    fn type_letter(&mut self, letter: char) {
        let Some(slot) = self.store.slots().iter().position(Option::is_none) else {
            return;
        };
        let wanted = letter.to_uppercase().to_string();
        let tile = self
            .store
            .tray_tiles()
            .find(|tile| tile.letter.to_uppercase() == wanted)
            .map(|tile| tile.id);

        if let Some(tile) = tile {
            let result = self.store.place_tile_in_slot(tile, slot).map(|_| ());
            self.report(result);
        }
    }

    /// Return the tile in the last filled slot to the tray.
    fn unplace_last(&mut self) {
        let last = self.store.slots().iter().rev().find_map(|slot| *slot);
        if let Some(tile) = last {
            let result = self.store.return_tile_to_tray(tile, None).map(|_| ());
            self.report(result);
        }
    }

    // === Mouse ===

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let point = cell_point(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.pointer_down(point),
            MouseEventKind::Drag(MouseButton::Left) => self.pointer_move(point),
            MouseEventKind::Up(MouseButton::Left) => self.pointer_up(Some(point)),
            _ => {}
        }
    }

    fn pointer_down(&mut self, point: Point) {
        match self.store.screen() {
            Screen::Landing => self.store.start_game(),
            Screen::ProgressMap => {
                if let Some(index) = self.progress_layout().item_at(point) {
                    let result = self.store.select_progress_item(index);
                    self.report(result);
                }
            }
            Screen::Puzzle => self.puzzle_pointer_down(point),
            Screen::Finale => {}
        }
    }

    fn puzzle_pointer_down(&mut self, point: Point) {
        let layout = self.puzzle_layout();

        if self.store.puzzle_state().is_judged() {
            if rect_contains(layout.button, point) {
                let result = match self.store.puzzle_state() {
                    PuzzleState::Success => self.store.complete_puzzle().map(|_| ()),
                    _ => self.store.reset_puzzle(),
                };
                self.report(result);
            }
            return;
        }

        let Some(tile) = layout.tile_at(&self.store, point) else {
            return;
        };
        let Some(rect) = self.store.tile(tile).map(|t| layout.tile_rect(t)) else {
            return;
        };
        if self.drag.begin(&self.store, tile) {
            self.grab = Some(Grab {
                tile,
                offset: Point::new(point.x - f32::from(rect.x), point.y - f32::from(rect.y)),
                pointer: point,
            });
        }
    }

    fn pointer_move(&mut self, point: Point) {
        let Some(grab) = self.grab.as_mut() else {
            return;
        };
        grab.pointer = point;
        let offset = grab.offset;

        let layout = self.puzzle_layout();
        let surface = DragSurface {
            layout: &layout,
            grab_offset: offset,
        };
        self.drag.drag_to(&mut self.store, &surface, Some(point));
    }

    fn pointer_up(&mut self, point: Option<Point>) {
        let Some(grab) = self.grab.take() else {
            return;
        };

        let layout = self.puzzle_layout();
        let surface = DragSurface {
            layout: &layout,
            grab_offset: grab.offset,
        };
        match self.drag.drop_at(&mut self.store, &surface, point) {
            Ok(DropOutcome::Placed(placement)) => {
                debug!(tile = %placement.tile, slot = placement.slot, full = placement.board_full, "Dropped into slot");
            }
            Ok(outcome) => debug!(tile = %grab.tile, ?outcome, "Dropped"),
            Err(e) => warn!(error = %e, "Drop rejected"),
        }
    }

    fn report(&self, result: Result<(), GameError>) {
        if let Err(e) = result {
            warn!(error = %e, screen = %self.store.screen(), "Action rejected");
        }
    }
}
