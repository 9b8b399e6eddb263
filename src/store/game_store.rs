//! The game store: single owner of all mutable game state.
//!
//! Frontends hold one `GameStore`, read it to render, and mutate it only
//! through its action methods. Every action runs synchronously; the two
//! delayed effects (auto-validation and the progress fade) are queued and
//! fire from [`GameStore::advance_clock`].

use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::error::GameError;
use super::state::{PuzzleState, Screen};
use super::timers::{Deferred, DeferredQueue};
use crate::core::{GameConfig, GameRng, Point, Tile, TileId};
use crate::layout::{random_tray_position, scatter_layout};
use crate::puzzles::{PuzzleCatalog, PuzzleDefinition};

/// Slot occupancy. Answers up to eight letters stay inline.
pub type Slots = SmallVec<[Option<TileId>; 8]>;

/// What a successful placement changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The tile that was placed.
    pub tile: TileId,
    /// The slot it now occupies.
    pub slot: usize,
    /// Tile previously in `slot`, now back in the tray.
    pub evicted: Option<TileId>,
    /// Slot the placed tile moved out of, if it came from another slot.
    pub vacated: Option<usize>,
    /// Whether every slot is now occupied (validation has been scheduled).
    pub board_full: bool,
}

/// Single state container for the whole game.
///
/// ## Usage
///
/// ```
/// use pajamagrams::core::GameConfig;
/// use pajamagrams::puzzles::{PuzzleCatalog, PuzzleDefinition};
/// use pajamagrams::store::{GameStore, PuzzleState, Screen};
///
/// let catalog = PuzzleCatalog::new(vec![
///     PuzzleDefinition::new("Fruit", "APPLE", ["A", "P", "P", "L", "E"]),
/// ]).unwrap();
/// let mut store = GameStore::new(catalog, GameConfig::default().with_seed(1));
///
/// store.start_game();
/// store.select_progress_item(0).unwrap();
/// assert_eq!(store.screen(), Screen::Puzzle);
/// assert_eq!(store.slots().len(), 5);
/// assert_eq!(store.puzzle_state(), PuzzleState::Initial);
/// ```
#[derive(Clone, Debug)]
pub struct GameStore {
    catalog: PuzzleCatalog,
    config: GameConfig,
    rng: GameRng,

    // === Navigation ===
    screen: Screen,
    level: usize,
    completed: usize,
    just_completed: bool,

    // === Board ===
    puzzle_state: PuzzleState,
    tiles: Vec<Tile>,
    slots: Slots,
    hovered_slot: Option<usize>,
    /// Bumped on every (re)initialization; stale validations compare against it.
    generation: u64,

    // === Deferred work ===
    clock_ms: u64,
    timers: DeferredQueue,
}

impl GameStore {
    /// Create a store on the landing screen.
    ///
    /// Seeds the RNG from `config.seed`, or from OS entropy when unset.
    #[must_use]
    pub fn new(catalog: PuzzleCatalog, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), puzzles = catalog.len(), "Game store created");

        Self {
            catalog,
            config,
            rng,
            screen: Screen::Landing,
            level: 0,
            completed: 0,
            just_completed: false,
            puzzle_state: PuzzleState::Initial,
            tiles: Vec::new(),
            slots: Slots::new(),
            hovered_slot: None,
            generation: 0,
            clock_ms: 0,
            timers: DeferredQueue::new(),
        }
    }

    // === Reads ===

    /// Current screen.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Level index of the current (or last played) puzzle.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Number of puzzles completed so far.
    #[must_use]
    pub fn completed_puzzles(&self) -> usize {
        self.completed
    }

    /// Total number of puzzles.
    #[must_use]
    pub fn puzzle_count(&self) -> usize {
        self.catalog.len()
    }

    /// True right after a puzzle completes, until the fade delay passes.
    #[must_use]
    pub fn just_completed(&self) -> bool {
        self.just_completed
    }

    /// State of the current board.
    #[must_use]
    pub fn puzzle_state(&self) -> PuzzleState {
        self.puzzle_state
    }

    /// All tiles of the current puzzle, in id order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tiles currently resting in the tray.
    pub fn tray_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.in_tray())
    }

    /// Look up a tile.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index()).filter(|t| t.id == id)
    }

    /// Slot occupancy, one entry per answer letter.
    #[must_use]
    pub fn slots(&self) -> &[Option<TileId>] {
        &self.slots
    }

    /// The tile sitting in a slot.
    #[must_use]
    pub fn slot_tile(&self, slot: usize) -> Option<&Tile> {
        self.slots.get(slot).copied().flatten().and_then(|id| self.tile(id))
    }

    /// Slot under the pointer during a drag.
    #[must_use]
    pub fn hovered_slot(&self) -> Option<usize> {
        self.hovered_slot
    }

    /// The definition for the current level.
    #[must_use]
    pub fn current_puzzle(&self) -> Option<&PuzzleDefinition> {
        self.catalog.get(self.level)
    }

    /// The loaded puzzle catalog.
    #[must_use]
    pub fn catalog(&self) -> &PuzzleCatalog {
        &self.catalog
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the layout RNG, for replaying a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Check if every slot holds a tile.
    #[must_use]
    pub fn is_board_full(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(Option::is_some)
    }

    /// Letters currently in the slots, in order. Empty slots are skipped.
    #[must_use]
    pub fn slot_letters(&self) -> String {
        (0..self.slots.len())
            .filter_map(|slot| self.slot_tile(slot))
            .map(|tile| tile.letter.as_str())
            .collect()
    }

    /// Whether tiles may be dragged right now.
    #[must_use]
    pub fn can_drag(&self) -> bool {
        self.screen == Screen::Puzzle && !self.puzzle_state.is_judged()
    }

    /// Current store clock.
    #[must_use]
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Clock time at which the next deferred operation fires, if any.
    #[must_use]
    pub fn next_deferred_ms(&self) -> Option<u64> {
        self.timers.next_due()
    }

    /// Number of deferred operations waiting to fire.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    // === Navigation ===

    /// Leave the landing screen for the progress map.
    pub fn start_game(&mut self) {
        info!("Game started");
        self.screen = Screen::ProgressMap;
    }

    /// Enter a level from the progress map.
    ///
    /// Only the next uncompleted level can be entered.
    pub fn select_progress_item(&mut self, level: usize) -> Result<(), GameError> {
        self.expect_screen(Screen::ProgressMap)?;
        self.go_to_puzzle(level)
    }

    /// Switch to the puzzle screen and set up a level.
    ///
    /// Only the next uncompleted level is playable, so once every puzzle
    /// is done no level can be entered again.
    pub fn go_to_puzzle(&mut self, level: usize) -> Result<(), GameError> {
        if self.catalog.get(level).is_none() {
            return Err(GameError::MissingPuzzle { level });
        }
        if level != self.completed {
            return Err(GameError::LevelLocked {
                level,
                next: self.completed,
            });
        }
        self.screen = Screen::Puzzle;
        self.initialize_puzzle(level)
    }

    /// Scatter fresh tiles for a level and empty every slot.
    ///
    /// Leaves the store untouched if the level does not exist.
    pub fn initialize_puzzle(&mut self, level: usize) -> Result<(), GameError> {
        let puzzle = self
            .catalog
            .get(level)
            .ok_or(GameError::MissingPuzzle { level })?;

        let positions = scatter_layout(puzzle.tiles.len(), &self.config.tray, &mut self.rng);
        let tiles: Vec<Tile> = puzzle
            .tiles
            .iter()
            .zip(positions)
            .enumerate()
            .map(|(i, (letter, spot))| Tile::new(TileId::new(i as u32), letter.as_str(), spot.position, spot.rotation))
            .collect();
        let slot_count = puzzle.answer_len();

        self.level = level;
        self.tiles = tiles;
        self.slots = std::iter::repeat(None).take(slot_count).collect();
        self.puzzle_state = PuzzleState::Initial;
        self.hovered_slot = None;
        self.generation += 1;

        info!(level, tiles = self.tiles.len(), slots = slot_count, "Puzzle initialized");
        Ok(())
    }

    /// Rebuild the current level from scratch.
    pub fn reset_puzzle(&mut self) -> Result<(), GameError> {
        debug!(level = self.level, state = %self.puzzle_state, "Resetting puzzle");
        self.initialize_puzzle(self.level)
    }

    /// Record a solved puzzle and leave the board.
    ///
    /// Goes to the finale after the last puzzle, otherwise back to the
    /// progress map. Returns the screen now showing. Only solving the next
    /// uncompleted level advances the counter, so it never exceeds the
    /// puzzle count.
    pub fn complete_puzzle(&mut self) -> Result<Screen, GameError> {
        self.expect_screen(Screen::Puzzle)?;
        if self.puzzle_state != PuzzleState::Success {
            return Err(GameError::NotSolved {
                state: self.puzzle_state,
            });
        }

        if self.level == self.completed {
            self.completed += 1;
            self.just_completed = true;
            self.timers.schedule(
                self.clock_ms + self.config.completion_fade_ms,
                Deferred::ClearJustCompleted,
            );
        } else {
            debug!(level = self.level, completed = self.completed, "Replayed level; progress unchanged");
        }
        self.screen = if self.completed >= self.catalog.len() {
            Screen::Finale
        } else {
            Screen::ProgressMap
        };

        info!(completed = self.completed, total = self.catalog.len(), screen = %self.screen, "Puzzle completed");
        Ok(self.screen)
    }

    /// Drop the just-completed flag.
    pub fn clear_just_completed(&mut self) {
        self.just_completed = false;
    }

    // === Board actions ===

    /// Put a tile into a slot.
    ///
    /// A different tile already in the slot is evicted to a random tray
    /// spot. If the placed tile came from another slot, that slot empties.
    /// Filling the last slot schedules validation.
    pub fn place_tile_in_slot(&mut self, tile: TileId, slot: usize) -> Result<Placement, GameError> {
        self.expect_unlocked()?;
        if slot >= self.slots.len() {
            return Err(GameError::SlotOutOfRange {
                slot,
                len: self.slots.len(),
            });
        }
        let index = self.tile_index(tile)?;

        let evicted = self.slots[slot].filter(|&occupant| occupant != tile);
        if let Some(occupant) = evicted {
            let position = random_tray_position(&self.config.tray, &mut self.rng);
            let rotation = self.rng.rotation(self.config.eviction_rotation_spread);
            let evicted_tile = &mut self.tiles[occupant.index()];
            evicted_tile.in_slot = None;
            evicted_tile.position = position;
            evicted_tile.rotation = rotation;
        }

        let vacated = self.tiles[index].in_slot.filter(|&previous| previous != slot);
        if let Some(previous) = vacated {
            self.slots[previous] = None;
        }

        self.slots[slot] = Some(tile);
        self.tiles[index].in_slot = Some(slot);
        self.puzzle_state = PuzzleState::Playing;

        let board_full = self.is_board_full();
        if board_full {
            // A refilled board restarts the full delay.
            self.timers
                .cancel(|action| matches!(action, Deferred::ValidateAnswer { .. }));
            self.timers.schedule(
                self.clock_ms + self.config.validation_delay_ms,
                Deferred::ValidateAnswer {
                    generation: self.generation,
                },
            );
        }

        debug!(%tile, slot, evicted = ?evicted, vacated = ?vacated, board_full, "Placed tile");
        Ok(Placement {
            tile,
            slot,
            evicted,
            vacated,
            board_full,
        })
    }

    /// Take a tile out of its slot and put it back in the tray.
    ///
    /// Lands at `drop_position` when given, otherwise at a random tray spot.
    /// Returns `false` (and changes nothing) if the tile was not slotted.
    pub fn return_tile_to_tray(&mut self, tile: TileId, drop_position: Option<Point>) -> Result<bool, GameError> {
        self.expect_unlocked()?;
        let index = self.tile_index(tile)?;
        let Some(slot) = self.tiles[index].in_slot else {
            return Ok(false);
        };

        let position = match drop_position {
            Some(position) => position,
            None => random_tray_position(&self.config.tray, &mut self.rng),
        };
        let rotation = self.rng.rotation(self.config.tray_rotation_spread);

        let returned = &mut self.tiles[index];
        returned.in_slot = None;
        returned.position = position;
        returned.rotation = rotation;
        self.slots[slot] = None;
        self.puzzle_state = PuzzleState::Playing;

        debug!(%tile, slot, "Returned tile to tray");
        Ok(true)
    }

    /// Move a tray tile to a new resting position, with a fresh rotation.
    ///
    /// Returns `false` (and changes nothing) for slotted tiles.
    pub fn update_tile_position(&mut self, tile: TileId, position: Point) -> Result<bool, GameError> {
        let index = self.tile_index(tile)?;
        if !self.tiles[index].in_tray() {
            return Ok(false);
        }

        let rotation = self.rng.rotation(self.config.tray_rotation_spread);
        let moved = &mut self.tiles[index];
        moved.position = position;
        moved.rotation = rotation;
        Ok(true)
    }

    /// Record which slot the pointer is over. Returns whether it changed.
    pub fn set_hovered_slot(&mut self, slot: Option<usize>) -> bool {
        if self.hovered_slot == slot {
            return false;
        }
        self.hovered_slot = slot;
        true
    }

    /// Judge a full board: `Success` if the slot letters spell the answer.
    ///
    /// Returns whether the answer was correct. Partially filled boards are
    /// never judged.
    pub fn validate_answer(&mut self) -> Result<bool, GameError> {
        let puzzle = self
            .catalog
            .get(self.level)
            .ok_or(GameError::MissingPuzzle { level: self.level })?;
        if !self.is_board_full() {
            return Err(GameError::BoardIncomplete {
                filled: self.slots.iter().filter(|s| s.is_some()).count(),
                len: self.slots.len(),
            });
        }

        let guess = self.slot_letters();
        let correct = puzzle.matches(&guess);
        self.puzzle_state = if correct {
            PuzzleState::Success
        } else {
            PuzzleState::Error
        };

        info!(level = self.level, %guess, correct, "Answer validated");
        Ok(correct)
    }

    // === Time ===

    /// Move the store clock forward and fire everything now due.
    ///
    /// The clock never runs backwards. Returns the number of deferred
    /// operations that fired.
    pub fn advance_clock(&mut self, now_ms: u64) -> usize {
        self.clock_ms = self.clock_ms.max(now_ms);
        let due = self.timers.take_due(self.clock_ms);
        let fired = due.len();

        for action in due {
            match action {
                Deferred::ValidateAnswer { generation } => self.run_deferred_validation(generation),
                Deferred::ClearJustCompleted => self.clear_just_completed(),
            }
        }

        fired
    }

    /// Cancel every pending deferred operation.
    pub fn teardown(&mut self) {
        debug!(pending = self.timers.len(), "Cancelling deferred operations");
        self.timers.clear();
    }

    // === Helpers ===

    fn run_deferred_validation(&mut self, generation: u64) {
        if generation != self.generation || self.puzzle_state != PuzzleState::Playing || !self.is_board_full() {
            debug!(generation, current = self.generation, "Skipping stale validation");
            return;
        }
        if let Err(e) = self.validate_answer() {
            warn!(error = %e, "Deferred validation failed");
        }
    }

    fn tile_index(&self, tile: TileId) -> Result<usize, GameError> {
        self.tile(tile)
            .map(|_| tile.index())
            .ok_or(GameError::UnknownTile { tile })
    }

    fn expect_screen(&self, expected: Screen) -> Result<(), GameError> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(GameError::WrongScreen {
                expected,
                actual: self.screen,
            })
        }
    }

    fn expect_unlocked(&self) -> Result<(), GameError> {
        if self.puzzle_state.is_judged() {
            Err(GameError::BoardLocked {
                state: self.puzzle_state,
            })
        } else {
            Ok(())
        }
    }
}
