//! Errors returned by store actions.
//!
//! None of these are fatal. Frontends log them and carry on; the game
//! itself only ever shows the puzzle's own `Error` state.

use derive_more::{Display, Error};

use super::state::{PuzzleState, Screen};
use crate::core::TileId;

/// A store action that could not be applied.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// No tile with this id exists in the current puzzle.
    #[display("unknown tile {tile}")]
    UnknownTile { tile: TileId },

    /// Slot index past the end of the answer.
    #[display("slot {slot} out of range (answer has {len} slots)")]
    SlotOutOfRange { slot: usize, len: usize },

    /// No puzzle at this level.
    #[display("no puzzle at level {level}")]
    MissingPuzzle { level: usize },

    /// Tiles cannot move once the board is judged.
    #[display("board is locked in state {state}")]
    BoardLocked { state: PuzzleState },

    /// Validation requires every slot to be occupied.
    #[display("board incomplete: {filled} of {len} slots filled")]
    BoardIncomplete { filled: usize, len: usize },

    /// Completion requires a solved puzzle.
    #[display("puzzle not solved (state {state})")]
    NotSolved { state: PuzzleState },

    /// Action is only valid on another screen.
    #[display("expected screen {expected}, on {actual}")]
    WrongScreen { expected: Screen, actual: Screen },

    /// Only the next uncompleted level can be entered from the progress map.
    #[display("level {level} is locked (next playable is {next})")]
    LevelLocked { level: usize, next: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::UnknownTile { tile: TileId::new(4) };
        assert_eq!(err.to_string(), "unknown tile tile-4");

        let err = GameError::BoardLocked { state: PuzzleState::Success };
        assert_eq!(err.to_string(), "board is locked in state success");

        let err = GameError::WrongScreen {
            expected: Screen::Puzzle,
            actual: Screen::ProgressMap,
        };
        assert_eq!(err.to_string(), "expected screen puzzle, on progress map");
    }
}
