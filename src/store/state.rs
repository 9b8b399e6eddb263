//! Screen and puzzle state enums.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Which full-viewport screen is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Title screen; any tap starts the game.
    #[default]
    #[display("landing")]
    Landing,
    /// Map of all puzzles, completed ones shown as gifts.
    #[display("progress map")]
    ProgressMap,
    /// An anagram board.
    #[display("puzzle")]
    Puzzle,
    /// Shown once every puzzle is complete.
    #[display("finale")]
    Finale,
}

/// Lifecycle of a single puzzle board.
///
/// ```text
/// Initial --place/return--> Playing --all slots filled + delay--> Success | Error
///    ^                                                              |       |
///    +------------------------- reset -------------------------------+-------+
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleState {
    /// Freshly scattered tiles, no interaction yet.
    #[default]
    #[display("initial")]
    Initial,
    /// The player has moved at least one tile.
    #[display("playing")]
    Playing,
    /// Every slot filled with the wrong word.
    #[display("error")]
    Error,
    /// Every slot filled with the answer.
    #[display("success")]
    Success,
}

impl PuzzleState {
    /// Check if the board has been judged (success or error).
    ///
    /// Tiles cannot be dragged in a judged state.
    #[must_use]
    pub const fn is_judged(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Screen::default(), Screen::Landing);
        assert_eq!(PuzzleState::default(), PuzzleState::Initial);
    }

    #[test]
    fn test_is_judged() {
        assert!(!PuzzleState::Initial.is_judged());
        assert!(!PuzzleState::Playing.is_judged());
        assert!(PuzzleState::Error.is_judged());
        assert!(PuzzleState::Success.is_judged());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Screen::ProgressMap).unwrap();
        assert_eq!(json, "\"progress_map\"");

        let state: PuzzleState = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(state, PuzzleState::Success);
    }
}
