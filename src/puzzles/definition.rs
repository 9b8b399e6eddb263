//! Puzzle definitions.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A single anagram puzzle: a clue, its answer, and the letters to build it from.
///
/// `tiles` may hold more letters than the answer needs; the extras are decoys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    pub clue: String,
    pub answer: String,
    pub tiles: Vec<String>,
}

impl PuzzleDefinition {
    /// Create a new puzzle definition.
    pub fn new<I, S>(clue: impl Into<String>, answer: impl Into<String>, tiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            clue: clue.into(),
            answer: answer.into(),
            tiles: tiles.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of slots on the board: the answer's length in characters.
    #[must_use]
    pub fn answer_len(&self) -> usize {
        self.answer.chars().count()
    }

    /// Case-insensitive comparison of a guess against the answer.
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        guess.to_uppercase() == self.answer.to_uppercase()
    }

    /// Check that the puzzle can be played.
    ///
    /// Returns a human-readable reason on failure.
    pub fn check(&self) -> Result<(), String> {
        if self.answer.is_empty() {
            return Err("answer is empty".to_string());
        }
        if self.tiles.len() < self.answer_len() {
            return Err(format!(
                "{} tiles cannot fill {} slots",
                self.tiles.len(),
                self.answer_len()
            ));
        }
        if let Some(tile) = self.tiles.iter().find(|t| t.chars().count() != 1) {
            return Err(format!("tile {tile:?} is not a single letter"));
        }

        let mut available: FxHashMap<String, usize> = FxHashMap::default();
        for tile in &self.tiles {
            *available.entry(tile.to_uppercase()).or_default() += 1;
        }
        for letter in self.answer.chars() {
            let key = letter.to_uppercase().to_string();
            match available.get_mut(&key) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return Err(format!("tiles cannot spell {:?}: missing {letter:?}", self.answer)),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> PuzzleDefinition {
        PuzzleDefinition::new("Fruit", "APPLE", ["A", "P", "P", "L", "E"])
    }

    #[test]
    fn test_answer_len() {
        assert_eq!(apple().answer_len(), 5);
    }

    #[test]
    fn test_matches_case_insensitive() {
        let puzzle = apple();
        assert!(puzzle.matches("APPLE"));
        assert!(puzzle.matches("apple"));
        assert!(puzzle.matches("ApPlE"));
        assert!(!puzzle.matches("PAPLE"));
        assert!(!puzzle.matches("APPL"));
    }

    #[test]
    fn test_check_valid() {
        assert_eq!(apple().check(), Ok(()));

        let with_decoy = PuzzleDefinition::new("Sweet layers", "cake", ["K", "E", "A", "C", "R"]);
        assert_eq!(with_decoy.check(), Ok(()));
    }

    #[test]
    fn test_check_too_few_tiles() {
        let puzzle = PuzzleDefinition::new("Fruit", "APPLE", ["A", "P", "L", "E"]);
        assert!(puzzle.check().unwrap_err().contains("cannot fill"));
    }

    #[test]
    fn test_check_unspellable() {
        let puzzle = PuzzleDefinition::new("Fruit", "APPLE", ["A", "P", "X", "L", "E"]);
        assert!(puzzle.check().unwrap_err().contains("missing 'P'"));
    }

    #[test]
    fn test_check_empty_answer() {
        let puzzle = PuzzleDefinition::new("Nothing", "", ["A"]);
        assert_eq!(puzzle.check(), Err("answer is empty".to_string()));
    }

    #[test]
    fn test_check_multi_letter_tile() {
        let puzzle = PuzzleDefinition::new("Fruit", "APPLE", ["AP", "P", "L", "E", "X"]);
        assert!(puzzle.check().unwrap_err().contains("not a single letter"));
    }
}
