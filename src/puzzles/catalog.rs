//! The ordered, read-only list of puzzles.
//!
//! Datasets are JSON documents of the form
//!
//! ```json
//! { "puzzles": [ { "clue": "Fruit", "answer": "APPLE", "tiles": ["A", "P", "P", "L", "E"] } ] }
//! ```
//!
//! Level `n` is the `n`th entry.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::definition::PuzzleDefinition;
use super::error::CatalogError;

const BUILTIN_DATASET: &str = include_str!("../../data/puzzles.json");

/// Immutable puzzle dataset, indexed by level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleCatalog {
    puzzles: Vec<PuzzleDefinition>,
}

impl PuzzleCatalog {
    /// Build a catalog from definitions, checking each one.
    pub fn new(puzzles: Vec<PuzzleDefinition>) -> Result<Self, CatalogError> {
        if puzzles.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, puzzle) in puzzles.iter().enumerate() {
            puzzle
                .check()
                .map_err(|reason| CatalogError::InvalidPuzzle { index, reason })?;
        }
        Ok(Self { puzzles })
    }

    /// Parse and check a JSON dataset.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: Self = serde_json::from_str(json)?;
        let catalog = Self::new(raw.puzzles)?;
        debug!(puzzles = catalog.len(), "Loaded puzzle dataset");
        Ok(catalog)
    }

    /// The dataset compiled into the binary.
    ///
    /// # Panics
    ///
    /// Panics if the embedded dataset is malformed.
    #[must_use]
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_DATASET) {
            Ok(catalog) => catalog,
            Err(e) => panic!("embedded puzzle dataset is invalid: {e}"),
        }
    }

    /// Get the puzzle for a level.
    #[must_use]
    pub fn get(&self, level: usize) -> Option<&PuzzleDefinition> {
        self.puzzles.get(level)
    }

    /// Number of puzzles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Always false for a checked catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Iterate over puzzles in level order.
    pub fn iter(&self) -> impl Iterator<Item = &PuzzleDefinition> {
        self.puzzles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_loads() {
        let catalog = PuzzleCatalog::builtin();
        assert_eq!(catalog.len(), 6);
        assert!(!catalog.is_empty());
        for puzzle in catalog.iter() {
            assert_eq!(puzzle.check(), Ok(()));
        }
    }

    #[test]
    fn test_builtin_has_a_puzzle_beyond_the_presets() {
        // At least one puzzle exercises random scatter positions.
        assert!(PuzzleCatalog::builtin().iter().any(|p| p.tiles.len() > 8));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"puzzles": [{"clue": "Fruit", "answer": "APPLE", "tiles": ["A", "P", "P", "L", "E"]}]}"#;
        let catalog = PuzzleCatalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().answer, "APPLE");
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn test_from_json_rejects_bad_json() {
        let err = PuzzleCatalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_from_json_rejects_empty() {
        let err = PuzzleCatalog::from_json(r#"{"puzzles": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn test_from_json_rejects_invalid_puzzle() {
        let json = r#"{"puzzles": [
            {"clue": "ok", "answer": "AB", "tiles": ["B", "A"]},
            {"clue": "bad", "answer": "ABC", "tiles": ["A", "B"]}
        ]}"#;
        let err = PuzzleCatalog::from_json(json).unwrap_err();

        match err {
            CatalogError::InvalidPuzzle { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other}"),
        }
    }
}
