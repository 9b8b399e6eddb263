//! Puzzle dataset loading errors.

use derive_more::{Display, Error, From};

/// Failure to load a puzzle dataset.
#[derive(Debug, Display, Error, From)]
pub enum CatalogError {
    /// The JSON could not be parsed.
    #[display("failed to parse puzzle dataset: {_0}")]
    #[from]
    Parse(serde_json::Error),

    /// A puzzle exists but cannot be played.
    #[display("puzzle {index} is invalid: {reason}")]
    InvalidPuzzle { index: usize, reason: String },

    /// The dataset has no puzzles at all.
    #[display("puzzle dataset is empty")]
    Empty,
}
