//! Static puzzle data: definitions and the ordered catalog.
//!
//! The catalog is loaded once at startup and never mutated. The store
//! looks puzzles up by level index.

mod catalog;
mod definition;
mod error;

pub use catalog::PuzzleCatalog;
pub use definition::PuzzleDefinition;
pub use error::CatalogError;
