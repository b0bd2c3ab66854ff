//! Heuristic scoring for move selection
//!
//! Rates every empty cell by how strongly it extends or backs existing
//! runs of one color, using the same line sweep the win check walks.

pub mod score;

pub use score::ScoreGrid;
