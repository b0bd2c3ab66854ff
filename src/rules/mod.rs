//! Game rules for connect-five
//!
//! One rule family only: the win condition. Five consecutive stones of a
//! single color along any row, column or diagonal end the game.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, WIN_LEN};
