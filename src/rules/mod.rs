//! Game rules for Connect Four
//!
//! A player wins with four of their pieces in a line: horizontal, vertical
//! or either diagonal. A full board without a winner is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winning_line, has_win, winner, Direction, Line, CONNECT};
