//! Search module for the computer player
//!
//! Contains a plain fixed-depth minimax that explores the game tree in place
//! on a borrowed board.

pub mod minimax;

pub use minimax::{SearchEngine, SearchResult};
