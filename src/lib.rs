//! Connect Four with a minimax computer opponent
//!
//! A human (player 1) plays against the computer (player 2) on the standard
//! 6x7 board. Pieces drop to the lowest free row of a column; four in a row
//! horizontally, vertically or diagonally wins, and a full board is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Grid storage, drops and undos
//! - [`rules`]: Four-in-a-row detection
//! - [`eval`]: Terminal evaluation (win, loss, neutral)
//! - [`search`]: Fixed-depth minimax with center-biased tie-break
//! - [`engine`]: Computer player wrapping the search with statistics
//! - [`game`]: Turn sequencing shared by the front ends
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//! - [`cli`] and [`ui`]: Terminal and egui front ends
//!
//! # Quick Start
//!
//! ```
//! use connect_four::{Board, Player, SearchEngine};
//!
//! let mut board = Board::new();
//! board.drop_piece(3, Player::Player1).unwrap();
//!
//! // Computer replies as player 2
//! let col = SearchEngine::new(&mut board).best_move(4).unwrap();
//! let row = board.drop_piece(col, Player::Player2).unwrap();
//! println!("Computer plays ({row}, {col})");
//! assert!(!board.has_win(Player::Player2));
//! ```
//!
//! # Search
//!
//! The search is an unpruned minimax: depth `d` visits at most `7^d`
//! positions, so depths above 6 get slow.

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Move, Player, COLS, ROWS};
pub use engine::{ComputerPlayer, MoveResult};
pub use error::{GameError, MoveError, SearchError};
pub use eval::Evaluation;
pub use game::{Game, Outcome};
pub use search::{SearchEngine, SearchResult};
