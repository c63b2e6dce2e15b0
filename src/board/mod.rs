//! Board representation for Connect Four

pub mod board;


// Re-exports
pub use board::Board;

/// Number of rows; row 0 is the bottom of the physical board
pub const ROWS: usize = 6;
/// Number of columns
pub const COLS: usize = 7;
pub const TOTAL_CELLS: usize = ROWS * COLS; // 42
/// Column preferred when search scores tie
pub const CENTER_COL: usize = COLS / 2;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

/// The two sides. Player 1 is the human, player 2 the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    #[inline]
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Player1 => Cell::Player1,
            Player::Player2 => Cell::Player2,
        }
    }

    /// Player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Player1 => "Player 1",
            Player::Player2 => "Player 2",
        }
    }
}

/// A placed piece: enough to revert a speculative drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub col: usize,
    pub row: usize,
    pub player: Player,
}
