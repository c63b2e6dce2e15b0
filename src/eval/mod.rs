//! Terminal evaluation for the minimax search
//!
//! Only finished positions carry a score: a line for the computer
//! (player 2), a line for the human (player 1), or nothing. There is no
//! positional heuristic for unfinished positions.

use crate::board::{Board, Player};
use crate::rules::winner;

/// Score of a position won by player 2
pub const WIN_SCORE: i32 = 100;

/// Static evaluation of a position.
///
/// Ordered so that `Win1 < Neutral < Win2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Evaluation {
    /// Player 1 (human) has four in a row
    Win1,
    Neutral,
    /// Player 2 (computer) has four in a row
    Win2,
}

impl Evaluation {
    /// Numeric score: 100, 0 or -100
    #[inline]
    pub fn score(self) -> i32 {
        match self {
            Evaluation::Win2 => WIN_SCORE,
            Evaluation::Neutral => 0,
            Evaluation::Win1 => -WIN_SCORE,
        }
    }
}

/// Evaluate a board. Player 2's line is checked first.
#[must_use]
pub fn evaluate(board: &Board) -> Evaluation {
    match winner(board) {
        Some(Player::Player2) => Evaluation::Win2,
        Some(Player::Player1) => Evaluation::Win1,
        None => Evaluation::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Evaluation::Win2 > Evaluation::Neutral);
        assert!(Evaluation::Neutral > Evaluation::Win1);
    }

    #[test]
    fn test_scores() {
        assert_eq!(Evaluation::Win2.score(), 100);
        assert_eq!(Evaluation::Neutral.score(), 0);
        assert_eq!(Evaluation::Win1.score(), -100);
    }

    #[test]
    fn test_empty_board_is_neutral() {
        assert_eq!(evaluate(&Board::new()), Evaluation::Neutral);
    }

    #[test]
    fn test_player_lines() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, Player::Player1).unwrap();
        }
        assert_eq!(board.evaluate(), Evaluation::Win1);

        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(6, Player::Player2).unwrap();
        }
        assert_eq!(board.evaluate(), Evaluation::Win2);
    }

    #[test]
    fn test_player2_reported_first_when_both_have_lines() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, Player::Player1).unwrap();
            board.drop_piece(col, Player::Player2).unwrap();
        }
        assert_eq!(board.evaluate(), Evaluation::Win2);
    }
}
