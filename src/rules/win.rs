//! Four-in-a-row detection
//!
//! Every orientation is scanned independently by sliding a 4-cell window
//! over all anchors that keep the window inside the grid. The whole scan is
//! O(ROWS * COLS), cheap enough to run at every search node.

use crate::board::{Board, Player, COLS, ROWS};

/// Length of a winning run
pub const CONNECT: usize = 4;

/// A winning run as `(row, col)` pairs, in window order
pub type Line = [(usize, usize); CONNECT];

/// Row/column step of each window orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Rising left to right (↗)
    DiagonalUp,
    /// Falling left to right (↘)
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// Anchor rows for this orientation
    fn rows(self) -> std::ops::Range<usize> {
        match self {
            Direction::Horizontal => 0..ROWS,
            Direction::Vertical | Direction::DiagonalUp => 0..ROWS - (CONNECT - 1),
            // Anchored at the upper-left end, walking down-right
            Direction::DiagonalDown => CONNECT - 1..ROWS,
        }
    }

    /// Anchor columns for this orientation
    fn cols(self) -> std::ops::Range<usize> {
        match self {
            Direction::Vertical => 0..COLS,
            _ => 0..COLS - (CONNECT - 1),
        }
    }

    /// The i-th cell of the window anchored at (row, col)
    #[inline]
    fn cell(self, row: usize, col: usize, i: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (row, col + i),
            Direction::Vertical => (row + i, col),
            Direction::DiagonalUp => (row + i, col + i),
            Direction::DiagonalDown => (row - i, col + i),
        }
    }
}

/// Check if `player` has four in a row in any orientation
pub fn has_win(board: &Board, player: Player) -> bool {
    Direction::ALL
        .iter()
        .any(|&dir| find_line_in(board, player, dir).is_some())
}

/// Find the first winning run for `player`
///
/// Orientations are tried horizontal, vertical, ↗, ↘; within one
/// orientation anchors go row by row.
pub fn find_winning_line(board: &Board, player: Player) -> Option<Line> {
    Direction::ALL
        .iter()
        .find_map(|&dir| find_line_in(board, player, dir))
}

/// The player owning a four-in-a-row, if any. Player 2 is reported first.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::Player2, Player::Player1]
        .into_iter()
        .find(|&p| has_win(board, p))
}

fn find_line_in(board: &Board, player: Player, dir: Direction) -> Option<Line> {
    let target = player.to_cell();
    for row in dir.rows() {
        for col in dir.cols() {
            let all_match = (0..CONNECT).all(|i| {
                let (r, c) = dir.cell(row, col, i);
                board.get(r, c) == target
            });
            if all_match {
                let mut line = [(0, 0); CONNECT];
                for (i, slot) in line.iter_mut().enumerate() {
                    *slot = dir.cell(row, col, i);
                }
                return Some(line);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    /// Plant pieces directly, ignoring gravity
    fn plant(cells: &[(usize, usize)], player: Player) -> Board {
        let mut board = Board::new();
        for &(row, col) in cells {
            board.set(row, col, player.to_cell());
        }
        board
    }

    fn assert_only_winner(board: &Board, player: Player) {
        assert!(has_win(board, player));
        assert!(!has_win(board, player.opponent()));
    }

    #[test]
    fn test_empty_board_has_no_win() {
        let board = Board::new();
        assert!(!has_win(&board, Player::Player1));
        assert!(!has_win(&board, Player::Player2));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_horizontal_every_anchor() {
        for row in 0..ROWS {
            for col in 0..=COLS - CONNECT {
                let cells: Vec<_> = (0..4).map(|i| (row, col + i)).collect();
                assert_only_winner(&plant(&cells, Player::Player1), Player::Player1);
            }
        }
    }

    #[test]
    fn test_vertical_every_anchor() {
        for row in 0..=ROWS - CONNECT {
            for col in 0..COLS {
                let cells: Vec<_> = (0..4).map(|i| (row + i, col)).collect();
                assert_only_winner(&plant(&cells, Player::Player2), Player::Player2);
            }
        }
    }

    #[test]
    fn test_diagonal_up_every_anchor() {
        for row in 0..=ROWS - CONNECT {
            for col in 0..=COLS - CONNECT {
                let cells: Vec<_> = (0..4).map(|i| (row + i, col + i)).collect();
                assert_only_winner(&plant(&cells, Player::Player1), Player::Player1);
            }
        }
    }

    #[test]
    fn test_diagonal_down_every_anchor() {
        for row in CONNECT - 1..ROWS {
            for col in 0..=COLS - CONNECT {
                let cells: Vec<_> = (0..4).map(|i| (row - i, col + i)).collect();
                assert_only_winner(&plant(&cells, Player::Player2), Player::Player2);
            }
        }
    }

    #[test]
    fn test_three_is_not_a_win() {
        let board = plant(&[(0, 0), (0, 1), (0, 2)], Player::Player1);
        assert!(!has_win(&board, Player::Player1));

        let board = plant(&[(0, 0), (1, 1), (2, 2)], Player::Player2);
        assert!(!has_win(&board, Player::Player2));
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let mut board = plant(&[(2, 0), (2, 1), (2, 3), (2, 4)], Player::Player1);
        board.set(2, 2, Cell::Player2);
        assert!(!has_win(&board, Player::Player1));
    }

    #[test]
    fn test_no_wrap_around_edges() {
        // Last three cells of row 0 plus first cell of row 1
        let board = plant(&[(0, 4), (0, 5), (0, 6), (1, 0)], Player::Player1);
        assert!(!has_win(&board, Player::Player1));
    }

    #[test]
    fn test_find_winning_line_cells() {
        let board = plant(&[(3, 0), (2, 1), (1, 2), (0, 3)], Player::Player2);
        assert_eq!(
            find_winning_line(&board, Player::Player2),
            Some([(3, 0), (2, 1), (1, 2), (0, 3)])
        );
        assert_eq!(find_winning_line(&board, Player::Player1), None);
        assert_eq!(winner(&board), Some(Player::Player2));
    }

    #[test]
    fn test_longer_run_still_wins() {
        let cells: Vec<_> = (0..COLS).map(|c| (0, c)).collect();
        let board = plant(&cells, Player::Player1);
        assert_eq!(
            find_winning_line(&board, Player::Player1),
            Some([(0, 0), (0, 1), (0, 2), (0, 3)])
        );
    }
}
