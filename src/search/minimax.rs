//! Fixed-depth minimax over a borrowed board
//!
//! The search explores the game tree in place: every speculative drop is
//! paired with an undo before the next sibling is tried, so the board is
//! handed back exactly as it was received.
//!
//! Player 2 (the computer) maximizes, player 1 (the human) minimizes.
//! Leaves are scored with [`Board::evaluate`] only; there is no pruning and
//! no positional heuristic.
//!
//! # Example
//!
//! ```
//! use connect_four::board::{Board, Player};
//! use connect_four::search::SearchEngine;
//!
//! let mut board = Board::new();
//! board.drop_piece(0, Player::Player1).unwrap();
//!
//! let col = SearchEngine::new(&mut board).best_move(2).unwrap();
//! assert!(board.is_column_playable(col));
//! ```

use crate::board::{Board, Player, CENTER_COL, COLS};
use crate::error::SearchError;

/// Outcome of a root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen column
    pub column: usize,
    /// Minimax score of the chosen column
    pub score: i32,
    /// Score of every root column; `None` for unplayable columns
    pub root_scores: [Option<i32>; COLS],
    /// Minimax nodes visited below the root
    pub nodes: u64,
    /// Depth the search was asked for
    pub depth: u8,
}

/// Minimax searcher holding a mutable borrow of the board.
///
/// Nothing survives between calls except the borrow itself.
pub struct SearchEngine<'a> {
    board: &'a mut Board,
    nodes: u64,
}

impl<'a> SearchEngine<'a> {
    pub fn new(board: &'a mut Board) -> Self {
        Self { board, nodes: 0 }
    }

    /// Best column for player 2 searching `depth` plies.
    ///
    /// Returns [`SearchError::NoLegalMove`] when every column is full.
    pub fn best_move(&mut self, depth: u8) -> Result<usize, SearchError> {
        self.search(depth).map(|result| result.column)
    }

    /// Root search with per-column scores and node count.
    ///
    /// Columns are tried left to right. A strictly better score replaces the
    /// current best; an equal score replaces it only when the candidate is
    /// strictly closer to the center column. A depth of 0 searches like 1.
    pub fn search(&mut self, depth: u8) -> Result<SearchResult, SearchError> {
        self.nodes = 0;
        let mut root_scores = [None; COLS];
        let mut best: Option<(usize, i32)> = None;

        for col in 0..COLS {
            if !self.board.is_column_playable(col) {
                continue;
            }
            let Ok(row) = self.board.drop_piece(col, Player::Player2) else {
                continue;
            };
            let score = self.minimax(depth.saturating_sub(1), false);
            self.board.undo(row, col);

            root_scores[col] = Some(score);
            let replace = match best {
                None => true,
                Some((best_col, best_score)) => {
                    score > best_score
                        || (score == best_score
                            && col.abs_diff(CENTER_COL) < best_col.abs_diff(CENTER_COL))
                }
            };
            if replace {
                best = Some((col, score));
            }
        }

        let (column, score) = best.ok_or(SearchError::NoLegalMove)?;
        Ok(SearchResult {
            column,
            score,
            root_scores,
            nodes: self.nodes,
            depth,
        })
    }

    /// Nodes visited by the last call to [`SearchEngine::search`]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Score the current position with `depth` plies left.
    ///
    /// A position where either side already has four in a row is terminal
    /// regardless of whose turn it is, so a won position scores a flat ±100
    /// however deep it was reached.
    fn minimax(&mut self, depth: u8, maximizing: bool) -> i32 {
        self.nodes += 1;

        if depth == 0 || self.is_terminal() {
            return self.board.evaluate().score();
        }

        let player = if maximizing {
            Player::Player2
        } else {
            Player::Player1
        };
        let mut best: Option<i32> = None;

        for col in 0..COLS {
            if !self.board.is_column_playable(col) {
                continue;
            }
            let Ok(row) = self.board.drop_piece(col, player) else {
                continue;
            };
            let score = self.minimax(depth - 1, !maximizing);
            self.board.undo(row, col);

            best = Some(match best {
                None => score,
                Some(current) if maximizing => current.max(score),
                Some(current) => current.min(score),
            });
        }

        // A full board is terminal, so an interior node always has a move.
        debug_assert!(best.is_some(), "interior node without a playable column");
        best.unwrap_or_else(|| self.board.evaluate().score())
    }

    #[inline]
    fn is_terminal(&self) -> bool {
        self.board.has_win(Player::Player1)
            || self.board.has_win(Player::Player2)
            || self.board.is_full()
    }
}
