//! Computer player wrapping the minimax search
//!
//! [`ComputerPlayer`] owns only its configured depth. Each call borrows the
//! game board, runs [`SearchEngine`] on it and reports the chosen column
//! together with timing and node statistics.
//!
//! # Example
//!
//! ```
//! use connect_four::{Board, ComputerPlayer};
//!
//! let mut board = Board::new();
//! let player = ComputerPlayer::with_depth(2);
//!
//! let result = player.choose_move(&mut board).unwrap();
//! assert_eq!(result.column, 3);
//! ```

use std::time::Instant;

use tracing::{debug, instrument};

use crate::board::Board;
use crate::error::SearchError;
use crate::search::{SearchEngine, SearchResult};

/// Depth used when nothing else is configured
pub const DEFAULT_DEPTH: u8 = 4;
/// Largest accepted search depth
pub const MAX_DEPTH: u8 = 8;

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Column the computer plays
    pub column: usize,
    /// Minimax score of that column
    pub score: i32,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Search depth in plies
    pub depth: u8,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            column: result.column,
            score: result.score,
            nodes: result.nodes,
            time_ms,
            depth: result.depth,
        }
    }
}

/// The computer side (player 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerPlayer {
    depth: u8,
}

impl ComputerPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }

    /// Create a computer player searching `depth` plies.
    ///
    /// The depth is clamped to `1..=MAX_DEPTH`.
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth: depth.clamp(1, MAX_DEPTH),
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Pick a column for player 2.
    ///
    /// The board is searched in place and handed back unchanged; applying
    /// the returned column is up to the caller.
    #[instrument(level = "debug", skip_all, fields(depth = self.depth))]
    pub fn choose_move(&self, board: &mut Board) -> Result<MoveResult, SearchError> {
        let start = Instant::now();
        let result = SearchEngine::new(board).search(self.depth)?;
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            column = result.column,
            score = result.score,
            nodes = result.nodes,
            time_ms,
            "computer search finished"
        );

        Ok(MoveResult::from_search(result, time_ms))
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new()
    }
}
