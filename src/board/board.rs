//! Grid storage with gravity drops

use std::fmt;

use super::{Cell, Move, Player, COLS, ROWS};
use crate::error::MoveError;
use crate::eval::{self, Evaluation};
use crate::rules;

/// Game board. `cells[row][col]`, row 0 at the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Write a cell directly, ignoring gravity
    #[cfg(test)]
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// True iff `col` is in range and its top cell is empty
    #[inline]
    pub fn is_column_playable(&self, col: usize) -> bool {
        col < COLS && self.cells[ROWS - 1][col] == Cell::Empty
    }

    /// Playable columns, left to right
    pub fn playable_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| self.is_column_playable(col))
    }

    /// Lowest empty row of `col`, if any
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece into `col`; returns the row it landed in.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn { column: col });
        }
        let row = self
            .next_open_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.cells[row][col] = player.to_cell();
        Ok(row)
    }

    /// Drop a piece and return the full move record
    pub fn play(&mut self, col: usize, player: Player) -> Result<Move, MoveError> {
        let row = self.drop_piece(col, player)?;
        Ok(Move { col, row, player })
    }

    /// Reset (row, col) to empty.
    ///
    /// Callers must pass the cell last written by a drop in that column.
    /// Only debug builds check this.
    #[inline]
    pub fn undo(&mut self, row: usize, col: usize) {
        debug_assert!(
            self.cells[row][col] != Cell::Empty,
            "undo of empty cell ({row}, {col})"
        );
        debug_assert!(
            row + 1 == ROWS || self.cells[row + 1][col] == Cell::Empty,
            "undo of ({row}, {col}) below another piece"
        );
        self.cells[row][col] = Cell::Empty;
    }

    /// Revert a move returned by [`Board::play`]
    #[inline]
    pub fn unplay(&mut self, mv: Move) {
        debug_assert_eq!(self.cells[mv.row][mv.col], mv.player.to_cell());
        self.undo(mv.row, mv.col);
    }

    /// True iff no empty cell remains
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    /// Pieces on the board
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Check for four in a row for `player` in any orientation
    #[inline]
    pub fn has_win(&self, player: Player) -> bool {
        rules::has_win(self, player)
    }

    /// Terminal evaluation used by the search
    #[inline]
    pub fn evaluate(&self) -> Evaluation {
        eval::evaluate(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Top row first, `X` for player 1, `O` for player 2.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let symbol = match self.cells[row][col] {
                    Cell::Empty => '.',
                    Cell::Player1 => 'X',
                    Cell::Player2 => 'O',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        for col in 0..COLS {
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", col + 1)?;
        }
        writeln!(f)
    }
}
