//! Turn sequencing shared by the front ends
//!
//! [`Game`] owns the board and applies moves for both sides, checking for a
//! win and then for a full board after every drop.

use tracing::{debug, info};

use crate::board::{Board, Move, Player};
use crate::config::GameConfig;
use crate::engine::{ComputerPlayer, MoveResult};
use crate::error::{GameError, SearchError};
use crate::rules::{find_winning_line, Line};

/// The human plays player 1
pub const HUMAN: Player = Player::Player1;
/// The computer plays player 2
pub const COMPUTER: Player = Player::Player2;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// A human-versus-computer game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_turn: Player,
    outcome: Option<Outcome>,
    last_move: Option<Move>,
    last_search: Option<MoveResult>,
    move_count: usize,
    computer: ComputerPlayer,
    human_first: bool,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let current_turn = if config.human_first { HUMAN } else { COMPUTER };
        Self {
            board: Board::new(),
            current_turn,
            outcome: None,
            last_move: None,
            last_search: None,
            move_count: 0,
            computer: ComputerPlayer::with_depth(config.search_depth),
            human_first: config.human_first,
        }
    }

    /// Start over with the same settings
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_turn = if self.human_first { HUMAN } else { COMPUTER };
        self.outcome = None;
        self.last_move = None;
        self.last_search = None;
        self.move_count = 0;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.current_turn == HUMAN
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.current_turn == COMPUTER
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Statistics of the computer's most recent search
    pub fn last_search(&self) -> Option<&MoveResult> {
        self.last_search.as_ref()
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn search_depth(&self) -> u8 {
        self.computer.depth()
    }

    /// The four cells of the winning line, once someone has won
    pub fn winning_line(&self) -> Option<Line> {
        match self.outcome? {
            Outcome::Winner(player) => find_winning_line(&self.board, player),
            Outcome::Draw => None,
        }
    }

    /// Apply the human's drop in `col`.
    ///
    /// An invalid column leaves the game untouched so the caller can ask
    /// again.
    pub fn play_human(&mut self, col: usize) -> Result<Move, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.current_turn != HUMAN {
            return Err(GameError::NotYourTurn(HUMAN.name()));
        }
        let mv = self.board.play(col, HUMAN)?;
        self.finish_move(mv);
        Ok(mv)
    }

    /// Let the computer search and apply its drop.
    ///
    /// A board without a legal column ends the game as a draw.
    pub fn play_computer(&mut self) -> Result<Move, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.current_turn != COMPUTER {
            return Err(GameError::NotYourTurn(COMPUTER.name()));
        }
        let result = match self.computer.choose_move(&mut self.board) {
            Ok(result) => result,
            Err(SearchError::NoLegalMove) => {
                info!("computer has no legal move, game drawn");
                self.outcome = Some(Outcome::Draw);
                return Err(SearchError::NoLegalMove.into());
            }
        };
        let mv = self.board.play(result.column, COMPUTER)?;
        self.last_search = Some(result);
        self.finish_move(mv);
        Ok(mv)
    }

    fn finish_move(&mut self, mv: Move) {
        self.last_move = Some(mv);
        self.move_count += 1;
        debug!(
            player = mv.player.name(),
            col = mv.col,
            row = mv.row,
            moves = self.move_count,
            "move applied"
        );

        if self.board.has_win(mv.player) {
            info!(winner = mv.player.name(), moves = self.move_count, "game won");
            self.outcome = Some(Outcome::Winner(mv.player));
        } else if self.board.is_full() {
            info!(moves = self.move_count, "game drawn");
            self.outcome = Some(Outcome::Draw);
        } else {
            self.current_turn = mv.player.opponent();
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{COLS, ROWS};
    use crate::error::MoveError;

    fn config(depth: u8, human_first: bool) -> GameConfig {
        GameConfig {
            search_depth: depth,
            human_first,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let game = Game::default();
        assert_eq!(game.current_turn(), HUMAN);
        assert!(game.is_human_turn());
        assert!(!game.is_over());
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_computer_first() {
        let mut game = Game::new(&config(1, false));
        assert!(game.is_computer_turn());
        assert_eq!(
            game.play_human(0),
            Err(GameError::NotYourTurn(HUMAN.name()))
        );
        let mv = game.play_computer().unwrap();
        assert_eq!(mv.col, 3);
        assert!(game.is_human_turn());
        assert!(game.last_search().is_some());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(&config(1, true));
        game.play_human(0).unwrap();
        assert!(game.is_computer_turn());
        assert_eq!(
            game.play_human(1),
            Err(GameError::NotYourTurn(HUMAN.name()))
        );
        game.play_computer().unwrap();
        assert!(game.is_human_turn());
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_invalid_column_keeps_turn() {
        let mut game = Game::default();
        assert_eq!(
            game.play_human(COLS),
            Err(GameError::InvalidMove(MoveError::InvalidColumn { column: COLS }))
        );
        assert!(game.is_human_turn());
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_human_wins_against_shallow_search() {
        // Depth 1 only looks for its own immediate wins, so it stacks the
        // center column while the human stacks column 0.
        let mut game = Game::new(&config(1, true));
        for i in 0..3 {
            game.play_human(0).unwrap();
            let mv = game.play_computer().unwrap();
            assert_eq!((mv.col, mv.row), (3, i));
        }
        game.play_human(0).unwrap();
        assert_eq!(game.outcome(), Some(Outcome::Winner(HUMAN)));
        assert_eq!(game.winning_line(), Some([(0, 0), (1, 0), (2, 0), (3, 0)]));
        assert_eq!(game.play_computer(), Err(GameError::GameOver));
        assert_eq!(game.play_human(1), Err(GameError::GameOver));
    }

    #[test]
    fn test_computer_completes_its_line() {
        let mut game = Game::new(&config(1, false));
        for _ in 0..3 {
            game.play_computer().unwrap();
            game.play_human(0).unwrap();
        }
        let mv = game.play_computer().unwrap();
        assert_eq!((mv.col, mv.row), (3, 3));
        assert_eq!(game.outcome(), Some(Outcome::Winner(COMPUTER)));
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new(&config(1, true));
        game.play_human(2).unwrap();
        game.play_computer().unwrap();
        game.reset();
        assert_eq!(game.board(), &Board::new());
        assert!(game.is_human_turn());
        assert_eq!(game.last_move(), None);
        assert_eq!(game.last_search(), None);
    }

    #[test]
    fn test_draw_when_board_fills() {
        let mut game = Game::new(&config(1, true));
        // Fill everything but the top-right cell without a four in a row:
        // columns in pairs of rows, alternating colors by column pair.
        let mut board = Board::new();
        for col in 0..COLS {
            for row in 0..ROWS {
                if col == COLS - 1 && row == ROWS - 1 {
                    continue;
                }
                let player = if (row / 2 + col) % 2 == 0 {
                    Player::Player1
                } else {
                    Player::Player2
                };
                board.drop_piece(col, player).unwrap();
            }
        }
        assert!(!board.has_win(Player::Player1));
        assert!(!board.has_win(Player::Player2));
        game.board = board;

        let mv = game.play_human(COLS - 1).unwrap();
        assert_eq!(mv.row, ROWS - 1);
        assert_eq!(game.outcome(), Some(Outcome::Draw));
        assert_eq!(game.winning_line(), None);
    }
}
