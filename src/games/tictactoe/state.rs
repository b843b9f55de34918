//! Board history and the turn/status state machine.
//!
//! History is the only stored state. Whose turn it is and whether the game is
//! over are recomputed from it on every query, so there is nothing that can
//! fall out of sync after a jump.

use super::action::Move;
use super::error::{HistoryError, JumpError, MoveError};
use super::status::GameStatus;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Complete game state: every board from the empty start to the present.
///
/// Deserialization replays the boards and rejects any history that legal
/// play could not have produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Board>", into = "Vec<Board>")]
pub struct GameState {
    /// Board snapshots; index 0 is the empty board. Never empty.
    history: Vec<Board>,
}

impl GameState {
    /// Creates a new game with only the empty board in history.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
        }
    }

    /// Returns every board snapshot, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the board at the end of history.
    pub fn current_board(&self) -> &Board {
        &self.history[self.history.len() - 1]
    }

    /// Number of moves played so far (history length minus the start board).
    pub fn move_count(&self) -> usize {
        self.history.len() - 1
    }

    /// Returns the board after `move_number` moves, if it is in history.
    pub fn board_at(&self, move_number: usize) -> Option<&Board> {
        self.history.get(move_number)
    }

    /// Player to mark next. X when an even number of moves has been played.
    pub fn to_move(&self) -> Player {
        if self.move_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.current_board())
    }

    /// Status of the board after `move_number` moves, if it is in history.
    pub fn status_at(&self, move_number: usize) -> Option<GameStatus> {
        self.board_at(move_number).map(GameStatus::evaluate)
    }

    /// Plays the current player's mark at `index`.
    ///
    /// Calls that are out of range, target an occupied square, or arrive after
    /// the game is decided are ignored.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn play(&mut self, index: usize) {
        if let Err(e) = self.try_play(index) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Same transition as [`GameState::play`], reporting why a move was ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] and leaves the state unchanged if the move is
    /// not legal on the current board.
    #[instrument(skip(self))]
    pub fn try_play(&mut self, index: usize) -> Result<Move, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let current = self.current_board();

        if !current.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.to_move();
        let next = current.with_mark(position, player);
        self.history.push(next);

        debug!(%player, %position, move_count = self.move_count(), "Move played");
        Ok(Move::new(player, position))
    }

    /// Rewinds to the board after `move_number` moves, discarding later boards.
    ///
    /// Out-of-range move numbers are ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) {
        if let Err(e) = self.try_jump_to(move_number) {
            warn!(error = %e, "Jump ignored");
        }
    }

    /// Same transition as [`GameState::jump_to`], reporting out-of-range requests.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::NoSuchMove`] and leaves the state unchanged if
    /// `move_number` is past the end of history.
    #[instrument(skip(self))]
    pub fn try_jump_to(&mut self, move_number: usize) -> Result<(), JumpError> {
        if move_number > self.move_count() {
            return Err(JumpError::NoSuchMove {
                requested: move_number,
                last: self.move_count(),
            });
        }

        self.history.truncate(move_number + 1);
        debug!(move_count = self.move_count(), to_move = %self.to_move(), "Jumped");
        Ok(())
    }
}

impl TryFrom<Vec<Board>> for GameState {
    type Error = HistoryError;

    /// Rebuilds a game by replaying each step of `history` through `try_play`.
    #[instrument(skip(history), fields(len = history.len()))]
    fn try_from(history: Vec<Board>) -> Result<Self, Self::Error> {
        let mut boards = history.into_iter();
        let start = boards.next().ok_or(HistoryError::Empty)?;
        if start != Board::new() {
            return Err(HistoryError::StartNotEmpty);
        }

        let mut state = Self::new();
        for (i, board) in boards.enumerate() {
            let move_number = i + 1;
            let changed = Position::ALL
                .into_iter()
                .find(|&pos| state.current_board().get(pos) != board.get(pos))
                .ok_or(HistoryError::IllegalStep { move_number })?;

            if state.try_play(changed.to_index()).is_err() || state.current_board() != &board {
                return Err(HistoryError::IllegalStep { move_number });
            }
        }
        Ok(state)
    }
}

impl From<GameState> for Vec<Board> {
    fn from(state: GameState) -> Self {
        state.history
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
