//! Derived game status.

use super::rules::{check_winner, is_full};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game, always recomputed from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Evaluates the status of `board`.
    ///
    /// A win takes precedence over a full board.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board) -> Self {
        if let Some(winner) = check_winner(board) {
            GameStatus::Won(winner)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Status line shown above the board.
    ///
    /// `to_move` is only consulted while the game is in progress.
    pub fn describe(self, to_move: Player) -> String {
        match self {
            GameStatus::Won(player) => format!("Winner: {}", player),
            GameStatus::Draw => "Draw!".to_string(),
            GameStatus::InProgress => format!("Next player: {}", to_move),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_describe() {
        assert_eq!(GameStatus::InProgress.describe(Player::O), "Next player: O");
        assert_eq!(GameStatus::Won(Player::X).describe(Player::O), "Winner: X");
        assert_eq!(GameStatus::Draw.describe(Player::X), "Draw!");
    }

    #[test]
    fn test_evaluate_in_progress() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert_eq!(GameStatus::evaluate(&board), GameStatus::InProgress);
        assert!(!GameStatus::evaluate(&board).is_over());
    }

    #[test]
    fn test_finished_games_are_over() {
        assert!(GameStatus::Won(Player::O).is_over());
        assert!(GameStatus::Draw.is_over());
    }
}
