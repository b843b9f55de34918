//! Read-only projection of a game for renderers.

use super::rules::winning_line;
use super::state::GameState;
use super::status::GameStatus;
use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// One entry in the history browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, derive_new::new)]
pub struct MoveEntry {
    /// Number of moves played at this point (0 is the empty board).
    move_number: usize,
    /// Button text, e.g. "Go to move #3".
    label: String,
}

impl MoveEntry {
    /// Entry for the board after `move_number` moves.
    pub fn for_move(move_number: usize) -> Self {
        let label = if move_number == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", move_number)
        };
        Self::new(move_number, label)
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// The current board.
    board: Board,
    /// Derived status of the current board.
    status: GameStatus,
    /// Player to mark next.
    to_move: Player,
    /// Text such as "Next player: O" or "Winner: X".
    status_line: String,
    /// Number of moves played on the current board.
    current_move: usize,
    /// The completed triple, when the game is won.
    winning_line: Option<[Position; 3]>,
    /// One entry per history snapshot, oldest first.
    moves: Vec<MoveEntry>,
}

impl GameView {
    /// Projects `state` into a view.
    #[instrument(skip(state), fields(move_count = state.move_count()))]
    pub fn of(state: &GameState) -> Self {
        let board = state.current_board().clone();
        let status = state.status();
        let to_move = state.to_move();
        let winning_line = winning_line(&board);

        Self {
            status_line: status.describe(to_move),
            current_move: state.move_count(),
            moves: (0..state.history().len()).map(MoveEntry::for_move).collect(),
            board,
            status,
            to_move,
            winning_line,
        }
    }

    /// Renders the view as plain text: status, board, then the move list.
    pub fn render_text(&self, numbered: bool) -> String {
        let mut out = format!("{}\n\n{}\n\n", self.status_line, self.board.display(numbered));
        for entry in &self.moves {
            let marker = if entry.move_number == self.current_move {
                '>'
            } else {
                ' '
            };
            out.push_str(&format!(
                "{} {}. {}\n",
                marker,
                entry.move_number + 1,
                entry.label
            ));
        }
        out
    }
}
