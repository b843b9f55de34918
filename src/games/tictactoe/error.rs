//! Reasons a history operation was ignored.

use super::Position;

/// Why a call to `play` left the game unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square (must be 0-8).
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Why a call to `jump_to` left the game unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested move is not in the current history.
    #[display("No move #{requested} in history (last move is #{last})")]
    NoSuchMove {
        /// Move number asked for.
        requested: usize,
        /// Highest move number currently in history.
        last: usize,
    },
}

impl std::error::Error for JumpError {}

/// Why a list of boards is not a history reachable by legal play.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// History must contain at least the starting board.
    #[display("History is empty")]
    Empty,

    /// The first board must be empty.
    #[display("History does not start from an empty board")]
    StartNotEmpty,

    /// The board after `move_number` moves is not one legal move past its predecessor.
    #[display("Move #{move_number} is not a legal move from the previous board")]
    IllegalStep {
        /// Position of the offending board in history.
        move_number: usize,
    },
}

impl std::error::Error for HistoryError {}
