//! Tic-tac-toe with a browsable move history.
//!
//! The game is a small synchronous reducer: a [`GameState`] holds every board
//! from the empty start to the present, and [`GameState::play`] /
//! [`GameState::jump_to`] are the only ways to change it. Whose turn it is and
//! whether the game is over are always derived from history.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over one [`Board`]
//! - **State**: board history with append (`play`) and truncate (`jump_to`)
//! - **Session**: single owner of a state, notifying [`GameObserver`]s
//! - **View**: [`GameView`] projection consumed by renderers
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 3, 2] {
//!     game.play(index);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! game.jump_to(2);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! assert_eq!(game.to_move(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::rules;
pub use games::tictactoe::{
    Board, GameEvent, GameObserver, GameSession, GameState, GameStatus, GameView, HistoryError,
    JumpError, Move,
    MoveEntry, MoveError, Player, Position, Square, TracingObserver,
};
