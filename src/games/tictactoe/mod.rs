mod action;
mod error;
mod position;
pub mod rules;
mod session;
mod state;
mod status;
mod types;
mod view;

pub use action::Move;
pub use error::{HistoryError, JumpError, MoveError};
pub use position::Position;
pub use session::{GameEvent, GameObserver, GameSession, TracingObserver};
pub use state::GameState;
pub use status::GameStatus;
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry};
