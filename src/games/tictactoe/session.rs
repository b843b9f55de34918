//! Single-writer game session with change notification.

use super::action::Move;
use super::error::{JumpError, MoveError};
use super::state::GameState;
use super::view::GameView;
use serde::Serialize;
use std::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// What changed in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A mark was placed.
    Played(Move),
    /// History was truncated to the board after `move_number` moves.
    Rewound {
        /// Move number now at the end of history.
        move_number: usize,
    },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Played(mov) => write!(f, "{} played {}", mov.player, mov.position),
            GameEvent::Rewound { move_number: 0 } => write!(f, "Back to game start"),
            GameEvent::Rewound { move_number } => write!(f, "Back to move #{}", move_number),
        }
    }
}

/// Receives a fresh view after every update that changed the game.
pub trait GameObserver {
    /// Called once per effective `play` or `jump_to`.
    fn notify(&mut self, event: &GameEvent, view: &GameView);
}

impl GameObserver for mpsc::Sender<GameEvent> {
    fn notify(&mut self, event: &GameEvent, _view: &GameView) {
        if self.send(*event).is_err() {
            debug!("Event receiver dropped");
        }
    }
}

/// Owns the [`GameState`] for one interactive session.
///
/// All mutation goes through [`GameSession::play`] and
/// [`GameSession::jump_to`]; observers only ever see [`GameView`]s.
#[derive(Default)]
pub struct GameSession {
    state: GameState,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameSession {
    /// Creates a session with a fresh game and no observers.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting game session");
        Self::default()
    }

    /// Registers an observer for all later updates.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
        debug!(observers = self.observers.len(), "Observer subscribed");
    }

    /// Returns the underlying state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Projects the current state for rendering.
    pub fn view(&self) -> GameView {
        GameView::of(&self.state)
    }

    /// Plays at `index`; illegal moves are ignored.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) {
        if let Err(e) = self.try_play(index) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Plays at `index`, reporting why an illegal move was ignored.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] from [`GameState::try_play`]; observers are
    /// not notified in that case.
    #[instrument(skip(self))]
    pub fn try_play(&mut self, index: usize) -> Result<Move, MoveError> {
        let mov = self.state.try_play(index)?;
        self.publish(GameEvent::Played(mov));
        Ok(mov)
    }

    /// Rewinds to `move_number`; out-of-range requests are ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) {
        if let Err(e) = self.try_jump_to(move_number) {
            warn!(error = %e, "Jump ignored");
        }
    }

    /// Rewinds to `move_number`, reporting out-of-range requests.
    ///
    /// Jumping to the move already at the end of history succeeds without
    /// notifying observers.
    ///
    /// # Errors
    ///
    /// Returns the [`JumpError`] from [`GameState::try_jump_to`].
    #[instrument(skip(self))]
    pub fn try_jump_to(&mut self, move_number: usize) -> Result<(), JumpError> {
        let before = self.state.move_count();
        self.state.try_jump_to(move_number)?;
        if move_number != before {
            self.publish(GameEvent::Rewound { move_number });
        }
        Ok(())
    }

    fn publish(&mut self, event: GameEvent) {
        if self.observers.is_empty() {
            return;
        }
        let view = self.view();
        for observer in &mut self.observers {
            observer.notify(&event, &view);
        }
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Observer that records each update in the trace log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn notify(&mut self, event: &GameEvent, view: &GameView) {
        info!(%event, status = %view.status_line(), "Game updated");
    }
}
