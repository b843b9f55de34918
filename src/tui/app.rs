//! Application state and key handling.

use super::input::{digit_position, move_cursor};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use tictactoe_history::{GameEvent, GameSession, GameView, Position, TracingObserver};
use tracing::{debug, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys select a history entry.
    History,
}

impl Focus {
    /// Toggles between the two panels.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
pub struct App {
    session: GameSession,
    events: mpsc::Receiver<GameEvent>,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    message: String,
    show_square_numbers: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(show_square_numbers: bool) -> Self {
        let (event_tx, events) = mpsc::channel();
        let mut session = GameSession::new();
        session.subscribe(Box::new(event_tx));
        session.subscribe(Box::new(TracingObserver));

        Self {
            session,
            events,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
            message: "X moves first.".to_string(),
            show_square_numbers,
        }
    }

    /// Projects the current game for drawing.
    pub fn view(&self) -> GameView {
        self.session.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted entry in the history panel.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Description of the last change.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether empty squares show their number.
    pub fn show_square_numbers(&self) -> bool {
        self.show_square_numbers
    }

    /// Handles one key event.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.kind != KeyEventKind::Press {
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected_move = self.session.state().move_count();
            }
            KeyCode::Char('g') => self.jump_to(0),
            code => match (digit_position(code), self.focus) {
                (Some(position), _) => self.play(position),
                (None, Focus::Board) => self.handle_board_key(code),
                (None, Focus::History) => self.handle_history_key(code),
            },
        }

        AppAction::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let last = self.session.state().move_count();
        match code {
            KeyCode::Up => self.selected_move = self.selected_move.saturating_sub(1),
            KeyCode::Down => self.selected_move = (self.selected_move + 1).min(last),
            KeyCode::Enter => self.jump_to(self.selected_move),
            _ => {}
        }
    }

    fn play(&mut self, position: Position) {
        self.session.play(position.to_index());
        self.selected_move = self.session.state().move_count();
        self.drain_events();
    }

    fn jump_to(&mut self, move_number: usize) {
        self.session.jump_to(move_number);
        self.selected_move = self.session.state().move_count();
        self.drain_events();
    }

    /// Takes the latest event from the session channel as the message.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            debug!(%event, "Handling game event");
            self.message = event.to_string();
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("cursor", &self.cursor)
            .field("focus", &self.focus)
            .field("selected_move", &self.selected_move)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tictactoe_history::{GameStatus, Player};

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_digits_play_squares() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.message(), "X played Center");
        assert_eq!(*app.view().to_move(), Player::O);
    }

    #[test]
    fn test_digits_play_while_history_focused() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(
            app.view().board().get(Position::BottomRight).player(),
            Some(Player::X)
        );
        assert_eq!(app.selected_move(), 1);
        assert_eq!(app.focus(), Focus::History);
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor(), Position::TopLeft);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view().board().get(Position::TopLeft).player(), Some(Player::X));
    }

    #[test]
    fn test_occupied_square_leaves_message() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.message(), "X played Top-left");
        assert_eq!(*app.view().current_move(), 1);
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = App::new(true);
        for key in ['1', '5', '2', '4', '3'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(*app.view().status(), GameStatus::Won(Player::X));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected_move(), 5);
        for _ in 0..3 {
            press(&mut app, KeyCode::Up);
        }
        press(&mut app, KeyCode::Enter);

        let view = app.view();
        assert_eq!(*view.current_move(), 2);
        assert_eq!(*view.status(), GameStatus::InProgress);
        assert_eq!(app.message(), "Back to move #2");
    }

    #[test]
    fn test_history_selection_is_clamped() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_move(), 1);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_move(), 0);
    }

    #[test]
    fn test_g_returns_to_start() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(*app.view().current_move(), 0);
        assert_eq!(app.message(), "Back to game start");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(true);
        assert_eq!(press(&mut app, KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), AppAction::Quit);
        assert_eq!(press(&mut app, KeyCode::Right), AppAction::Continue);
    }
}
