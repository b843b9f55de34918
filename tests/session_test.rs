//! Tests for session observers and events.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use tictactoe_history::{
    GameEvent, GameObserver, GameSession, GameView, Move, Player, Position,
};

/// Records the status line of every view it is handed.
struct StatusRecorder(Rc<RefCell<Vec<String>>>);

impl GameObserver for StatusRecorder {
    fn notify(&mut self, _event: &GameEvent, view: &GameView) {
        self.0.borrow_mut().push(view.status_line().clone());
    }
}

#[test]
fn test_channel_observer_receives_effective_updates() {
    let (tx, rx) = mpsc::channel();
    let mut session = GameSession::new();
    session.subscribe(Box::new(tx));

    session.play(4);
    session.play(4); // occupied, ignored
    session.play(0);
    session.jump_to(1);
    session.jump_to(1); // already there
    session.jump_to(7); // out of range

    let events: Vec<GameEvent> = rx.try_iter().collect();
    assert_eq!(
        events,
        vec![
            GameEvent::Played(Move::new(Player::X, Position::Center)),
            GameEvent::Played(Move::new(Player::O, Position::TopLeft)),
            GameEvent::Rewound { move_number: 1 },
        ]
    );
}

#[test]
fn test_observer_sees_view_after_update() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut session = GameSession::new();
    session.subscribe(Box::new(StatusRecorder(Rc::clone(&seen))));

    for index in [0, 4, 1, 3, 2] {
        session.play(index);
    }
    session.jump_to(0);

    assert_eq!(
        *seen.borrow(),
        vec![
            "Next player: O",
            "Next player: X",
            "Next player: O",
            "Next player: X",
            "Winner: X",
            "Next player: X",
        ]
    );
}

#[test]
fn test_try_play_errors_do_not_notify() {
    let (tx, rx) = mpsc::channel();
    let mut session = GameSession::new();
    session.subscribe(Box::new(tx));

    assert!(session.try_play(12).is_err());
    assert!(session.try_jump_to(3).is_err());
    assert_eq!(rx.try_iter().count(), 0);
    assert_eq!(session.state().move_count(), 0);
}

#[test]
fn test_dropped_receiver_is_tolerated() {
    let (tx, rx) = mpsc::channel();
    let mut session = GameSession::new();
    session.subscribe(Box::new(tx));
    drop(rx);

    session.play(0);
    assert_eq!(session.state().move_count(), 1);
}

#[test]
fn test_event_descriptions() {
    let played = GameEvent::Played(Move::new(Player::O, Position::BottomLeft));
    assert_eq!(played.to_string(), "O played Bottom-left");
    assert_eq!(GameEvent::Rewound { move_number: 0 }.to_string(), "Back to game start");
    assert_eq!(GameEvent::Rewound { move_number: 3 }.to_string(), "Back to move #3");
}

#[test]
fn test_view_serializes_for_renderers() {
    let mut session = GameSession::new();
    session.play(4);
    let json = serde_json::to_value(session.view()).unwrap();
    assert_eq!(json["status_line"], "Next player: O");
    assert_eq!(json["current_move"], 1);
    assert_eq!(json["moves"][1]["label"], "Go to move #1");
    assert_eq!(json["board"]["squares"][4]["Occupied"], "X");
}
