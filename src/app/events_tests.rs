//! Tests for key event handling

use super::*;
use crate::config::Config;
use crate::search::search_state::SearchState;
use crate::search::worker::{SearchRequest, SearchResponse};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::mpsc::{Receiver, Sender, channel};

struct TestApp {
    app: App,
    request_rx: Receiver<SearchRequest>,
    #[allow(dead_code)]
    response_tx: Sender<SearchResponse>,
}

fn test_app() -> TestApp {
    let (request_tx, request_rx) = channel();
    let (response_tx, response_rx) = channel();
    TestApp {
        app: App::new(
            &Config::default(),
            SearchState::with_channels(request_tx, response_rx),
        ),
        request_rx,
        response_tx,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn test_typing_edits_focused_field() {
    let mut ta = test_app();
    for c in "lung".chars() {
        ta.app.handle_key_event(key(KeyCode::Char(c)));
    }
    assert_eq!(ta.app.form.value("tumor_type"), Some("lung"));

    ta.app.handle_key_event(key(KeyCode::Backspace));
    assert_eq!(ta.app.form.value("tumor_type"), Some("lun"));
}

#[test]
fn test_tab_moves_focus() {
    let mut ta = test_app();
    ta.app.handle_key_event(key(KeyCode::Tab));
    ta.app.handle_key_event(key(KeyCode::Char('P')));
    assert_eq!(ta.app.form.value("test"), Some("P"));

    ta.app.handle_key_event(key(KeyCode::BackTab));
    ta.app.handle_key_event(key(KeyCode::Char('x')));
    assert_eq!(ta.app.form.value("tumor_type"), Some("x"));
}

#[test]
fn test_arrow_keys_move_focus() {
    let mut ta = test_app();
    ta.app.handle_key_event(key(KeyCode::Down));
    ta.app.handle_key_event(key(KeyCode::Down));
    assert_eq!(ta.app.form.focused(), 2);
    ta.app.handle_key_event(key(KeyCode::Up));
    assert_eq!(ta.app.form.focused(), 1);
}

#[test]
fn test_ctrl_u_clears_focused_field() {
    let mut ta = test_app();
    for c in "lung".chars() {
        ta.app.handle_key_event(key(KeyCode::Char(c)));
    }
    ta.app.handle_key_event(ctrl('u'));
    assert_eq!(ta.app.form.value("tumor_type"), Some(""));
}

#[test]
fn test_enter_submits() {
    let mut ta = test_app();
    ta.app.handle_key_event(key(KeyCode::Char('a')));
    ta.app.handle_key_event(key(KeyCode::Enter));

    assert!(ta.app.search.is_loading());
    let request = ta.request_rx.try_recv().unwrap();
    assert_eq!(request.pairs[0].1, "a");
}

#[test]
fn test_enter_ignored_while_loading() {
    let mut ta = test_app();
    ta.app.handle_key_event(key(KeyCode::Enter));
    assert!(ta.request_rx.try_recv().is_ok());

    // Second Enter while the first request is in flight sends nothing
    ta.app.handle_key_event(key(KeyCode::Enter));
    assert!(ta.request_rx.try_recv().is_err());
}

#[test]
fn test_escape_quits() {
    let mut ta = test_app();
    ta.app.handle_key_event(key(KeyCode::Esc));
    assert!(ta.app.should_quit());
}

#[test]
fn test_ctrl_c_quits() {
    let mut ta = test_app();
    ta.app.handle_key_event(ctrl('c'));
    assert!(ta.app.should_quit());
}

#[test]
fn test_ctrl_char_does_not_edit_field() {
    let mut ta = test_app();
    ta.app.handle_key_event(ctrl('x'));
    assert_eq!(ta.app.form.value("tumor_type"), Some(""));
}

#[test]
fn test_paste_lands_in_focused_field() {
    let mut ta = test_app();
    ta.app.handle_paste_event("EGFR & ALK\n".to_string());
    // Control characters are dropped, text is kept verbatim
    assert_eq!(ta.app.form.value("tumor_type"), Some("EGFR & ALK"));
}
