use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::state::App;

/// Timeout for event polling - allows periodic UI refresh for notifications
/// and in-flight search progress
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        // Poll with timeout so the loop keeps ticking while a search is in
        // flight or a notification is counting down
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                Event::Resize(_, _) => {
                    self.mark_dirty();
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle a single key press
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Enter => {
                // The submit control is disabled while a request is in
                // flight; resubmitting happens by pressing Enter again
                // after settlement
                if !self.search.is_loading() {
                    self.submit_search();
                }
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                self.mark_dirty();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                self.mark_dirty();
            }
            KeyCode::Backspace => {
                self.form.pop_char();
                self.mark_dirty();
            }
            KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.clear_focused();
                self.mark_dirty();
            }
            KeyCode::PageDown => {
                self.scroll_down();
            }
            KeyCode::PageUp => {
                self.scroll_up();
            }
            KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.push_char(c);
                self.mark_dirty();
            }
            _ => {}
        }
    }

    /// Handle paste events from bracketed paste mode
    ///
    /// Pasted text lands in the focused field as typed characters.
    fn handle_paste_event(&mut self, text: String) {
        for c in text.chars().filter(|c| !c.is_control()) {
            self.form.push_char(c);
        }
        self.mark_dirty();
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
