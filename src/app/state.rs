use crate::config::Config;
use crate::form::FormState;
use crate::notification::NotificationState;
use crate::search::params;
use crate::search::search_state::SearchState;

/// Lines scrolled per page key press
pub(crate) const SCROLL_PAGE: usize = 5;

/// Application state
pub struct App {
    pub form: FormState,
    pub search: SearchState,
    pub notification: NotificationState,
    /// Row offset into the rendered results table
    pub scroll: usize,
    pub should_quit: bool,
    dirty: bool,
}

impl App {
    /// Create a new App instance from the deployment config and a search
    /// state (which owns the worker)
    pub fn new(config: &Config, search: SearchState) -> Self {
        Self {
            form: FormState::new(&config.form.fields),
            search,
            notification: NotificationState::new(),
            scroll: 0,
            should_quit: false,
            dirty: true,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Submit the current form
    ///
    /// Builds the non-empty query pairs and hands them to the search state.
    /// Safe to call with every field empty.
    pub fn submit_search(&mut self) {
        let pairs = params::build_pairs(&self.form);
        log::debug!("Submitting search with {} pairs", pairs.len());
        self.scroll = 0;
        self.search.submit(pairs);
        self.mark_dirty();
    }

    /// Poll the worker for settled submissions
    pub fn poll_search(&mut self) {
        if self.search.poll_response() {
            self.scroll = 0;
            self.mark_dirty();
        }
    }

    /// Scroll the results table down by one page, clamped to the row count
    pub fn scroll_down(&mut self) {
        let max = self
            .search
            .result()
            .map(|r| r.rows.len().saturating_sub(1))
            .unwrap_or(0);
        self.scroll = (self.scroll + SCROLL_PAGE).min(max);
        self.mark_dirty();
    }

    /// Scroll the results table up by one page
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(SCROLL_PAGE);
        self.mark_dirty();
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Whether the next loop iteration needs a redraw. Loading and visible
    /// notifications keep redrawing so progress and expiry stay current.
    pub fn should_render(&self) -> bool {
        self.dirty || self.search.is_loading() || self.notification.is_visible()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
