use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::App;
use crate::notification::render_notification;
use crate::results;

const TITLE: &str = " TheraFind - Companion Diagnostics & Precision Medicine ";
const HELP_LINE: &str = " Tab: next field | Enter: search | Ctrl+U: clear field | Esc: quit ";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let form_height = self.form.fields().len() as u16 + 2;

        let layout = Layout::vertical([
            Constraint::Length(1),           // Title
            Constraint::Length(form_height), // Search form
            Constraint::Length(1),           // Status / error line
            Constraint::Min(3),              // Results pane
            Constraint::Length(1),           // Help line at bottom
        ])
        .split(frame.area());

        self.render_title(frame, layout[0]);
        self.render_form(frame, layout[1]);
        self.render_status_line(frame, layout[2]);
        results::render_pane(self, frame, layout[3]);
        self.render_help_line(frame, layout[4]);

        // Render notification overlay last so it appears on top
        render_notification(frame, &mut self.notification);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, area);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let label_width = self
            .form
            .fields()
            .iter()
            .map(|f| f.label.len())
            .max()
            .unwrap_or(0);

        let lines: Vec<Line> = self
            .form
            .fields()
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let focused = i == self.form.focused();
                let label_style = if focused {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let mut spans = vec![
                    Span::styled(format!(" {:>label_width$} ", field.label), label_style),
                    Span::raw(field.value.clone()),
                ];
                if focused {
                    spans.push(Span::styled("▌", Style::default().fg(Color::Yellow)));
                }
                Line::from(spans)
            })
            .collect();

        let submit_label = if self.search.is_loading() {
            " Searching... "
        } else {
            " Search "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(Span::styled(
                submit_label,
                Style::default().fg(Color::Cyan),
            )))
            .border_style(Style::default().fg(Color::DarkGray));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Error messages render here, above the results pane, without
    /// suppressing the form
    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        if let Some(message) = self.search.error() {
            let line = Line::from(Span::styled(
                format!(" ⚠ {} ", message),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(Paragraph::new(line), area);
        }
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let help = Paragraph::new(Line::from(Span::styled(
            HELP_LINE,
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(help, area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
