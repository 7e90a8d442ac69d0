//! Results pane rendering
//!
//! A pure function of the settled search state: a table when rows exist,
//! a "no results" indicator after a settled empty search, and a progress
//! message while a submission is in flight.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use serde_json::{Map, Value};

use crate::app::App;
use crate::search::client::{SearchResult, display_value};

/// Project one result row onto the column order. Missing keys render empty.
pub fn row_cells(columns: &[String], row: &Map<String, Value>) -> Vec<String> {
    columns
        .iter()
        .map(|col| row.get(col).map(display_value).unwrap_or_default())
        .collect()
}

/// Render the results pane
pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(results_title(app))
        .border_style(Style::default().fg(Color::DarkGray));

    if app.search.is_loading() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "Searching...",
            Style::default().fg(Color::Cyan),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    match app.search.result() {
        Some(result) if !result.rows.is_empty() => {
            render_table(result, app.scroll, frame, area, block);
        }
        Some(_) => {
            // A search settled with zero rows
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "No results found.",
                Style::default().fg(Color::Gray),
            )))
            .block(block);
            frame.render_widget(paragraph, area);
        }
        None => {
            // Nothing settled yet (or the last submission failed; the error
            // line above the pane carries the message)
            frame.render_widget(Paragraph::new("").block(block), area);
        }
    }
}

fn results_title(app: &App) -> Line<'static> {
    match app.search.result() {
        Some(result) if !result.rows.is_empty() => Line::from(Span::styled(
            format!(" Found {} matching results ", result.rows.len()),
            Style::default().fg(Color::Cyan),
        )),
        _ => Line::from(Span::styled(
            " Results ",
            Style::default().fg(Color::Cyan),
        )),
    }
}

fn render_table(
    result: &SearchResult,
    scroll: usize,
    frame: &mut Frame,
    area: Rect,
    block: Block<'_>,
) {
    let header = Row::new(
        result
            .columns
            .iter()
            .map(|col| Cell::from(col.as_str()))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan))
    .bottom_margin(1);

    let rows = result.rows.iter().map(|row| {
        Row::new(
            row_cells(&result.columns, row)
                .into_iter()
                .map(Cell::from)
                .collect::<Vec<_>>(),
        )
    });

    let column_count = result.columns.len().max(1) as u32;
    let widths = vec![Constraint::Ratio(1, column_count); column_count as usize];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);

    let mut table_state = TableState::default().with_offset(scroll);
    frame.render_stateful_widget(table, area, &mut table_state);
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;
