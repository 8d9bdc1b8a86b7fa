use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
};

use super::dialog_state::StatsDialog;
use crate::report::Labels;
use crate::widgets::popup;

const MIN_WIDTH: u16 = 30;
const MAX_WIDTH: u16 = 90;
const DIALOG_FOOTER: &str = "↑↓/jk move · q/Esc close";

/// Render the stats popup
///
/// Returns the popup area, or `None` when the terminal is too small.
pub fn render_dialog(frame: &mut Frame, dialog: &StatsDialog, labels: &Labels) -> Option<Rect> {
    let frame_area = frame.area();

    if frame_area.width < MIN_WIDTH || frame_area.height < 6 {
        return None;
    }

    // Borders + column header + rows + footer
    let content_rows = dialog.entries().len().max(1) as u16;
    let popup_height = (content_rows + 4).min(frame_area.height);
    let popup_width = (frame_area.width.saturating_sub(4)).clamp(MIN_WIDTH, MAX_WIDTH);

    let popup_area = popup::centered_popup(frame_area, popup_width, popup_height);
    popup::clear_area(frame, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", labels.heading(dialog.chart_name())))
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Table
            Constraint::Length(1), // Footer
        ])
        .split(inner_area);

    if dialog.entries().is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            labels.empty.as_str(),
            Style::default().fg(Color::DarkGray),
        )))
        .centered();
        frame.render_widget(empty, chunks[0]);
    } else {
        let table = build_table(dialog, labels);
        let mut state = TableState::default().with_selected(dialog.selected());
        frame.render_stateful_widget(table, chunks[0], &mut state);
    }

    let footer = Line::from(Span::styled(
        DIALOG_FOOTER,
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(footer).centered(), chunks[1]);

    Some(popup_area)
}

/// Width of the count column: the widest count, at least the header width
fn count_width(dialog: &StatsDialog) -> usize {
    dialog
        .entries()
        .iter()
        .map(|stat| stat.count.to_string().len())
        .max()
        .unwrap_or(0)
        .max(4)
}

fn build_table<'a>(dialog: &'a StatsDialog, labels: &'a Labels) -> Table<'a> {
    let count_width = count_width(dialog);

    let header = Row::new(["#", "Folder", "Range", "Uses"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows = build_rows(dialog, labels, count_width);

    Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(count_width as u16),
        ],
    )
    .header(header)
    .row_highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn build_rows<'a>(dialog: &'a StatsDialog, labels: &'a Labels, width: usize) -> Vec<Row<'a>> {
    dialog
        .entries()
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            let style = if stat.orphan {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new([
                format!("{:>2}", i + 1),
                labels.folder(stat).to_string(),
                labels.range(stat).to_string(),
                format!("{:>width$}", stat.count),
            ])
            .style(style)
        })
        .collect()
}

#[cfg(test)]
#[path = "dialog_render_tests.rs"]
mod dialog_render_tests;
