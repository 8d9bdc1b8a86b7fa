use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::stats::ResolvedStat;

/// State for the stats popup
#[derive(Debug, Clone)]
pub struct StatsDialog {
    chart_name: String,
    entries: Vec<ResolvedStat>,
    selected: usize,
    closed: bool,
}

impl StatsDialog {
    pub fn new(chart_name: impl Into<String>, entries: Vec<ResolvedStat>) -> Self {
        Self {
            chart_name: chart_name.into(),
            entries,
            selected: 0,
            closed: false,
        }
    }

    pub fn chart_name(&self) -> &str {
        &self.chart_name
    }

    pub fn entries(&self) -> &[ResolvedStat] {
        &self.entries
    }

    /// Highlighted row, `None` when there is nothing to show
    pub fn selected(&self) -> Option<usize> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.entries.len().saturating_sub(1);
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Handle a key press. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.close();
                return true;
            }
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => self.close(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
#[path = "dialog_state_tests.rs"]
mod dialog_state_tests;
