//! Shared test utilities for rangestats
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::model::{Catalog, Folder, Range};
    use crate::stats::ReferenceSet;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Two folders, two ranges each: r1..r4
    pub fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Folder::new(
                "f1",
                "Openings",
                vec![Range::new("r1", "Aggro"), Range::new("r2", "Balanced")],
            ),
            Folder::new(
                "f2",
                "Defense",
                vec![Range::new("r3", "Call"), Range::new("r4", "Fold")],
            ),
        ])
    }

    /// Reference set holding `ids` in the given order
    pub fn references(ids: &[&str]) -> ReferenceSet {
        let mut references = ReferenceSet::default();
        for id in ids {
            references.insert(id);
        }
        references
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
