//! Presentation of the ranked view
//!
//! Renderers receive the stats in ranked order and never reorder them. The
//! only thing done here on top of the core output is the optional zero-count
//! filter and swapping orphan placeholders for configured labels.

mod json;
mod labels;
mod plain;

pub use json::write_json;
pub use labels::Labels;
pub use plain::write_plain;

use serde::Deserialize;

use crate::stats::ResolvedStat;

/// How the ranked view is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Interactive terminal popup
    #[default]
    Dialog,
    /// Plain text table
    Plain,
    /// Pretty-printed JSON
    Json,
}

/// Entries to display, optionally dropping those with no usage
pub fn visible_stats(stats: &[ResolvedStat], hide_zero: bool) -> Vec<&ResolvedStat> {
    stats
        .iter()
        .filter(|stat| !hide_zero || stat.count > 0)
        .collect()
}
