//! rangestats library - rank the ranges a chart uses most
//!
//! This library exposes the stats core together with the storage,
//! configuration and presentation pieces the binary is built from.

pub mod config;
pub mod dialog;
pub mod error;
pub mod model;
pub mod report;
pub mod stats;
pub mod storage;

#[cfg(test)]
pub mod test_utils;
pub mod widgets;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::RangeStatsError;
pub use model::{Catalog, Chart, UsageTable};
pub use stats::{ResolvedStat, StatsResolver};
