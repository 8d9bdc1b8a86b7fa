//! Stats module for ranking the ranges a chart uses
//!
//! Three stages run back to back on every call: collect the distinct range
//! references of a chart, resolve them against the catalog and usage table,
//! then rank and truncate for display. Nothing is cached between calls.

mod collector;
mod ranker;
mod resolver;
mod stats_resolver;
mod types;

// Re-export public types
pub use collector::{ReferenceSet, collect_references};
pub use ranker::rank;
pub use resolver::{CatalogIndex, coerce_count, resolve};
pub use stats_resolver::StatsResolver;
pub use types::{ORPHAN_FOLDER_NAME, ORPHAN_RANGE_NAME, ResolvedStat, TOP_N};
