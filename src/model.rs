//! In-memory entities the stats core operates on
//!
//! A `Chart` is supplied by the caller; `Catalog` and `UsageTable` are
//! read-only snapshots handed over by the storage layer.

mod catalog;
mod chart;
mod usage;

pub use catalog::{Catalog, Folder, Range};
pub use chart::{Button, ButtonKind, Chart, EXIT, LABEL_ONLY, LinkButton, LinkedItem};
pub use usage::UsageTable;
