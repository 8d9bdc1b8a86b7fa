use crate::stats::types::{ResolvedStat, TOP_N};

/// Order by descending count and keep the first `TOP_N`
///
/// The sort is stable: equal counts keep their incoming order. Zero counts
/// are kept; hiding them is a display decision.
pub fn rank(mut stats: Vec<ResolvedStat>) -> Vec<ResolvedStat> {
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats.truncate(TOP_N);
    stats
}
