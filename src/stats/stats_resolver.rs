//! Entry point tying reference collection, resolution and ranking together

use crate::model::{Catalog, Chart, UsageTable};
use crate::stats::collector::collect_references;
use crate::stats::ranker::rank;
use crate::stats::resolver::resolve;
use crate::stats::types::ResolvedStat;
use crate::storage::{CatalogProvider, UsageProvider};

/// Computes the ranked top-N usage view for one chart
///
/// Stateless: every call rebuilds what it needs from its inputs and leaves
/// them untouched, so it can be invoked repeatedly or from several threads.
pub struct StatsResolver;

impl StatsResolver {
    /// Run the full pipeline against snapshots already in memory
    pub fn resolve(chart: &Chart, catalog: &Catalog, usage: &UsageTable) -> Vec<ResolvedStat> {
        let references = collect_references(chart);

        #[cfg(debug_assertions)]
        log::debug!(
            "Chart {:?}: {} distinct range references",
            chart.name,
            references.len()
        );

        rank(resolve(&references, catalog, usage))
    }

    /// Load one snapshot from each provider, then run the pipeline
    pub fn analyze<C, U>(chart: &Chart, catalog: &C, usage: &U) -> Vec<ResolvedStat>
    where
        C: CatalogProvider + ?Sized,
        U: UsageProvider + ?Sized,
    {
        let catalog = catalog.load_catalog();
        let usage = usage.load_usage();
        Self::resolve(chart, &catalog, &usage)
    }
}

#[cfg(test)]
#[path = "stats_resolver_tests.rs"]
mod stats_resolver_tests;
