use crate::model::{Catalog, UsageTable};

/// Source of the catalog snapshot. An unavailable catalog is an empty one.
pub trait CatalogProvider {
    fn load_catalog(&self) -> Catalog;
}

/// Source of the usage table snapshot. An unavailable table is an empty one.
pub trait UsageProvider {
    fn load_usage(&self) -> UsageTable;
}

impl CatalogProvider for Catalog {
    fn load_catalog(&self) -> Catalog {
        self.clone()
    }
}

impl UsageProvider for UsageTable {
    fn load_usage(&self) -> UsageTable {
        self.clone()
    }
}
