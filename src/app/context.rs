use crate::ports::{CatalogSource, Clock};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: Clock, K: CatalogSource> {
    clock: C,
    catalog: K,
}

impl<C: Clock, K: CatalogSource> AppContext<C, K> {
    /// Create a new application context.
    pub fn new(clock: C, catalog: K) -> Self {
        Self { clock, catalog }
    }

    /// Get a reference to the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Get a reference to the catalog source.
    pub fn catalog(&self) -> &K {
        &self.catalog
    }
}
