use crate::domain::{AppError, Catalog};

/// Port for loading the site catalog.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog, AppError>;
}
