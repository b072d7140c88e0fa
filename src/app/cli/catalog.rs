//! Catalog command implementation.

use crate::app::api::{self, CatalogSection};
use crate::domain::AppError;

pub fn run_catalog(section: &str) -> Result<(), AppError> {
    let section: CatalogSection = section.parse()?;
    println!("{}", api::catalog_export(section)?);
    Ok(())
}
