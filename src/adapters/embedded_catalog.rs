//! Catalog source backed by YAML assets embedded in the binary.

use include_dir::{Dir, include_dir};
use serde::de::DeserializeOwned;

use crate::domain::{AppError, Catalog};
use crate::ports::CatalogSource;

/// Embedded catalog directory.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");

const SERVICES_ASSET: &str = "services.yml";
const FAQS_ASSET: &str = "faqs.yml";
const TESTIMONIALS_ASSET: &str = "testimonials.yml";

/// Loads the catalog shipped with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogSource for EmbeddedCatalog {
    fn load(&self) -> Result<Catalog, AppError> {
        Ok(Catalog::new(
            load_asset(SERVICES_ASSET)?,
            load_asset(FAQS_ASSET)?,
            load_asset(TESTIMONIALS_ASSET)?,
        ))
    }
}

fn load_asset<T: DeserializeOwned>(name: &str) -> Result<Vec<T>, AppError> {
    let invalid = |reason: String| AppError::InvalidCatalog { asset: name.to_string(), reason };

    let file = CATALOG_DIR.get_file(name).ok_or_else(|| invalid("asset is missing".into()))?;
    let content = file.contents_utf8().ok_or_else(|| invalid("not valid UTF-8".into()))?;
    serde_yaml::from_str(content).map_err(|e| invalid(e.to_string()))
}
