//! Catalog command: export catalog sections as JSON.

use std::fmt;
use std::str::FromStr;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{CatalogSource, Clock};

/// Exportable catalog section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSection {
    Services,
    Featured,
    Faqs,
    Testimonials,
    Choices,
}

impl CatalogSection {
    pub const ALL: [CatalogSection; 5] = [
        CatalogSection::Services,
        CatalogSection::Featured,
        CatalogSection::Faqs,
        CatalogSection::Testimonials,
        CatalogSection::Choices,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CatalogSection::Services => "services",
            CatalogSection::Featured => "featured",
            CatalogSection::Faqs => "faqs",
            CatalogSection::Testimonials => "testimonials",
            CatalogSection::Choices => "choices",
        }
    }
}

impl FromStr for CatalogSection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CatalogSection::ALL.into_iter().find(|section| section.as_str() == s).ok_or_else(|| {
            let names: Vec<_> = CatalogSection::ALL.iter().map(|s| s.as_str()).collect();
            AppError::config_error(format!(
                "Unknown catalog section '{s}': expected one of {}",
                names.join(", ")
            ))
        })
    }
}

impl fmt::Display for CatalogSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Export `section` as pretty-printed JSON.
pub fn export<C, K>(ctx: &AppContext<C, K>, section: CatalogSection) -> Result<String, AppError>
where
    C: Clock,
    K: CatalogSource,
{
    let catalog = ctx.catalog().load()?;
    let json = match section {
        CatalogSection::Services => serde_json::to_string_pretty(catalog.services())?,
        CatalogSection::Featured => serde_json::to_string_pretty(&catalog.featured_services())?,
        CatalogSection::Faqs => serde_json::to_string_pretty(catalog.faqs())?,
        CatalogSection::Testimonials => serde_json::to_string_pretty(&catalog.testimonials())?,
        CatalogSection::Choices => serde_json::to_string_pretty(&catalog.service_choices())?,
    };
    Ok(json)
}
