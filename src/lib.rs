//! sitebind: Bind shop site configuration into static HTML pages.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    BindOutcome, BindRequest, CatalogSection, ConfigFormat, PageReport, bind_dir, bind_file,
    bind_page, bind_path, catalog_export, load_record, load_settings, render_site_config,
    site_config, validate_contact,
};
pub use domain::{
    AppError, BindOptions, BindingStats, BoundPage, ContactRequest, FieldError, HrefKind,
    MapLinkKind, SiteConfig, SiteSettings, TEMPLATE_BUSINESS_NAME, Urgency,
};
