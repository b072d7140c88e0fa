//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{EmbeddedCatalog, FilesystemStore, SystemClock};
use crate::app::{
    AppContext,
    commands::{bind, catalog, config},
};
use crate::domain::configuration::{self, SettingsSource};
use crate::domain::{BindOptions, BoundPage, ConfigBinder};
use crate::domain::ContactRequest;
use crate::ports::{CatalogSource, PageStore};

pub use crate::app::commands::bind::{BindOutcome, BindRequest, PageReport};
pub use crate::app::commands::catalog::CatalogSection;
pub use crate::app::commands::config::ConfigFormat;
pub use crate::domain::{AppError, BindingStats, FieldError, SiteConfig, SiteSettings, Urgency};

/// Create an `AppContext` backed by the system clock and embedded catalog.
fn create_context() -> AppContext<SystemClock, EmbeddedCatalog> {
    AppContext::new(SystemClock, EmbeddedCatalog::new())
}

// =============================================================================
// Binding API
// =============================================================================

/// Bind an in-memory page with explicit options.
pub fn bind_page(
    html: &str,
    config: &SiteConfig,
    options: &BindOptions,
) -> Result<BoundPage, AppError> {
    ConfigBinder::new(config, options).bind(html)
}

/// Bind a file or a directory of pages.
///
/// Directories are bound in place unless `output` is given.
pub fn bind_path(
    input: &Path,
    output: Option<&Path>,
    request: &BindRequest,
) -> Result<BindOutcome, AppError> {
    if input.is_dir() {
        bind_dir(input, output.unwrap_or(input), request)
    } else {
        bind_file(input, output, request)
    }
}

/// Bind a single page file.
///
/// Without `output` the rewritten HTML is returned in [`BindOutcome::html`].
pub fn bind_file(
    input: &Path,
    output: Option<&Path>,
    request: &BindRequest,
) -> Result<BindOutcome, AppError> {
    if !input.is_file() {
        return Err(AppError::InputNotFound(input.display().to_string()));
    }
    let (source_root, name) = split_file_path(input)?;
    let source = FilesystemStore::new(source_root);
    let ctx = create_context();

    let Some(output) = output else {
        let html = source.read_page(&name)?;
        let bound = bind::bind_html(&ctx, &html, request)?;
        return Ok(BindOutcome {
            pages: vec![PageReport { path: name, stats: bound.stats }],
            html: Some(bound.html),
        });
    };

    let (target_root, target_name) = split_file_path(output)?;
    let target = FilesystemStore::new(target_root);
    let report = bind::bind_page(&ctx, &source, &target, &name, &target_name, request)?;
    Ok(BindOutcome { pages: vec![report], html: None })
}

/// Bind every page under `input_dir`, mirroring them into `output_dir`.
pub fn bind_dir(
    input_dir: &Path,
    output_dir: &Path,
    request: &BindRequest,
) -> Result<BindOutcome, AppError> {
    if !input_dir.is_dir() {
        return Err(AppError::InputNotFound(input_dir.display().to_string()));
    }
    let source = FilesystemStore::new(input_dir);
    let target = FilesystemStore::new(output_dir);
    bind::bind_all(&create_context(), &source, &target, request)
}

fn split_file_path(path: &Path) -> Result<(PathBuf, String), AppError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::config_error(format!("Invalid page path: {}", path.display())))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((parent, name.to_string()))
}

// =============================================================================
// Configuration API
// =============================================================================

/// Load site settings from `path`, or from `./site.toml` when present.
///
/// Environment variables override file values.
pub fn load_settings(path: Option<&Path>) -> Result<SiteSettings, AppError> {
    let cwd = std::env::current_dir()?;
    let source = SettingsSource::resolve(path, &cwd);
    configuration::load_settings(&source, |key| std::env::var(key).ok())
}

/// Read a raw `SITE_CONFIG` record from a JSON file.
pub fn load_record(path: &Path) -> Result<SiteConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::InputNotFound(path.display().to_string()));
    }
    SiteConfig::from_json(&std::fs::read_to_string(path)?)
}

/// Derive the `SITE_CONFIG` record from settings.
pub fn site_config(settings: &SiteSettings) -> SiteConfig {
    settings.to_site_config()
}

/// Render a record as JSON or as a `window.SITE_CONFIG` script.
pub fn render_site_config(record: &SiteConfig, format: ConfigFormat) -> Result<String, AppError> {
    config::render(record, format)
}

// =============================================================================
// Catalog API
// =============================================================================

/// Export a catalog section as pretty JSON.
pub fn catalog_export(section: CatalogSection) -> Result<String, AppError> {
    catalog::export(&create_context(), section)
}

// =============================================================================
// Contact API
// =============================================================================

/// Validate a JSON contact form submission against the catalog's service list.
///
/// Returns the rejected fields; an empty list means the submission is acceptable.
pub fn validate_contact(json: &str) -> Result<Vec<FieldError>, AppError> {
    let request = ContactRequest::from_json(json)?;
    let catalog = create_context().catalog().load()?;
    Ok(request.validate(&catalog.service_choices()))
}
