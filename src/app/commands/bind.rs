//! Bind command: apply a site configuration record to HTML pages.

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{AppError, BindOptions, BindingStats, BoundPage, ConfigBinder, SiteConfig};
use crate::ports::{CatalogSource, Clock, PageStore};

/// What to bind and with which record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindRequest {
    pub config: SiteConfig,
    /// Business name literal baked into the page titles.
    pub template_business_name: String,
}

/// Per-page result of a bind run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReport {
    pub path: String,
    pub stats: BindingStats,
}

/// Result of a bind run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindOutcome {
    pub pages: Vec<PageReport>,
    /// Rewritten HTML when a single page was bound without an output path.
    pub html: Option<String>,
}

impl BindOutcome {
    /// Stats summed over every page.
    pub fn totals(&self) -> BindingStats {
        let mut totals = BindingStats::default();
        for page in &self.pages {
            totals.merge(&page.stats);
        }
        totals
    }
}

impl BindRequest {
    fn options(&self, clock: &impl Clock) -> BindOptions {
        BindOptions::new(self.template_business_name.clone(), clock.current_year())
    }
}

/// Bind a single HTML document held in memory.
pub fn bind_html<C, K>(
    ctx: &AppContext<C, K>,
    html: &str,
    request: &BindRequest,
) -> Result<BoundPage, AppError>
where
    C: Clock,
    K: CatalogSource,
{
    let options = request.options(ctx.clock());
    ConfigBinder::new(&request.config, &options).bind(html)
}

/// Bind one page from `source` into `target`.
pub fn bind_page<C, K>(
    ctx: &AppContext<C, K>,
    source: &impl PageStore,
    target: &impl PageStore,
    path: &str,
    target_path: &str,
    request: &BindRequest,
) -> Result<PageReport, AppError>
where
    C: Clock,
    K: CatalogSource,
{
    let html = source.read_page(path)?;
    let bound = bind_html(ctx, &html, request)?;
    target.write_page(target_path, &bound.html)?;
    tracing::debug!(page = path, bindings = bound.stats.total(), "bound page");
    Ok(PageReport { path: path.to_string(), stats: bound.stats })
}

/// Bind every page of `source`, writing each to the same relative path in `target`.
///
/// Pages are processed in sorted path order. `source` and `target` may share a root.
pub fn bind_all<C, K>(
    ctx: &AppContext<C, K>,
    source: &impl PageStore,
    target: &impl PageStore,
    request: &BindRequest,
) -> Result<BindOutcome, AppError>
where
    C: Clock,
    K: CatalogSource,
{
    let options = request.options(ctx.clock());
    let binder = ConfigBinder::new(&request.config, &options);

    // Bind every page before writing any.
    let mut bound_pages = Vec::new();
    for path in source.list_pages()? {
        let html = source.read_page(&path)?;
        let bound = binder.bind(&html)?;
        bound_pages.push((path, bound));
    }

    if bound_pages.is_empty() {
        tracing::warn!("no HTML pages found to bind");
    }

    let mut pages: Vec<PageReport> = Vec::with_capacity(bound_pages.len());
    for (path, bound) in bound_pages {
        if let Err(err) = target.write_page(&path, &bound.html) {
            let written: Vec<&str> = pages.iter().map(|p| p.path.as_str()).collect();
            tracing::error!(page = %path, written = ?written, "failed to write bound page");
            return Err(err);
        }
        tracing::debug!(page = %path, bindings = bound.stats.total(), "bound page");
        pages.push(PageReport { path, stats: bound.stats });
    }
    Ok(BindOutcome { pages, html: None })
}
