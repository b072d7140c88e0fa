//! Page storage operations.
//!
//! This port provides HTML page I/O scoped to a site root. Paths are
//! `/`-separated and relative to that root.

use crate::domain::AppError;

/// File extensions treated as bindable pages.
pub const PAGE_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// Port for reading and writing a site's HTML pages.
///
/// Implementations must reject paths that escape the root boundary.
pub trait PageStore {
    /// Read a page as UTF-8 text.
    fn read_page(&self, path: &str) -> Result<String, AppError>;

    /// Write a page, creating parent directories as needed.
    fn write_page(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// List every page under the root, sorted.
    fn list_pages(&self) -> Result<Vec<String>, AppError>;
}

/// Whether `path` names an HTML page.
pub fn is_page_path(path: &str) -> bool {
    std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PAGE_EXTENSIONS.iter().any(|p| ext.eq_ignore_ascii_case(p)))
}
