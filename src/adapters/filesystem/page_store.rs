//! `PageStore` implementation for `FilesystemStore`.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::{PageStore, is_page_path};

use super::FilesystemStore;

impl PageStore for FilesystemStore {
    fn read_page(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_page(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(AppError::from)?;
        }
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn list_pages(&self) -> Result<Vec<String>, AppError> {
        let mut pages = Vec::new();
        collect_pages(&self.root, "", &mut pages)?;
        pages.sort();
        Ok(pages)
    }
}

fn collect_pages(dir: &Path, prefix: &str, pages: &mut Vec<String>) -> Result<(), AppError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 path");
            continue;
        };
        let relative =
            if prefix.is_empty() { name.to_string() } else { format!("{prefix}/{name}") };

        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            collect_pages(&entry.path(), &relative, pages)?;
        } else if file_type.is_file() && is_page_path(&relative) {
            pages.push(relative);
        }
    }
    Ok(())
}
