//! Test double for `PageStore`.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::PageStore;

/// In-memory implementation of `PageStore` for unit tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryPageStore {
    pages: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, path: &str, content: &str) -> Self {
        self.pages.lock().unwrap().insert(path.to_string(), content.to_string());
        self
    }

    pub fn page(&self, path: &str) -> Option<String> {
        self.pages.lock().unwrap().get(path).cloned()
    }

    pub fn paths(&self) -> Vec<String> {
        self.pages.lock().unwrap().keys().cloned().collect()
    }
}

impl PageStore for MemoryPageStore {
    fn read_page(&self, path: &str) -> Result<String, AppError> {
        self.pages.lock().unwrap().get(path).cloned().ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock page not found"))
        })
    }

    fn write_page(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.pages.lock().unwrap().insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn list_pages(&self) -> Result<Vec<String>, AppError> {
        Ok(self
            .pages
            .lock()
            .unwrap()
            .keys()
            .filter(|path| crate::ports::is_page_path(path))
            .cloned()
            .collect())
    }
}
