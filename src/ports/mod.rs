mod catalog_source;
mod clock;
mod page_store;

pub use catalog_source::CatalogSource;
pub use clock::Clock;
pub use page_store::{PAGE_EXTENSIONS, PageStore, is_page_path};
