mod memory_page_store;

pub use self::memory_page_store::MemoryPageStore;
