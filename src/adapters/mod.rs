pub mod embedded_catalog;
pub mod filesystem;
pub mod system_clock;

pub use embedded_catalog::EmbeddedCatalog;
pub use filesystem::FilesystemStore;
pub use system_clock::SystemClock;
