pub mod ports;

pub use fixed_clock::FixedClock;
pub use html::attribute_values;
pub use ports::MemoryPageStore;
