//! Bundled checkpoint providers

mod memory;

pub use memory::MemoryCheckpointProvider;
