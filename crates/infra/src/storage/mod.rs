//! `KeyValueStore` adapters
//!
//! `FileKeyValueStore` persists to a JSON object file and is what the binary
//! uses; `MemoryKeyValueStore` backs tests and ephemeral sessions.

pub mod file;
pub mod memory;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
