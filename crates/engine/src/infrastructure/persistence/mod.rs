//! World property store adapters.

mod file_store;
mod memory_store;

pub use file_store::JsonFilePropertyStore;
pub use memory_store::InMemoryPropertyStore;
