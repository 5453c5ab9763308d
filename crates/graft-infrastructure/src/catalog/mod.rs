//! Metadata catalog implementations

pub mod in_memory;

pub use in_memory::{InMemoryCatalog, InMemoryCatalogBuilder};
