//! Dependency injection
//!
//! [`Container`] drives construction through the resolution engine;
//! [`ConstructorRegistry`] supplies the factories it calls.

pub mod constructors;
pub mod container;

pub use constructors::{Constructor, ConstructorRegistry};
pub use container::Container;
