//! # Infrastructure Layer
//!
//! Concrete pieces an application needs around the resolution engine.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Container and constructor registry |
//! | [`catalog`] | Indexed in-memory metadata catalog |
//! | [`config`] | Figment-based configuration loading |
//! | [`logging`] | Tracing subscriber setup |
//! | [`error_ext`] | Context helpers mapping foreign errors |
//! | [`constants`] | File names, environment prefixes, defaults |

pub mod catalog;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use catalog::{InMemoryCatalog, InMemoryCatalogBuilder};
pub use config::{AppConfig, ConfigLoader};
pub use di::{Constructor, ConstructorRegistry, Container};
pub use error_ext::ErrorContext;
