//! Configuration
//!
//! Figment-based loading of [`AppConfig`]: defaults, then a TOML file, then
//! `GRAFT__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, OverrideValue, OverridesConfig, ResolverConfig};
