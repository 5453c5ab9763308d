//! # Graft
//!
//! Constructor-parameter resolution for containers built on extracted class
//! metadata. Given a class descriptor, the container works out a value for
//! every constructor parameter (explicit overrides first, then catalog
//! matches by interface, class name and ancestry, then the instance cache),
//! validates each value against the declared type and builds the instance.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use graft::infrastructure::{ConstructorRegistry, Container, InMemoryCatalog};
//! use graft::infrastructure::config::ResolverConfig;
//!
//! let catalog = InMemoryCatalog::from_json(&std::fs::read_to_string("classes.json")?)?;
//! let constructors = ConstructorRegistry::new()
//!     .with("Clock", |_| Ok(SystemClock))
//!     .with("Scheduler", |args| Ok(Scheduler::new(args.object(0)?, args.number(1)?)));
//!
//! let container = Container::new(Arc::new(catalog), constructors, ResolverConfig::default());
//! container.register_value_for_parameter_name("interval", 30);
//! let scheduler = container.get::<Scheduler>("Scheduler").await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - descriptors, values, error type and ports
//! - `application` - override registry, instance cache, resolver, type checker
//! - `infrastructure` - container, in-memory catalog, config, logging

/// Domain layer - descriptors, values and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use graft_domain::*;
}

/// Application layer - the resolution engine
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use graft_application::*;
}

/// Infrastructure layer - container, catalog, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use graft_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::{ParameterResolver, TypeCompatibilityChecker};
pub use infrastructure::{ConstructorRegistry, Container, InMemoryCatalog};
