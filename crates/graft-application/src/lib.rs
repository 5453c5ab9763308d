//! # Application Layer
//!
//! The constructor-parameter resolution engine. It consumes the catalog and
//! construction ports declared in `graft-domain` and owns no I/O.
//!
//! ## Data flow
//!
//! ```text
//! Container ──resolve_parameters──► ParameterResolver
//!                                     │  per parameter, in order:
//!                                     ├─► OverrideRegistry
//!                                     ├─► MetadataCatalog ──► ConstructionDelegate (recursive)
//!                                     ├─► InstanceCache
//!                                     └─► TypeCompatibilityChecker
//! ```

pub mod registry;
pub mod resolution;

pub use registry::{InstanceCache, OverrideRegistry};
pub use resolution::{ParameterResolver, TypeCompatibilityChecker, ValueSource};
