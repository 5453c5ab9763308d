//! # Domain Layer
//!
//! Core types for constructor-parameter resolution: class descriptors, resolved
//! values, the error type and the ports the resolution engine consumes.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Class and parameter descriptors |
//! | [`value_objects`] | Values, instances, constructor arguments, override keys |
//! | [`ports`] | Catalog and construction delegate traits |
//! | [`error`] | Domain error type |
//! | [`constants`] | Primitive keywords and key separators |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{ClassDescriptor, ConstructorVisibility, ParameterDescriptor, ParentClass};
pub use error::{Error, IncompatibilityReason, Result};
pub use ports::{ConstructionDelegate, MetadataCatalog};
pub use value_objects::{Arguments, Instance, OverrideKey, Primitive, PrimitiveKind, Value};
