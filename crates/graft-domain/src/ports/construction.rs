//! Construction Delegate Port
//!
//! Implemented by the owning container. The resolver calls it whenever a
//! parameter resolves to a catalog class and needs a live instance, which may
//! recursively trigger further parameter resolution.

use async_trait::async_trait;

use crate::entities::ClassDescriptor;
use crate::error::Result;
use crate::value_objects::Instance;

/// Construction-on-demand for eligible descriptors
#[async_trait]
pub trait ConstructionDelegate: Send + Sync {
    /// Return the cached instance for `descriptor`, constructing and caching it first if needed
    ///
    /// Must only be invoked with eligible descriptors (concrete, public constructor).
    async fn get_by_class_data(&self, descriptor: &ClassDescriptor) -> Result<Instance>;
}
