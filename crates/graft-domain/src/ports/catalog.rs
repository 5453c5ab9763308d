//! Metadata Catalog Port
//!
//! Read-only query surface over the immutable collection of class
//! descriptors produced by extraction. The resolver never walks descriptors
//! itself; interface and ancestry relations are answered here.

use crate::entities::ClassDescriptor;

/// Query surface over all class descriptors of an application
///
/// Implementations precompute the interface-implements and parent-extends
/// relations so lookups never require runtime introspection.
pub trait MetadataCatalog: Send + Sync {
    /// Descriptor whose class name equals `name`
    fn get_by_class_name(&self, name: &str) -> Option<&ClassDescriptor>;

    /// All descriptors directly implementing the interface `name`
    fn get_by_interface(&self, name: &str) -> Vec<&ClassDescriptor>;

    /// All descriptors whose ancestor chain contains `name`
    ///
    /// The chain is walked through parent links and never includes the
    /// root sentinel.
    fn get_by_parent_class_name_without_root(&self, name: &str) -> Vec<&ClassDescriptor>;

    /// Descriptor with the fully-qualified class name `fqcn`
    fn get_by_fqcn(&self, fqcn: &str) -> Option<&ClassDescriptor>;

    /// Number of descriptors
    fn len(&self) -> usize;

    /// Whether the catalog holds no descriptors
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
