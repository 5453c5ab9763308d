//! Type Compatibility Checker
//!
//! Validates a resolved value against the declared type of the parameter it
//! was resolved for. Object compatibility is answered from the catalog's
//! precomputed interface and ancestry relations, keyed by the instance's
//! runtime class name.

use std::sync::Arc;

use graft_domain::{
    Error, IncompatibilityReason, MetadataCatalog, ParameterDescriptor, Result, Value,
};
use tracing::trace;

use super::ValueSource;

/// Checks resolved values against declared parameter types
#[derive(Clone)]
pub struct TypeCompatibilityChecker {
    catalog: Arc<dyn MetadataCatalog>,
}

impl TypeCompatibilityChecker {
    /// Create a checker over `catalog`
    pub fn new(catalog: Arc<dyn MetadataCatalog>) -> Self {
        Self { catalog }
    }

    /// Accept or reject `value` for `parameter` of `class_name`
    ///
    /// # Rules
    ///
    /// | Value | Accepted when |
    /// |-------|---------------|
    /// | primitive | its kind keyword equals the declared type |
    /// | object, class in catalog | declared type is the class, one of its interfaces, or an ancestor |
    /// | object, class unknown | it came from an override and declared type is the class or an ancestor |
    pub fn check(
        &self,
        class_name: &str,
        parameter: &ParameterDescriptor,
        value: &Value,
        source: ValueSource,
    ) -> Result<()> {
        let expected = parameter.declared_type.as_str();
        let reject = |actual: &str, reason| {
            Err(Error::incompatible(
                class_name,
                parameter.name.as_str(),
                expected,
                actual,
                reason,
            ))
        };

        let instance = match value {
            Value::Primitive(primitive) => {
                let kind = primitive.kind().keyword();
                if kind != expected {
                    return reject(kind, IncompatibilityReason::SimpleTypeMismatch);
                }
                return Ok(());
            }
            Value::Object(instance) => instance,
        };

        let runtime = instance.class_name();
        let is_of_type = runtime == expected;

        match self.catalog.get_by_class_name(runtime) {
            Some(metadata) => {
                if !is_of_type
                    && !metadata.implements_interface(expected)
                    && !self.descends_from(runtime, expected)
                {
                    return reject(runtime, IncompatibilityReason::ObjectTypeMismatch);
                }
            }
            None => {
                if !source.is_override() {
                    return reject(runtime, IncompatibilityReason::MetadataNotFound);
                }
                // no descriptor, so interfaces cannot be enumerated
                if !is_of_type && !self.descends_from(runtime, expected) {
                    return reject(runtime, IncompatibilityReason::ObjectTypeMismatch);
                }
            }
        }

        trace!(
            class = class_name,
            parameter = %parameter.name,
            declared_type = expected,
            runtime_class = runtime,
            "Value accepted"
        );
        Ok(())
    }

    fn descends_from(&self, runtime_class: &str, ancestor: &str) -> bool {
        self.catalog
            .get_by_parent_class_name_without_root(ancestor)
            .iter()
            .any(|descendant| descendant.name == runtime_class)
    }
}
