//! Override Registry
//!
//! Explicit values that bypass catalog lookup for a parameter, keyed either by
//! bare parameter name or by `Class/parameter`. Registration performs no
//! validation; a mismatching value is rejected later by the compatibility
//! check when it is resolved.

use dashmap::DashMap;
use graft_domain::{ClassDescriptor, OverrideKey, Value};
use tracing::debug;

/// Name-keyed and class-scoped parameter overrides
#[derive(Debug, Default)]
pub struct OverrideRegistry {
    values: DashMap<OverrideKey, Value>,
}

impl OverrideRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` for every parameter called `parameter_name`
    pub fn register_global(&self, parameter_name: impl Into<String>, value: impl Into<Value>) {
        self.insert(OverrideKey::global(parameter_name), value.into());
    }

    /// Store `value` for `parameter_name` of `class_name` only
    pub fn register_scoped(
        &self,
        class_name: impl Into<String>,
        parameter_name: impl Into<String>,
        value: impl Into<Value>,
    ) {
        self.insert(OverrideKey::scoped(class_name, parameter_name), value.into());
    }

    /// Store `value` for `parameter_name` of the class described by `descriptor`
    pub fn register_scoped_by_type(
        &self,
        descriptor: &ClassDescriptor,
        parameter_name: impl Into<String>,
        value: impl Into<Value>,
    ) {
        self.register_scoped(descriptor.name.as_str(), parameter_name, value);
    }

    fn insert(&self, key: OverrideKey, value: Value) {
        debug!(key = %key, value_type = value.type_name(), "Registering parameter override");
        // last write wins
        self.values.insert(key, value);
    }

    /// Value registered under `key`
    pub fn get(&self, key: &OverrideKey) -> Option<Value> {
        self.values.get(key).map(|entry| entry.value().clone())
    }

    /// Class-scoped override for `class_name`/`parameter_name`
    pub fn scoped(&self, class_name: &str, parameter_name: &str) -> Option<Value> {
        self.get(&OverrideKey::scoped(class_name, parameter_name))
    }

    /// Global override for `parameter_name`
    pub fn global(&self, parameter_name: &str) -> Option<Value> {
        self.get(&OverrideKey::global(parameter_name))
    }

    /// Whether any override (scoped or global) applies to this parameter
    pub fn contains_for(&self, class_name: &str, parameter_name: &str) -> bool {
        self.values
            .contains_key(&OverrideKey::scoped(class_name, parameter_name))
            || self.values.contains_key(&OverrideKey::global(parameter_name))
    }

    /// Number of registered overrides
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no override is registered
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Registered keys, sorted
    pub fn keys(&self) -> Vec<OverrideKey> {
        let mut keys: Vec<OverrideKey> = self.values.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }
}
