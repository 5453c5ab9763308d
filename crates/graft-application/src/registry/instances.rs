//! Instance Cache
//!
//! Singletons keyed by class name, plus manually seeded instances keyed by
//! the declared-type string they should satisfy. Entries are never evicted
//! here.

use dashmap::DashMap;
use graft_domain::Instance;
use tracing::trace;

/// Type-keyed store of constructed instances
#[derive(Debug, Default)]
pub struct InstanceCache {
    instances: DashMap<String, Instance>,
}

impl InstanceCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached instance for `key`
    pub fn get(&self, key: &str) -> Option<Instance> {
        self.instances.get(key).map(|entry| entry.value().clone())
    }

    /// Store `instance` under `key`, replacing any previous entry
    pub fn insert(&self, key: impl Into<String>, instance: Instance) {
        let key = key.into();
        trace!(key = %key, class = instance.class_name(), "Caching instance");
        self.instances.insert(key, instance);
    }

    /// Store `instance` unless `key` is already cached; returns the cached entry
    ///
    /// Two constructions racing for the same key converge on the first one stored.
    pub fn get_or_insert(&self, key: impl Into<String>, instance: Instance) -> Instance {
        self.instances
            .entry(key.into())
            .or_insert(instance)
            .value()
            .clone()
    }

    /// Whether `key` is cached
    pub fn contains(&self, key: &str) -> bool {
        self.instances.contains_key(key)
    }

    /// Number of cached instances
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
