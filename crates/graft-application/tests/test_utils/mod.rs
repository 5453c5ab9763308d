//! Shared fixtures: a linear-scan catalog and a minimal construction delegate

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use graft_application::{InstanceCache, OverrideRegistry, ParameterResolver};
use graft_domain::{
    ClassDescriptor, ConstructionDelegate, Instance, MetadataCatalog, Result, Value,
};

/// Catalog that scans its descriptors on every query and counts queries
pub struct StubCatalog {
    classes: Vec<ClassDescriptor>,
    queries: AtomicUsize,
}

impl StubCatalog {
    pub fn new(classes: Vec<ClassDescriptor>) -> Self {
        Self {
            classes,
            queries: AtomicUsize::new(0),
        }
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn count(&self) {
        self.queries.fetch_add(1, Ordering::SeqCst);
    }

    fn find(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.iter().find(|c| c.name == name)
    }

    fn has_ancestor(&self, class: &ClassDescriptor, ancestor: &str) -> bool {
        let mut seen = HashSet::new();
        let mut current = class.parent.name();
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            if !seen.insert(parent) {
                return false;
            }
            current = self.find(parent).and_then(|p| p.parent.name());
        }
        false
    }
}

impl MetadataCatalog for StubCatalog {
    fn get_by_class_name(&self, name: &str) -> Option<&ClassDescriptor> {
        self.count();
        self.find(name)
    }

    fn get_by_interface(&self, name: &str) -> Vec<&ClassDescriptor> {
        self.count();
        self.classes
            .iter()
            .filter(|c| c.implements_interface(name))
            .collect()
    }

    fn get_by_parent_class_name_without_root(&self, name: &str) -> Vec<&ClassDescriptor> {
        self.count();
        self.classes
            .iter()
            .filter(|c| self.has_ancestor(c, name))
            .collect()
    }

    fn get_by_fqcn(&self, fqcn: &str) -> Option<&ClassDescriptor> {
        self.count();
        self.classes.iter().find(|c| c.fqcn == fqcn)
    }

    fn len(&self) -> usize {
        self.classes.len()
    }
}

/// Object built by [`TestDelegate`]: remembers its class and arguments
#[derive(Debug)]
pub struct Built {
    pub class: String,
    pub args: Vec<Value>,
}

/// Minimal container: cache, resolve, build, cache
pub struct TestDelegate {
    pub resolver: ParameterResolver,
    delays: HashMap<String, Duration>,
    completed: Mutex<Vec<String>>,
}

impl TestDelegate {
    pub fn with_delay(mut self, class: &str, delay: Duration) -> Self {
        self.delays.insert(class.to_string(), delay);
        self
    }

    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().expect("lock").clone()
    }
}

#[async_trait]
impl ConstructionDelegate for TestDelegate {
    async fn get_by_class_data(&self, descriptor: &ClassDescriptor) -> Result<Instance> {
        if let Some(instance) = self.resolver.instances().get(&descriptor.name) {
            return Ok(instance);
        }
        let args = self.resolver.resolve_parameters(descriptor, self).await?;
        if let Some(delay) = self.delays.get(&descriptor.name) {
            tokio::time::sleep(*delay).await;
        }
        self.completed
            .lock()
            .expect("lock")
            .push(descriptor.name.clone());
        let instance = Instance::new(
            descriptor.name.clone(),
            Built {
                class: descriptor.name.clone(),
                args,
            },
        );
        Ok(self
            .resolver
            .instances()
            .get_or_insert(descriptor.name.clone(), instance))
    }
}

/// Catalog plus a delegate whose resolver reads from it
pub fn fixture(classes: Vec<ClassDescriptor>) -> (Arc<StubCatalog>, TestDelegate) {
    let catalog = Arc::new(StubCatalog::new(classes));
    let resolver = ParameterResolver::new(
        catalog.clone(),
        Arc::new(OverrideRegistry::new()),
        Arc::new(InstanceCache::new()),
    );
    let delegate = TestDelegate {
        resolver,
        delays: HashMap::new(),
        completed: Mutex::new(Vec::new()),
    };
    (catalog, delegate)
}

/// Class name of an object value
pub fn class_of(value: &Value) -> &str {
    value.as_instance().expect("object value").class_name()
}
