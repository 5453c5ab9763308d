//! In-memory metadata catalog
//!
//! Holds the descriptors of one application and answers the catalog queries
//! from indices computed once at build time. Ancestor chains are walked
//! through parent links by class name; the walk never records the root
//! sentinel and stops at a parent the catalog does not know, or when a
//! malformed parent loop revisits a class.

use std::collections::{HashMap, HashSet};

use graft_domain::error::{Error, Result};
use graft_domain::{ClassDescriptor, MetadataCatalog};
use tracing::{debug, warn};

/// Immutable, indexed collection of class descriptors
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    descriptors: Vec<ClassDescriptor>,
    by_fqcn: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    by_interface: HashMap<String, Vec<usize>>,
    by_ancestor: HashMap<String, Vec<usize>>,
}

impl InMemoryCatalog {
    /// Start building a catalog
    pub fn builder() -> InMemoryCatalogBuilder {
        InMemoryCatalogBuilder::default()
    }

    /// Build a catalog from `descriptors`
    pub fn from_descriptors(descriptors: Vec<ClassDescriptor>) -> Result<Self> {
        Self::builder().extend(descriptors).build()
    }

    /// Build a catalog from a JSON array of descriptors as emitted by extraction
    pub fn from_json(json: &str) -> Result<Self> {
        let descriptors: Vec<ClassDescriptor> = serde_json::from_str(json)?;
        Self::from_descriptors(descriptors)
    }

    /// All descriptors in insertion order
    pub fn descriptors(&self) -> &[ClassDescriptor] {
        &self.descriptors
    }

    /// Ancestor names of `class_name`, nearest first, root excluded
    pub fn ancestors_of(&self, class_name: &str) -> Vec<&str> {
        self.by_name
            .get(class_name)
            .map(|&index| self.ancestor_chain(&self.descriptors[index]))
            .unwrap_or_default()
    }

    fn ancestor_chain<'a>(&'a self, descriptor: &'a ClassDescriptor) -> Vec<&'a str> {
        let mut chain = Vec::new();
        let mut seen: HashSet<&str> = HashSet::from([descriptor.name.as_str()]);
        let mut current = descriptor.parent.name();

        while let Some(parent) = current {
            if !seen.insert(parent) {
                warn!(class = %descriptor.name, ancestor = parent, "Parent chain loops back, stopping walk");
                break;
            }
            chain.push(parent);
            current = self
                .by_name
                .get(parent)
                .and_then(|&index| self.descriptors[index].parent.name());
        }
        chain
    }

    fn pick(&self, indices: Option<&Vec<usize>>) -> Vec<&ClassDescriptor> {
        indices
            .map(|indices| indices.iter().map(|&i| &self.descriptors[i]).collect())
            .unwrap_or_default()
    }
}

impl MetadataCatalog for InMemoryCatalog {
    fn get_by_class_name(&self, name: &str) -> Option<&ClassDescriptor> {
        self.by_name.get(name).map(|&index| &self.descriptors[index])
    }

    fn get_by_interface(&self, name: &str) -> Vec<&ClassDescriptor> {
        self.pick(self.by_interface.get(name))
    }

    fn get_by_parent_class_name_without_root(&self, name: &str) -> Vec<&ClassDescriptor> {
        self.pick(self.by_ancestor.get(name))
    }

    fn get_by_fqcn(&self, fqcn: &str) -> Option<&ClassDescriptor> {
        self.by_fqcn.get(fqcn).map(|&index| &self.descriptors[index])
    }

    fn len(&self) -> usize {
        self.descriptors.len()
    }
}

/// Collects descriptors and computes the catalog indices
#[derive(Debug, Default)]
pub struct InMemoryCatalogBuilder {
    descriptors: Vec<ClassDescriptor>,
}

impl InMemoryCatalogBuilder {
    /// Add one descriptor
    #[must_use]
    pub fn add(mut self, descriptor: ClassDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Add several descriptors
    #[must_use]
    pub fn extend<I: IntoIterator<Item = ClassDescriptor>>(mut self, descriptors: I) -> Self {
        self.descriptors.extend(descriptors);
        self
    }

    /// Index the descriptors
    ///
    /// Fails on a duplicated fully-qualified class name. When two classes
    /// share a short name the first one added answers name lookups.
    pub fn build(self) -> Result<InMemoryCatalog> {
        let mut catalog = InMemoryCatalog {
            descriptors: self.descriptors,
            ..InMemoryCatalog::default()
        };

        for (index, descriptor) in catalog.descriptors.iter().enumerate() {
            if catalog
                .by_fqcn
                .insert(descriptor.fqcn.clone(), index)
                .is_some()
            {
                return Err(Error::DuplicateClass {
                    fqcn: descriptor.fqcn.clone(),
                });
            }
            if catalog.by_name.contains_key(&descriptor.name) {
                warn!(class = %descriptor.name, fqcn = %descriptor.fqcn, "Class name already in catalog");
            } else {
                catalog.by_name.insert(descriptor.name.clone(), index);
            }
            for interface in &descriptor.implements_interfaces {
                catalog
                    .by_interface
                    .entry(interface.clone())
                    .or_default()
                    .push(index);
            }
        }

        let mut by_ancestor: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, descriptor) in catalog.descriptors.iter().enumerate() {
            for ancestor in catalog.ancestor_chain(descriptor) {
                by_ancestor
                    .entry(ancestor.to_string())
                    .or_default()
                    .push(index);
            }
        }
        catalog.by_ancestor = by_ancestor;

        debug!(
            classes = catalog.descriptors.len(),
            interfaces = catalog.by_interface.len(),
            "Built metadata catalog"
        );
        Ok(catalog)
    }
}
