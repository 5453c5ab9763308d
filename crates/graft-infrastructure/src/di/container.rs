//! Container
//!
//! Entry point for applications: owns the catalog, the shared registries and
//! the constructor table, and implements [`ConstructionDelegate`] so the
//! resolver can recurse into nested construction.
//!
//! ## Construction
//!
//! ```text
//! get_by_class_data(descriptor)
//!   ├─ ineligible ─────────────► IneligibleClass
//!   ├─ cached ─────────────────► cached instance
//!   ├─ already on the path ────► CircularDependency
//!   └─ resolve_parameters ─► constructor ─► cache (first insert wins)
//! ```

use std::any::{Any, type_name};
use std::sync::Arc;

use async_trait::async_trait;
use graft_application::{InstanceCache, OverrideRegistry, ParameterResolver};
use graft_domain::error::{Error, Result};
use graft_domain::{
    Arguments, ClassDescriptor, ConstructionDelegate, Instance, MetadataCatalog, Value,
};
use tracing::{debug, info, instrument};

use super::ConstructorRegistry;
use crate::config::{AppConfig, OverridesConfig, ResolverConfig};

tokio::task_local! {
    /// Class names currently under construction in this branch of the graph
    static CONSTRUCTION_PATH: Vec<String>;
}

/// Resolution container
#[derive(Clone)]
pub struct Container {
    catalog: Arc<dyn MetadataCatalog>,
    resolver: ParameterResolver,
    constructors: Arc<ConstructorRegistry>,
    config: ResolverConfig,
}

impl Container {
    /// Create a container with empty override and instance registries
    pub fn new(
        catalog: Arc<dyn MetadataCatalog>,
        constructors: ConstructorRegistry,
        config: ResolverConfig,
    ) -> Self {
        let resolver = ParameterResolver::new(
            Arc::clone(&catalog),
            Arc::new(OverrideRegistry::new()),
            Arc::new(InstanceCache::new()),
        );
        Self {
            catalog,
            resolver,
            constructors: Arc::new(constructors),
            config,
        }
    }

    /// Create a container and apply the override table of `config`
    pub fn from_config(
        catalog: Arc<dyn MetadataCatalog>,
        constructors: ConstructorRegistry,
        config: &AppConfig,
    ) -> Self {
        let container = Self::new(catalog, constructors, config.resolver.clone());
        container.apply_overrides(&config.overrides);
        container
    }

    /// Register every entry of `overrides`
    pub fn apply_overrides(&self, overrides: &OverridesConfig) {
        if overrides.is_empty() {
            return;
        }
        for (parameter, value) in &overrides.global {
            self.register_value_for_parameter_name(parameter.as_str(), value.clone());
        }
        for (class, parameters) in &overrides.scoped {
            for (parameter, value) in parameters {
                self.register_value_for_class_name_and_parameter_name(
                    class.as_str(),
                    parameter.as_str(),
                    value.clone(),
                );
            }
        }
        info!(
            count = self.resolver.overrides().len(),
            "Applied configured overrides"
        );
    }

    /// Catalog the container resolves against
    pub fn catalog(&self) -> &Arc<dyn MetadataCatalog> {
        &self.catalog
    }

    /// Parameter resolver
    pub fn resolver(&self) -> &ParameterResolver {
        &self.resolver
    }

    /// Override registry
    pub fn overrides(&self) -> &Arc<OverrideRegistry> {
        self.resolver.overrides()
    }

    /// Instance cache
    pub fn instances(&self) -> &Arc<InstanceCache> {
        self.resolver.instances()
    }

    pub fn register_value_for_parameter_name(
        &self,
        parameter_name: impl Into<String>,
        value: impl Into<Value>,
    ) {
        self.resolver
            .register_value_for_parameter_name(parameter_name, value);
    }

    pub fn register_value_for_class_name_and_parameter_name(
        &self,
        class_name: impl Into<String>,
        parameter_name: impl Into<String>,
        value: impl Into<Value>,
    ) {
        self.resolver
            .register_value_for_class_name_and_parameter_name(class_name, parameter_name, value);
    }

    pub fn register_value_for_class_and_parameter_name(
        &self,
        descriptor: &ClassDescriptor,
        parameter_name: impl Into<String>,
        value: impl Into<Value>,
    ) {
        self.resolver
            .register_value_for_class_and_parameter_name(descriptor, parameter_name, value);
    }

    /// Store `instance` in the cache under `key`
    ///
    /// The key is usually a class name, or a type name the cache fallback
    /// tier should answer for classes without usable metadata.
    pub fn register_instance(&self, key: impl Into<String>, instance: Instance) {
        self.instances().insert(key, instance);
    }

    /// Instance of the class named `class_name`, constructing it on first use
    pub async fn get_instance(&self, class_name: &str) -> Result<Instance> {
        if let Some(instance) = self.instances().get(class_name) {
            return Ok(instance);
        }
        let descriptor = self
            .catalog
            .get_by_class_name(class_name)
            .ok_or_else(|| Error::class_not_found(class_name))?;
        self.get_by_class_data(descriptor).await
    }

    /// Typed form of [`get_instance`](Self::get_instance)
    pub async fn get<T: Any + Send + Sync>(&self, class_name: &str) -> Result<Arc<T>> {
        let instance = self.get_instance(class_name).await?;
        instance.downcast::<T>().ok_or_else(|| {
            Error::construction(
                class_name,
                format!(
                    "instance of {} is not a {}",
                    instance.class_name(),
                    type_name::<T>()
                ),
            )
        })
    }

    async fn construct(&self, descriptor: &ClassDescriptor) -> Result<Instance> {
        let constructor = self
            .constructors
            .get(&descriptor.name)
            .ok_or_else(|| Error::constructor_not_registered(descriptor.name.as_str()))?;

        let values = self.resolver.resolve_parameters(descriptor, self).await?;
        let instance = constructor(Arguments::new(descriptor.name.as_str(), values))?;

        debug!(class = %descriptor.name, "Constructed instance");
        Ok(self
            .instances()
            .get_or_insert(descriptor.name.as_str(), instance))
    }
}

#[async_trait]
impl ConstructionDelegate for Container {
    #[instrument(skip_all, fields(class = %descriptor.name))]
    async fn get_by_class_data(&self, descriptor: &ClassDescriptor) -> Result<Instance> {
        if !descriptor.is_eligible() {
            let detail = if descriptor.is_abstract {
                "class is abstract".to_string()
            } else {
                format!(
                    "constructor is {}",
                    descriptor.constructor_visibility.as_str()
                )
            };
            return Err(Error::ineligible(descriptor.name.as_str(), detail));
        }

        if let Some(instance) = self.instances().get(&descriptor.name) {
            return Ok(instance);
        }

        if !self.config.detect_cycles {
            return self.construct(descriptor).await;
        }

        let mut path = CONSTRUCTION_PATH.try_with(Clone::clone).unwrap_or_default();
        let revisited = path.contains(&descriptor.name);
        path.push(descriptor.name.clone());
        if revisited {
            return Err(Error::CircularDependency { path });
        }

        CONSTRUCTION_PATH
            .scope(path, self.construct(descriptor))
            .await
    }
}
