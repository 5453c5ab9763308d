//! Parameter Resolver
//!
//! Decides, per constructor parameter, where its value comes from.
//!
//! ## Precedence
//!
//! ```text
//! 1. Class/parameter override ──┐
//! 2. parameter override ────────┤
//! 3. single interface implementor ── (many → MultipleInterfaceImplementationsFound)
//! 4. class named as declared type
//! 5. single descendant ───────────── (many → MultipleClassChildrenFound)
//! 6. cache entry for declared type
//! 7. ValueForParameterNotFound
//! ```
//!
//! The first tier that yields a value wins and the value is then validated by
//! the [`TypeCompatibilityChecker`]. An ambiguous tier fails at once instead of
//! falling through.

use std::sync::Arc;

use futures::future::try_join_all;
use graft_domain::{
    ClassDescriptor, ConstructionDelegate, Error, MetadataCatalog, ParameterDescriptor, Result,
    Value,
};
use tracing::{debug, instrument, trace};

use super::{TypeCompatibilityChecker, ValueSource};
use crate::registry::{InstanceCache, OverrideRegistry};

/// Resolves constructor parameter lists against overrides, catalog and cache
#[derive(Clone)]
pub struct ParameterResolver {
    catalog: Arc<dyn MetadataCatalog>,
    overrides: Arc<OverrideRegistry>,
    instances: Arc<InstanceCache>,
    checker: TypeCompatibilityChecker,
}

impl ParameterResolver {
    /// Create a resolver over shared registries owned by the container
    pub fn new(
        catalog: Arc<dyn MetadataCatalog>,
        overrides: Arc<OverrideRegistry>,
        instances: Arc<InstanceCache>,
    ) -> Self {
        let checker = TypeCompatibilityChecker::new(Arc::clone(&catalog));
        Self {
            catalog,
            overrides,
            instances,
            checker,
        }
    }

    /// Override registry consulted by the first two tiers
    pub fn overrides(&self) -> &Arc<OverrideRegistry> {
        &self.overrides
    }

    /// Instance cache consulted by the fallback tier
    pub fn instances(&self) -> &Arc<InstanceCache> {
        &self.instances
    }

    /// Register a value for every parameter called `parameter_name`
    pub fn register_value_for_parameter_name(
        &self,
        parameter_name: impl Into<String>,
        value: impl Into<Value>,
    ) {
        self.overrides.register_global(parameter_name, value);
    }

    /// Register a value for `parameter_name` of the class named `class_name`
    pub fn register_value_for_class_name_and_parameter_name(
        &self,
        class_name: impl Into<String>,
        parameter_name: impl Into<String>,
        value: impl Into<Value>,
    ) {
        self.overrides
            .register_scoped(class_name, parameter_name, value);
    }

    /// Register a value for `parameter_name` of the class described by `descriptor`
    pub fn register_value_for_class_and_parameter_name(
        &self,
        descriptor: &ClassDescriptor,
        parameter_name: impl Into<String>,
        value: impl Into<Value>,
    ) {
        self.overrides
            .register_scoped_by_type(descriptor, parameter_name, value);
    }

    /// Resolve every constructor parameter of `class`
    ///
    /// Parameters are resolved concurrently and gathered by position, so the
    /// result follows declaration order whatever the completion order. The
    /// first failure fails the whole list.
    #[instrument(skip_all, fields(class = %class.name))]
    pub async fn resolve_parameters(
        &self,
        class: &ClassDescriptor,
        delegate: &dyn ConstructionDelegate,
    ) -> Result<Vec<Value>> {
        if class.constructor_parameters.is_empty() {
            trace!("No constructor parameters");
            return Ok(Vec::new());
        }

        let values = try_join_all(
            class
                .constructor_parameters
                .iter()
                .map(|parameter| self.resolve_parameter(class, parameter, delegate)),
        )
        .await?;

        debug!(count = values.len(), "Resolved constructor parameters");
        Ok(values)
    }

    /// Resolve and validate a single parameter of `class`
    pub async fn resolve_parameter(
        &self,
        class: &ClassDescriptor,
        parameter: &ParameterDescriptor,
        delegate: &dyn ConstructionDelegate,
    ) -> Result<Value> {
        let (value, source) = self.find_value(class, parameter, delegate).await?;

        debug!(
            class = %class.name,
            parameter = %parameter.name,
            declared_type = %parameter.declared_type,
            tier = source.as_str(),
            "Parameter resolved"
        );

        self.checker.check(&class.name, parameter, &value, source)?;
        Ok(value)
    }

    async fn find_value(
        &self,
        class: &ClassDescriptor,
        parameter: &ParameterDescriptor,
        delegate: &dyn ConstructionDelegate,
    ) -> Result<(Value, ValueSource)> {
        let declared = parameter.declared_type.as_str();

        if let Some(value) = self.overrides.scoped(&class.name, &parameter.name) {
            return Ok((value, ValueSource::ScopedOverride));
        }

        if let Some(value) = self.overrides.global(&parameter.name) {
            return Ok((value, ValueSource::GlobalOverride));
        }

        let implementing = eligible(self.catalog.get_by_interface(declared));
        match implementing.as_slice() {
            [] => {}
            [single] => {
                let instance = delegate.get_by_class_data(single).await?;
                return Ok((Value::Object(instance), ValueSource::Interface));
            }
            _ => {
                return Err(Error::multiple_interface_implementations(
                    class.name.as_str(),
                    parameter.name.as_str(),
                    declared,
                ));
            }
        }

        if let Some(being) = self
            .catalog
            .get_by_class_name(declared)
            .filter(|descriptor| descriptor.is_eligible())
        {
            let instance = delegate.get_by_class_data(being).await?;
            return Ok((Value::Object(instance), ValueSource::ExactClass));
        }

        let extending = eligible(self.catalog.get_by_parent_class_name_without_root(declared));
        match extending.as_slice() {
            [] => {}
            [single] => {
                let instance = delegate.get_by_class_data(single).await?;
                return Ok((Value::Object(instance), ValueSource::Subclass));
            }
            _ => {
                return Err(Error::multiple_class_children(
                    class.name.as_str(),
                    parameter.name.as_str(),
                    declared,
                ));
            }
        }

        if let Some(instance) = self.instances.get(declared) {
            return Ok((Value::Object(instance), ValueSource::Cache));
        }

        Err(Error::value_not_found(
            parameter.name.as_str(),
            class.name.as_str(),
        ))
    }
}

fn eligible(candidates: Vec<&ClassDescriptor>) -> Vec<&ClassDescriptor> {
    candidates
        .into_iter()
        .filter(|descriptor| descriptor.is_eligible())
        .collect()
}
