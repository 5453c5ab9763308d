//! Constructor Registry
//!
//! Maps class names to the factory that builds an instance from resolved
//! constructor arguments. The container looks a factory up once the
//! parameter list of a class is resolved.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use graft_domain::error::Result;
use graft_domain::{Arguments, Instance};

/// Factory building an instance from resolved arguments
pub type Constructor = Arc<dyn Fn(Arguments) -> Result<Instance> + Send + Sync>;

/// Class name → constructor
#[derive(Clone, Default)]
pub struct ConstructorRegistry {
    constructors: HashMap<String, Constructor>,
}

impl ConstructorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`register`](Self::register)
    ///
    /// ```ignore
    /// let constructors = ConstructorRegistry::new()
    ///     .with("Clock", |_| Ok(SystemClock))
    ///     .with("Scheduler", |args| Ok(Scheduler::new(args.object::<SystemClock>(0)?)));
    /// ```
    #[must_use]
    pub fn with<T, F>(mut self, class_name: impl Into<String>, factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(Arguments) -> Result<T> + Send + Sync + 'static,
    {
        self.register(class_name, factory);
        self
    }

    /// Register a typed factory for `class_name`
    ///
    /// The built value is wrapped in an [`Instance`] tagged with `class_name`,
    /// which is the runtime class the type checker sees. Registering a name
    /// twice replaces the earlier factory.
    pub fn register<T, F>(&mut self, class_name: impl Into<String>, factory: F) -> &mut Self
    where
        T: Any + Send + Sync,
        F: Fn(Arguments) -> Result<T> + Send + Sync + 'static,
    {
        let class_name = class_name.into();
        let tag = class_name.clone();
        self.constructors.insert(
            class_name,
            Arc::new(move |arguments| {
                factory(arguments).map(|object| Instance::new(tag.as_str(), object))
            }),
        );
        self
    }

    /// Register a factory that builds the [`Instance`] itself
    pub fn register_raw<F>(&mut self, class_name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(Arguments) -> Result<Instance> + Send + Sync + 'static,
    {
        self.constructors.insert(class_name.into(), Arc::new(factory));
        self
    }

    /// Factory registered for `class_name`
    pub fn get(&self, class_name: &str) -> Option<Constructor> {
        self.constructors.get(class_name).cloned()
    }

    /// Whether a factory is registered for `class_name`
    pub fn contains(&self, class_name: &str) -> bool {
        self.constructors.contains_key(class_name)
    }

    /// Number of registered factories
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Whether no factory is registered
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl fmt::Debug for ConstructorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.constructors.keys().collect();
        names.sort();
        f.debug_struct("ConstructorRegistry")
            .field("classes", &names)
            .finish()
    }
}
