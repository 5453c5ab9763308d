//! Class descriptor entities
//!
//! Static metadata for one class as produced by the extraction front end:
//! identity, ancestry, implemented interfaces and constructor shape.
//! Descriptors are immutable once built and are consumed read-only by the
//! resolver.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Direct ancestor of a class
///
/// Every class descends from the implicit root. `Root` is the explicit
/// sentinel for it and is never part of an ancestor chain query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum ParentClass {
    /// The implicit universal base type
    #[default]
    Root,
    /// A named parent class
    Class(String),
}

impl ParentClass {
    /// Name of the parent class, `None` for the root
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Root => None,
            Self::Class(name) => Some(name),
        }
    }

    /// Whether this is the root sentinel
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }
}

impl From<Option<String>> for ParentClass {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(name) if !name.is_empty() => Self::Class(name),
            _ => Self::Root,
        }
    }
}

impl From<ParentClass> for Option<String> {
    fn from(value: ParentClass) -> Self {
        match value {
            ParentClass::Root => None,
            ParentClass::Class(name) => Some(name),
        }
    }
}

/// Visibility of a class constructor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructorVisibility {
    /// Constructor callable from anywhere (the default when none is declared)
    #[default]
    Public,
    /// Constructor callable from subclasses only
    Protected,
    /// Constructor callable from the class itself only
    Private,
}

impl ConstructorVisibility {
    /// Lowercase keyword as written in source
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

/// One constructor parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Parameter name
    pub name: String,
    /// Declared type: a primitive keyword or a class/interface name as written in source
    #[serde(rename = "type")]
    pub declared_type: String,
}

impl ParameterDescriptor {
    /// Create a parameter descriptor
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }
}

/// Static metadata record for one class
///
/// # Example
///
/// ```
/// use graft_domain::entities::{ClassDescriptor, ConstructorVisibility};
///
/// let repo = ClassDescriptor::new("db/SqlUserRepository", "SqlUserRepository")
///     .extends("BaseRepository")
///     .implements("UserRepository")
///     .with_parameter("pool", "ConnectionPool");
///
/// assert!(repo.is_eligible());
/// assert_eq!(repo.constructor_visibility, ConstructorVisibility::Public);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDescriptor {
    /// Fully-qualified class name, unique within a catalog
    pub fqcn: String,
    /// Class name as written in source
    pub name: String,
    /// Direct parent class
    #[serde(rename = "extendsClass", default)]
    pub parent: ParentClass,
    /// Names of directly implemented interfaces
    #[serde(default)]
    pub implements_interfaces: BTreeSet<String>,
    /// Constructor parameters in declaration order
    #[serde(default)]
    pub constructor_parameters: Vec<ParameterDescriptor>,
    /// Constructor visibility
    #[serde(default)]
    pub constructor_visibility: ConstructorVisibility,
    /// Whether the class is declared abstract
    #[serde(default)]
    pub is_abstract: bool,
}

impl ClassDescriptor {
    /// Create a public, concrete, parameterless descriptor rooted at the implicit base
    pub fn new(fqcn: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            fqcn: fqcn.into(),
            name: name.into(),
            parent: ParentClass::Root,
            implements_interfaces: BTreeSet::new(),
            constructor_parameters: Vec::new(),
            constructor_visibility: ConstructorVisibility::Public,
            is_abstract: false,
        }
    }

    /// Set the parent class
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parent = ParentClass::Class(parent.into());
        self
    }

    /// Add an implemented interface
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.implements_interfaces.insert(interface.into());
        self
    }

    /// Append a constructor parameter
    pub fn with_parameter(mut self, name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        self.constructor_parameters
            .push(ParameterDescriptor::new(name, declared_type));
        self
    }

    /// Set the constructor visibility
    pub fn with_visibility(mut self, visibility: ConstructorVisibility) -> Self {
        self.constructor_visibility = visibility;
        self
    }

    /// Mark the class abstract
    pub fn as_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Whether the class directly implements `interface`
    pub fn implements_interface(&self, interface: &str) -> bool {
        self.implements_interfaces.contains(interface)
    }

    /// Only concrete classes with a public constructor are resolution targets
    pub fn is_eligible(&self) -> bool {
        !self.is_abstract && self.constructor_visibility == ConstructorVisibility::Public
    }
}
