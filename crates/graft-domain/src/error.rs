//! Error handling types

use std::fmt;

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Why a resolved value was rejected by the type-compatibility check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompatibilityReason {
    /// A primitive value whose kind differs from the declared keyword
    SimpleTypeMismatch,
    /// An object that is neither the declared class, an implementor nor a descendant
    ObjectTypeMismatch,
    /// An object whose class is unknown to the catalog and did not come from an override
    MetadataNotFound,
}

impl IncompatibilityReason {
    /// Stable tag used in messages and logs
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SimpleTypeMismatch => "simple type does not match",
            Self::ObjectTypeMismatch => "does not match the object type or interface",
            Self::MetadataNotFound => "metadata not found",
        }
    }
}

impl fmt::Display for IncompatibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for Graft
#[derive(Error, Debug)]
pub enum Error {
    /// A resolved value does not satisfy the parameter's declared type
    #[error(
        "Parameter '{parameter_name}' of class '{class_name}' expects '{expected_type}' but got '{actual_type}': {reason}"
    )]
    ParameterTypesIncompatible {
        /// Class whose constructor declares the parameter
        class_name: String,
        /// Parameter name
        parameter_name: String,
        /// Declared parameter type
        expected_type: String,
        /// Primitive keyword or runtime class name of the rejected value
        actual_type: String,
        /// Which check failed
        reason: IncompatibilityReason,
    },

    /// More than one eligible class implements the declared interface
    #[error(
        "Multiple implementations of interface '{interface_type}' found for parameter '{parameter_name}' of class '{class_name}'"
    )]
    MultipleInterfaceImplementationsFound {
        /// Class whose constructor declares the parameter
        class_name: String,
        /// Parameter name
        parameter_name: String,
        /// Declared interface type
        interface_type: String,
    },

    /// More than one eligible class descends from the declared class
    #[error(
        "Multiple children of class '{parent_type}' found for parameter '{parameter_name}' of class '{class_name}'"
    )]
    MultipleClassChildrenFound {
        /// Class whose constructor declares the parameter
        class_name: String,
        /// Parameter name
        parameter_name: String,
        /// Declared parent type
        parent_type: String,
    },

    /// No tier produced a value for the parameter
    #[error("Value for parameter '{parameter_name}' of class '{class_name}' not found")]
    ValueForParameterNotFound {
        /// Parameter name
        parameter_name: String,
        /// Class whose constructor declares the parameter
        class_name: String,
    },

    /// Class is not present in the catalog
    #[error("Class not found in catalog: {class_name}")]
    ClassNotFound {
        /// Requested class name
        class_name: String,
    },

    /// Class is abstract or its constructor is not public
    #[error("Class '{class_name}' cannot be constructed: {detail}")]
    IneligibleClass {
        /// Requested class name
        class_name: String,
        /// Why the class is not a construction target
        detail: String,
    },

    /// No constructor function was registered for the class
    #[error("No constructor registered for class '{class_name}'")]
    ConstructorNotRegistered {
        /// Class name without a constructor
        class_name: String,
    },

    /// Construction re-entered a class already on the current path
    #[error("Circular dependency detected: {}", path.join(" -> "))]
    CircularDependency {
        /// Construction path, ending with the repeated class
        path: Vec<String>,
    },

    /// Two descriptors share the same fully-qualified class name
    #[error("Duplicate class in catalog: {fqcn}")]
    DuplicateClass {
        /// The duplicated fully-qualified class name
        fqcn: String,
    },

    /// A constructor function failed
    #[error("Failed to construct '{class_name}': {message}")]
    Construction {
        /// Class being constructed
        class_name: String,
        /// What went wrong
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

// Resolution error creation methods
impl Error {
    /// Create a type incompatibility error
    pub fn incompatible<C, P, E, A>(
        class_name: C,
        parameter_name: P,
        expected_type: E,
        actual_type: A,
        reason: IncompatibilityReason,
    ) -> Self
    where
        C: Into<String>,
        P: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        Self::ParameterTypesIncompatible {
            class_name: class_name.into(),
            parameter_name: parameter_name.into(),
            expected_type: expected_type.into(),
            actual_type: actual_type.into(),
            reason,
        }
    }

    /// Create an ambiguous interface error
    pub fn multiple_interface_implementations<C, P, I>(
        class_name: C,
        parameter_name: P,
        interface_type: I,
    ) -> Self
    where
        C: Into<String>,
        P: Into<String>,
        I: Into<String>,
    {
        Self::MultipleInterfaceImplementationsFound {
            class_name: class_name.into(),
            parameter_name: parameter_name.into(),
            interface_type: interface_type.into(),
        }
    }

    /// Create an ambiguous subclass error
    pub fn multiple_class_children<C, P, T>(class_name: C, parameter_name: P, parent_type: T) -> Self
    where
        C: Into<String>,
        P: Into<String>,
        T: Into<String>,
    {
        Self::MultipleClassChildrenFound {
            class_name: class_name.into(),
            parameter_name: parameter_name.into(),
            parent_type: parent_type.into(),
        }
    }

    /// Create a missing value error
    pub fn value_not_found<P: Into<String>, C: Into<String>>(parameter_name: P, class_name: C) -> Self {
        Self::ValueForParameterNotFound {
            parameter_name: parameter_name.into(),
            class_name: class_name.into(),
        }
    }
}

// Container error creation methods
impl Error {
    /// Create a class not found error
    pub fn class_not_found<S: Into<String>>(class_name: S) -> Self {
        Self::ClassNotFound {
            class_name: class_name.into(),
        }
    }

    /// Create an ineligible class error
    pub fn ineligible<S: Into<String>, D: Into<String>>(class_name: S, detail: D) -> Self {
        Self::IneligibleClass {
            class_name: class_name.into(),
            detail: detail.into(),
        }
    }

    /// Create a missing constructor error
    pub fn constructor_not_registered<S: Into<String>>(class_name: S) -> Self {
        Self::ConstructorNotRegistered {
            class_name: class_name.into(),
        }
    }

    /// Create a construction failure error
    pub fn construction<S: Into<String>, M: Into<String>>(class_name: S, message: M) -> Self {
        Self::Construction {
            class_name: class_name.into(),
            message: message.into(),
        }
    }
}

// Configuration and I/O error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
