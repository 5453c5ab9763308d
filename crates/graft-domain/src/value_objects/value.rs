//! Resolved values
//!
//! A constructor argument is either a primitive or a shared object instance.
//! Instances are type-erased and carry their runtime class name, which is the
//! only runtime type information the compatibility checker relies on.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::constants::{BIGINT_TYPE, BOOLEAN_TYPE, NUMBER_TYPE, STRING_TYPE};

/// Kind of a primitive value, named by its declared-type keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `bigint`
    BigInt,
}

impl PrimitiveKind {
    /// Declared-type keyword for this kind
    pub fn keyword(self) -> &'static str {
        match self {
            Self::String => STRING_TYPE,
            Self::Number => NUMBER_TYPE,
            Self::Boolean => BOOLEAN_TYPE,
            Self::BigInt => BIGINT_TYPE,
        }
    }

    /// Parse a declared-type keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            STRING_TYPE => Some(Self::String),
            NUMBER_TYPE => Some(Self::Number),
            BOOLEAN_TYPE => Some(Self::Boolean),
            BIGINT_TYPE => Some(Self::BigInt),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A primitive (non-object) value
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Text
    String(String),
    /// Double-precision number
    Number(f64),
    /// Boolean flag
    Boolean(bool),
    /// Arbitrary-size integer (bounded to 128 bits here)
    BigInt(i128),
}

impl Primitive {
    /// The kind of this primitive
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::String(_) => PrimitiveKind::String,
            Self::Number(_) => PrimitiveKind::Number,
            Self::Boolean(_) => PrimitiveKind::Boolean,
            Self::BigInt(_) => PrimitiveKind::BigInt,
        }
    }
}

/// Shared, type-erased object tagged with its runtime class name
#[derive(Clone)]
pub struct Instance {
    class_name: Arc<str>,
    object: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    /// Wrap an owned object
    pub fn new<T: Any + Send + Sync>(class_name: impl Into<String>, object: T) -> Self {
        Self::from_arc(class_name, Arc::new(object))
    }

    /// Wrap an already shared object
    pub fn from_arc<T: Any + Send + Sync>(class_name: impl Into<String>, object: Arc<T>) -> Self {
        Self {
            class_name: Arc::from(class_name.into()),
            object,
        }
    }

    /// Runtime class name of the wrapped object
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Typed access to the wrapped object
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.object).downcast::<T>().ok()
    }

    /// Whether both handles point at the same object
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.object, &other.object)
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("class_name", &self.class_name)
            .finish_non_exhaustive()
    }
}

/// A resolved constructor argument
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Primitive value
    Primitive(Primitive),
    /// Object instance
    Object(Instance),
}

impl Value {
    /// Wrap an owned object as a value
    pub fn object<T: Any + Send + Sync>(class_name: impl Into<String>, object: T) -> Self {
        Self::Object(Instance::new(class_name, object))
    }

    /// Primitive keyword or runtime class name, as reported in type errors
    pub fn type_name(&self) -> &str {
        match self {
            Self::Primitive(primitive) => primitive.kind().keyword(),
            Self::Object(instance) => instance.class_name(),
        }
    }

    /// The instance, if this is an object
    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Self::Object(instance) => Some(instance),
            Self::Primitive(_) => None,
        }
    }

    /// The text, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Primitive(Primitive::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The number, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Primitive(Primitive::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// The flag, if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Primitive(Primitive::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    /// The integer, if this is a bigint
    pub fn as_bigint(&self) -> Option<i128> {
        match self {
            Self::Primitive(Primitive::BigInt(i)) => Some(*i),
            _ => None,
        }
    }
}

impl From<Primitive> for Value {
    fn from(value: Primitive) -> Self {
        Self::Primitive(value)
    }
}

impl From<Instance> for Value {
    fn from(value: Instance) -> Self {
        Self::Object(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Primitive(Primitive::String(value.to_string()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Primitive(Primitive::String(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Primitive(Primitive::Number(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Primitive(Primitive::Number(f64::from(value)))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Primitive(Primitive::Number(f64::from(value)))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Primitive(Primitive::Boolean(value))
    }
}

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        Self::Primitive(Primitive::BigInt(value))
    }
}
