//! Constructor arguments
//!
//! Positional list of resolved values handed to a constructor function, with
//! typed accessors that turn a wrong shape into a construction error.

use std::any::Any;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::value_objects::{Instance, Value};

/// Resolved arguments for one constructor call, in declared parameter order
#[derive(Debug, Clone)]
pub struct Arguments {
    class_name: String,
    values: Vec<Value>,
}

impl Arguments {
    /// Create arguments for `class_name`
    pub fn new(class_name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            class_name: class_name.into(),
            values,
        }
    }

    /// Class the arguments were resolved for
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no arguments
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw value at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    fn require(&self, index: usize) -> Result<&Value> {
        self.values.get(index).ok_or_else(|| {
            Error::construction(
                &self.class_name,
                format!("argument {index} is missing ({} provided)", self.values.len()),
            )
        })
    }

    fn mismatch(&self, index: usize, expected: &str, value: &Value) -> Error {
        Error::construction(
            &self.class_name,
            format!(
                "argument {index} is '{}', expected {expected}",
                value.type_name()
            ),
        )
    }

    /// Object instance at `index`
    pub fn instance(&self, index: usize) -> Result<&Instance> {
        let value = self.require(index)?;
        value
            .as_instance()
            .ok_or_else(|| self.mismatch(index, "an object", value))
    }

    /// Typed object at `index`
    pub fn object<T: Any + Send + Sync>(&self, index: usize) -> Result<Arc<T>> {
        let instance = self.instance(index)?;
        instance.downcast::<T>().ok_or_else(|| {
            Error::construction(
                &self.class_name,
                format!(
                    "argument {index} ('{}') is not a {}",
                    instance.class_name(),
                    std::any::type_name::<T>()
                ),
            )
        })
    }

    /// String at `index`
    pub fn string(&self, index: usize) -> Result<&str> {
        let value = self.require(index)?;
        value
            .as_str()
            .ok_or_else(|| self.mismatch(index, "a string", value))
    }

    /// Number at `index`
    pub fn number(&self, index: usize) -> Result<f64> {
        let value = self.require(index)?;
        value
            .as_number()
            .ok_or_else(|| self.mismatch(index, "a number", value))
    }

    /// Boolean at `index`
    pub fn boolean(&self, index: usize) -> Result<bool> {
        let value = self.require(index)?;
        value
            .as_bool()
            .ok_or_else(|| self.mismatch(index, "a boolean", value))
    }

    /// Big integer at `index`
    pub fn bigint(&self, index: usize) -> Result<i128> {
        let value = self.require(index)?;
        value
            .as_bigint()
            .ok_or_else(|| self.mismatch(index, "a bigint", value))
    }
}
