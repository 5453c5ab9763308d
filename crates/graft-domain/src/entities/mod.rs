//! Domain entities

pub mod class_descriptor;

pub use class_descriptor::{ClassDescriptor, ConstructorVisibility, ParameterDescriptor, ParentClass};
