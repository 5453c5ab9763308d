//! Value objects

pub mod arguments;
pub mod override_key;
pub mod value;

pub use arguments::Arguments;
pub use override_key::OverrideKey;
pub use value::{Instance, Primitive, PrimitiveKind, Value};
