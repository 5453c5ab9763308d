//! Shared registries backing resolution decisions

pub mod instances;
pub mod overrides;

pub use instances::InstanceCache;
pub use overrides::OverrideRegistry;
