//! Resolution engine
//!
//! | Component | Role |
//! |-----------|------|
//! | [`ParameterResolver`] | precedence search and concurrent gather of parameter lists |
//! | [`TypeCompatibilityChecker`] | declared-type validation of every resolved value |
//! | [`ValueSource`] | the tier a value came from |

pub mod parameter_resolver;
pub mod source;
pub mod type_checker;

pub use parameter_resolver::ParameterResolver;
pub use source::ValueSource;
pub use type_checker::TypeCompatibilityChecker;
