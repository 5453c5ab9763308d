//! Override registry keys

use std::fmt;

use crate::constants::SCOPED_KEY_SEPARATOR;

/// Key of an explicit parameter override
///
/// Renders as `parameter` for global overrides and `Class/parameter` for
/// class-scoped ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OverrideKey {
    /// Applies to the parameter name in every class
    Global(String),
    /// Applies to the parameter name in one class only
    Scoped {
        /// Class name
        class: String,
        /// Parameter name
        parameter: String,
    },
}

impl OverrideKey {
    /// Global key for `parameter`
    pub fn global(parameter: impl Into<String>) -> Self {
        Self::Global(parameter.into())
    }

    /// Class-scoped key for `class`/`parameter`
    pub fn scoped(class: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::Scoped {
            class: class.into(),
            parameter: parameter.into(),
        }
    }
}

impl fmt::Display for OverrideKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global(parameter) => f.write_str(parameter),
            Self::Scoped { class, parameter } => {
                write!(f, "{class}{SCOPED_KEY_SEPARATOR}{parameter}")
            }
        }
    }
}
