//! Provenance of a resolved value

use std::fmt;

/// Which precedence tier produced a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueSource {
    /// `Class/parameter` override
    ScopedOverride,
    /// Bare parameter-name override
    GlobalOverride,
    /// Single eligible implementor of the declared interface
    Interface,
    /// Eligible class named exactly as the declared type
    ExactClass,
    /// Single eligible descendant of the declared class
    Subclass,
    /// Instance cache entry keyed by the declared type
    Cache,
}

impl ValueSource {
    /// Whether the value came from an explicitly registered override
    pub fn is_override(self) -> bool {
        matches!(self, Self::ScopedOverride | Self::GlobalOverride)
    }

    /// Tier name used in logs
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ScopedOverride => "scoped_override",
            Self::GlobalOverride => "global_override",
            Self::Interface => "interface",
            Self::ExactClass => "exact_class",
            Self::Subclass => "subclass",
            Self::Cache => "cache",
        }
    }
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
