//! Domain constants
//!
//! Keywords and separators shared by the resolver and the catalog.

/// Separator between class name and parameter name in scoped override keys
pub const SCOPED_KEY_SEPARATOR: &str = "/";

/// Declared-type keyword for string primitives
pub const STRING_TYPE: &str = "string";

/// Declared-type keyword for number primitives
pub const NUMBER_TYPE: &str = "number";

/// Declared-type keyword for boolean primitives
pub const BOOLEAN_TYPE: &str = "boolean";

/// Declared-type keyword for big integer primitives
pub const BIGINT_TYPE: &str = "bigint";
