//! Configuration types

use std::collections::BTreeMap;
use std::path::PathBuf;

use graft_domain::{Primitive, Value};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Resolution behaviour
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Parameter overrides applied when a container is created
    #[serde(default)]
    pub overrides: OverridesConfig,
}

/// Resolution behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Fail with a circular dependency error instead of recursing forever
    pub detect_cycles: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            detect_cycles: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Override table
///
/// ```toml
/// [overrides.global]
/// timeout = 30
///
/// [overrides.scoped.HttpClient]
/// baseUrl = "http://localhost:8080"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverridesConfig {
    /// Parameter name → value, for every class
    #[serde(default)]
    pub global: BTreeMap<String, OverrideValue>,

    /// Class name → parameter name → value
    #[serde(default)]
    pub scoped: BTreeMap<String, BTreeMap<String, OverrideValue>>,
}

impl OverridesConfig {
    /// Whether the table holds no override
    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.scoped.values().all(BTreeMap::is_empty)
    }
}

/// Primitive override value as written in configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideValue {
    /// `true` / `false`
    Boolean(bool),
    /// Integer or float, stored as a number
    Number(f64),
    /// Text
    String(String),
}

impl From<OverrideValue> for Value {
    fn from(value: OverrideValue) -> Self {
        let primitive = match value {
            OverrideValue::Boolean(b) => Primitive::Boolean(b),
            OverrideValue::Number(n) => Primitive::Number(n),
            OverrideValue::String(s) => Primitive::String(s),
        };
        Value::Primitive(primitive)
    }
}
