//! Provider configuration hooks

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Provider configuration variables as supplied by the user program
pub type ConfigVars = BTreeMap<String, serde_json::Value>;

/// Errors a pre-configure hook can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Required configuration '{0}' is missing")]
    Missing(String),

    #[error("Invalid configuration '{key}': {message}")]
    Invalid { key: String, message: String },
}

/// Validates configuration before the upstream provider is configured
///
/// Implementations should return actionable errors when the provider cannot
/// be configured with `vars`.
pub trait PreConfigure: Send + Sync + fmt::Debug {
    fn pre_configure(&self, vars: &ConfigVars) -> Result<(), ConfigError>;
}

/// Hook that accepts any configuration
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl PreConfigure for AcceptAll {
    fn pre_configure(&self, _vars: &ConfigVars) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Read a string configuration variable
pub fn string_value<'a>(vars: &'a ConfigVars, key: &str) -> Option<&'a str> {
    vars.get(key).and_then(|v| v.as_str())
}
