//! Plugin configuration
//!
//! The host passes free-form JSON options alongside the request. Only the
//! output namespace matters to the generator; unknown keys are ignored so
//! host-side options can evolve without breaking older binaries.

use serde::Deserialize;
use tracing::debug;

use crate::error::PhpgenError;

/// Options controlling the shape of the generated PHP
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginConfig {
    /// PHP namespace for every generated file, e.g. `App\Sqlc\MySQL`
    #[serde(default)]
    pub package: String,
}

impl PluginConfig {
    /// Parse the request's plugin options; absent options mean all defaults
    pub fn from_options(options: Option<&serde_json::Value>) -> Result<Self, PhpgenError> {
        let Some(value) = options else {
            debug!("no plugin options supplied, using defaults");
            return Ok(Self::default());
        };
        serde_json::from_value(value.clone())
            .map_err(|e| PhpgenError::Config(e.to_string()))
    }
}
