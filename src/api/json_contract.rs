use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::render::Renderer;

use super::{GridConfig, GridOverlay};

pub const GRID_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope of a serialized grid configuration.
///
/// Configs holding generator hooks or a computed viewport fail to serialize
/// with `GridError::InvalidConfig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: GridConfig,
}

impl GridConfig {
    pub fn to_json_contract_v1_pretty(&self) -> GridResult<String> {
        let payload = GridConfigJsonContractV1 {
            schema_version: GRID_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GridError::InvalidConfig(format!("failed to serialize grid config contract v1: {e}"))
        })
    }

    /// Parses either a bare config or a `{schema_version, config}` envelope.
    pub fn from_json_compat_str(input: &str) -> GridResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            GridError::InvalidConfig(format!("failed to parse grid config json payload: {e}"))
        })?;
        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                GridError::InvalidConfig(format!("failed to parse grid config: {e}"))
            });
        }

        let payload: GridConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            GridError::InvalidConfig(format!("failed to parse grid config contract: {e}"))
        })?;
        if payload.schema_version != GRID_CONFIG_JSON_SCHEMA_V1 {
            return Err(GridError::InvalidConfig(format!(
                "unsupported grid config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}

impl<R: Renderer> GridOverlay<R> {
    pub fn config_json_contract_v1_pretty(&self) -> GridResult<String> {
        self.config.to_json_contract_v1_pretty()
    }
}
