use serde::Serialize;
use serde_json::Value;

use crate::core::{ChartOptions, ChartType};
use crate::error::{ChartError, ChartResult};

use super::legend_builder::LegendConfig;
use super::render_config::RenderConfiguration;

pub const RENDER_CONFIGURATION_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope handed to the rendering engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfigurationJsonContractV1<'a> {
    pub schema_version: u32,
    pub configuration: &'a RenderConfiguration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<&'a LegendConfig>,
}

impl ChartOptions {
    /// Parses options from JSON.
    ///
    /// The chart type is checked before the rest of the payload so an
    /// unsupported type surfaces as [`ChartError::UnknownChartType`] rather
    /// than a generic parse failure.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart options json: {e}"))
        })?;

        match value.get("type") {
            Some(Value::String(chart_type)) => {
                chart_type.parse::<ChartType>()?;
            }
            Some(other) => {
                return Err(ChartError::InvalidData(format!(
                    "chart type must be a string, got {other}"
                )));
            }
            None => {
                return Err(ChartError::InvalidData(
                    "chart options json is missing \"type\"".to_owned(),
                ));
            }
        }

        serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart options json: {e}"))
        })
    }
}

impl RenderConfiguration {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render configuration: {e}"))
        })
    }

    pub fn to_json_value(&self) -> ChartResult<Value> {
        serde_json::to_value(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render configuration: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self, legend: Option<&LegendConfig>) -> ChartResult<String> {
        let payload = RenderConfigurationJsonContractV1 {
            schema_version: RENDER_CONFIGURATION_JSON_SCHEMA_V1,
            configuration: self,
            legend,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to serialize render configuration contract v1: {e}"
            ))
        })
    }
}

impl LegendConfig {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize legend: {e}")))
    }
}
