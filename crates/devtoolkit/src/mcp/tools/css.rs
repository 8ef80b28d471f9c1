use serde::Deserialize;

use devtoolkit_core::clamp::{
    DEFAULT_MAX_SIZE, DEFAULT_MAX_VIEWPORT, DEFAULT_MIN_SIZE, DEFAULT_MIN_VIEWPORT,
};
use devtoolkit_core::color::{ShadeMode, DEFAULT_BASE_HEX, DEFAULT_SHADE_PERCENT};

use super::{parse_arguments, tool_output, value_text, JsonRpcError};
use crate::clamp::{clamp_data, ClampRequest, DEFAULT_PROPERTY};

/// Numbers and strings are both accepted; the generator validates the text
fn raw_input(value: Option<serde_json::Value>, default: f64) -> String {
    match value {
        None | Some(serde_json::Value::Null) => default.to_string(),
        Some(value) => value_text(value),
    }
}

pub fn handle_clamp_generate(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct ClampArgs {
        min_size: Option<serde_json::Value>,
        max_size: Option<serde_json::Value>,
        min_viewport: Option<serde_json::Value>,
        max_viewport: Option<serde_json::Value>,
        unit: Option<String>,
        property: Option<String>,
        preview: Option<Vec<f64>>,
    }

    let args: ClampArgs = parse_arguments(arguments)?;

    tool_output(clamp_data(ClampRequest {
        min_size: raw_input(args.min_size, DEFAULT_MIN_SIZE),
        max_size: raw_input(args.max_size, DEFAULT_MAX_SIZE),
        min_viewport: raw_input(args.min_viewport, DEFAULT_MIN_VIEWPORT),
        max_viewport: raw_input(args.max_viewport, DEFAULT_MAX_VIEWPORT),
        unit: args.unit.unwrap_or_else(|| "px".to_string()),
        property: args.property.unwrap_or_else(|| DEFAULT_PROPERTY.to_string()),
        preview: args.preview.unwrap_or_default(),
    }))
}

pub fn handle_color_shades(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct ShadesArgs {
        hex: Option<String>,
        percent: Option<f64>,
        mode: Option<ShadeMode>,
    }

    let args: ShadesArgs = parse_arguments(arguments)?;

    tool_output(crate::shades::shades_data(
        args.hex.as_deref().unwrap_or(DEFAULT_BASE_HEX),
        args.percent.unwrap_or(DEFAULT_SHADE_PERCENT),
        args.mode.unwrap_or_default(),
    ))
}
