use serde::Deserialize;

use super::{parse_arguments, tool_output, value_text, JsonRpcError};

#[derive(Deserialize)]
struct NumberArgs {
    number: serde_json::Value,
}

pub fn handle_number_parity(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: NumberArgs = parse_arguments(arguments)?;
    tool_output(crate::number::parity_data(&value_text(args.number)))
}

pub fn handle_number_powers(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: NumberArgs = parse_arguments(arguments)?;
    tool_output(crate::number::powers_data(&value_text(args.number)))
}
