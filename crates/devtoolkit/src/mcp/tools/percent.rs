use serde::Deserialize;

use super::{parse_arguments, tool_output, JsonRpcError};
use crate::percent::{percent_data, Commands};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Operation {
    Of,
    Ratio,
    Change,
}

pub fn handle_percent_calculate(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct PercentArgs {
        operation: Operation,
        a: f64,
        b: f64,
    }

    let PercentArgs { operation, a, b } = parse_arguments(arguments)?;
    let command = match operation {
        Operation::Of => Commands::Of {
            percent: a,
            number: b,
        },
        Operation::Ratio => Commands::Ratio { part: a, whole: b },
        Operation::Change => Commands::Change { old: a, new: b },
    };

    tool_output(percent_data(&command))
}
