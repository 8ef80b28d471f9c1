use serde::Deserialize;

use super::{parse_arguments, tool_output, JsonRpcError};

pub fn handle_card_validate(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CardArgs {
        number: String,
    }

    let args: CardArgs = parse_arguments(arguments)?;
    tool_output(crate::card::card_data(&args.number))
}

pub fn handle_cron_translate(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CronArgs {
        expression: String,
    }

    let args: CronArgs = parse_arguments(arguments)?;
    tool_output(crate::cron::cron_data(&args.expression))
}
