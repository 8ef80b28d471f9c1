use serde::Deserialize;

use devtoolkit_core::text::{detect_case, FrequencyOptions, StopwordMode};

use super::{parse_arguments, tool_output, JsonRpcError};
use crate::prelude::Error;

#[derive(Deserialize)]
struct TextArgs {
    text: String,
}

pub fn handle_text_stats(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: TextArgs = parse_arguments(arguments)?;
    tool_output(Ok::<_, Error>(crate::text::stats_data(&args.text)))
}

pub fn handle_text_case(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: TextArgs = parse_arguments(arguments)?;
    let case = detect_case(&args.text);
    tool_output(Ok::<_, Error>(serde_json::json!({ "case": case })))
}

pub fn handle_text_frequency(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct FrequencyArgs {
        text: String,
        min_length: Option<usize>,
        top: Option<usize>,
        stopwords: Option<StopwordMode>,
    }

    let args: FrequencyArgs = parse_arguments(arguments)?;
    let defaults = FrequencyOptions::default();
    let options = FrequencyOptions {
        min_length: args.min_length.unwrap_or(defaults.min_length),
        top_n: args.top.unwrap_or(defaults.top_n),
        stopwords: args.stopwords.unwrap_or(defaults.stopwords),
    };

    let report = crate::text::frequency_data(&args.text, options);
    tool_output(Ok::<_, Error>(report))
}
