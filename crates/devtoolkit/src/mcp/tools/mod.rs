mod checks;
mod css;
mod encoding;
mod number;
mod percent;
mod text;

use crate::prelude::{eprintln, println, *};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

fn internal_error(e: impl std::fmt::Display) -> JsonRpcError {
    JsonRpcError::new(JsonRpcError::INTERNAL_ERROR, format!("Internal error: {e}"))
}

/// Deserialize tool arguments; a missing object is treated as `{}`
pub fn parse_arguments<T: DeserializeOwned>(
    arguments: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    serde_json::from_value(arguments.unwrap_or_else(|| json!({}))).map_err(|e| {
        JsonRpcError::new(
            JsonRpcError::INVALID_PARAMS,
            format!("Invalid arguments: {e}"),
        )
    })
}

/// Text form of a scalar argument, so numbers and strings go through the same parser
pub fn value_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    }
}

/// Wrap a tool outcome; rejected input becomes an `isError` result, not a protocol error
pub fn tool_output<T: Serialize>(
    outcome: std::result::Result<T, Error>,
) -> Result<serde_json::Value, JsonRpcError> {
    let result = match outcome {
        Ok(data) => CallToolResult {
            content: vec![Content::Text {
                text: serde_json::to_string_pretty(&data).map_err(internal_error)?,
            }],
            is_error: None,
        },
        Err(err) => CallToolResult {
            content: vec![Content::Text {
                text: err.to_string(),
            }],
            is_error: Some(true),
        },
    };

    serde_json::to_value(result).map_err(internal_error)
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "devtoolkit".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(internal_error)
}

fn tool(name: &str, description: &str, input_schema: serde_json::Value) -> Tool {
    Tool {
        name: name.to_string(),
        description: description.to_string(),
        input_schema,
    }
}

pub fn tool_definitions() -> Vec<Tool> {
    let number_or_string = |description: &str| {
        json!({ "type": ["number", "string"], "description": description })
    };

    vec![
        tool(
            "clamp_generate",
            "Generate a fluid CSS clamp() value that scales linearly between two sizes across a viewport range. Sizes and viewports are in px; the output can be px or rem (1rem = 16px). Returns the expression, a full CSS declaration, the slope and intercept, and optional resolved sizes at preview viewport widths.",
            json!({
                "type": "object",
                "properties": {
                    "min_size": number_or_string("Size at the minimum viewport in px (default: 16)"),
                    "max_size": number_or_string("Size at the maximum viewport in px (default: 24)"),
                    "min_viewport": number_or_string("Viewport width where scaling starts, in px (default: 320)"),
                    "max_viewport": number_or_string("Viewport width where scaling ends, in px (default: 1200)"),
                    "unit": {
                        "type": "string",
                        "description": "Output unit (default: px)",
                        "enum": ["px", "rem"]
                    },
                    "property": {
                        "type": "string",
                        "description": "CSS property for the declaration (default: font-size)"
                    },
                    "preview": {
                        "type": "array",
                        "items": { "type": "number" },
                        "description": "Viewport widths in px to resolve the size at"
                    }
                },
                "required": []
            }),
        ),
        tool(
            "color_shades",
            "Generate ten lighter or darker shades of a HEX color, strongest first, with HEX, RGB and HSL values.",
            json!({
                "type": "object",
                "properties": {
                    "hex": { "type": "string", "description": "Base color as #rrggbb or #rgb (default: #7c3aed)" },
                    "percent": { "type": "number", "description": "Strength of the strongest shade, 1 to 100 (default: 20)" },
                    "mode": { "type": "string", "enum": ["lighten", "darken"], "description": "Mix towards white or black (default: lighten)" }
                },
                "required": []
            }),
        ),
        tool(
            "card_validate",
            "Validate a credit card number with the Luhn checksum and identify its brand. Only a masked number is returned.",
            json!({
                "type": "object",
                "properties": {
                    "number": { "type": "string", "description": "Card number; spaces and dashes are ignored" }
                },
                "required": ["number"]
            }),
        ),
        tool(
            "cron_translate",
            "Translate a standard 5-field cron expression (minute hour day-of-month month weekday) into plain English.",
            json!({
                "type": "object",
                "properties": {
                    "expression": { "type": "string", "description": "Cron expression, e.g. '*/15 9-17 * * 1-5'" }
                },
                "required": ["expression"]
            }),
        ),
        tool(
            "ascii_encode",
            "Encode text as space separated 8-digit binary and 2-digit hex character codes.",
            json!({
                "type": "object",
                "properties": {
                    "text": { "type": "string", "description": "Text to encode" }
                },
                "required": ["text"]
            }),
        ),
        tool(
            "ascii_decode",
            "Decode binary or hex character codes back into text. Codes may be separated or contiguous.",
            json!({
                "type": "object",
                "properties": {
                    "input": { "type": "string", "description": "Binary or hex codes" },
                    "separator": { "type": "string", "description": "Separator between codes (default: whitespace)" }
                },
                "required": ["input"]
            }),
        ),
        tool(
            "morse_translate",
            "Translate text to Morse code or Morse code back to text. Words are separated by ' / ' and unknown symbols become '?'.",
            json!({
                "type": "object",
                "properties": {
                    "input": { "type": "string", "description": "Text or Morse code" },
                    "direction": { "type": "string", "enum": ["encode", "decode"], "description": "Translation direction (default: encode)" }
                },
                "required": ["input"]
            }),
        ),
        tool(
            "hmac_sign",
            "Sign a message with HMAC-SHA256.",
            json!({
                "type": "object",
                "properties": {
                    "message": { "type": "string", "description": "Message to sign" },
                    "secret": { "type": "string", "description": "Secret key" },
                    "encoding": { "type": "string", "enum": ["hex", "base64"], "description": "Signature encoding (default: hex)" }
                },
                "required": ["message", "secret"]
            }),
        ),
        tool(
            "text_stats",
            "Analyze a text: characters (with and without whitespace), words, sentences, paragraphs, average word/sentence/paragraph length, reading time (200 wpm), speaking time (150 wpm), longest and shortest word, and letter case.",
            json!({
                "type": "object",
                "properties": {
                    "text": { "type": "string", "description": "Text to analyze" }
                },
                "required": ["text"]
            }),
        ),
        tool(
            "text_case",
            "Detect whether a text is UPPERCASE, lowercase or Mixed Case.",
            json!({
                "type": "object",
                "properties": {
                    "text": { "type": "string", "description": "Text to classify" }
                },
                "required": ["text"]
            }),
        ),
        tool(
            "text_frequency",
            "Rank the most frequent words of a text, optionally skipping short words and common English stopwords.",
            json!({
                "type": "object",
                "properties": {
                    "text": { "type": "string", "description": "Text to analyze" },
                    "min_length": { "type": "number", "description": "Ignore words shorter than this (default: 1)" },
                    "top": { "type": "number", "description": "Number of words to return (default: 20)" },
                    "stopwords": { "type": "string", "enum": ["none", "basic"], "description": "Stopword list to exclude (default: none)" }
                },
                "required": ["text"]
            }),
        ),
        tool(
            "number_parity",
            "Check whether a whole number is even or odd.",
            json!({
                "type": "object",
                "properties": {
                    "number": number_or_string("Whole number to check")
                },
                "required": ["number"]
            }),
        ),
        tool(
            "number_powers",
            "Square and cube a number.",
            json!({
                "type": "object",
                "properties": {
                    "number": number_or_string("Number to square and cube")
                },
                "required": ["number"]
            }),
        ),
        tool(
            "percent_calculate",
            "Percentage calculator. 'of': a% of b. 'ratio': a is what percent of b. 'change': percent change from a to b.",
            json!({
                "type": "object",
                "properties": {
                    "operation": { "type": "string", "enum": ["of", "ratio", "change"] },
                    "a": { "type": "number", "description": "Percent, part or old value" },
                    "b": { "type": "number", "description": "Number, whole or new value" }
                },
                "required": ["operation", "a", "b"]
            }),
        ),
    ]
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let result = ToolsList {
        tools: tool_definitions(),
    };

    serde_json::to_value(result).map_err(internal_error)
}

pub fn handle_tools_call(
    params: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| {
            JsonRpcError::new(JsonRpcError::INVALID_PARAMS, format!("Invalid params: {e}"))
        })?;

    if global.verbose {
        eprintln!("Calling {}", params.name);
    }

    match params.name.as_str() {
        "clamp_generate" => css::handle_clamp_generate(params.arguments),
        "color_shades" => css::handle_color_shades(params.arguments),
        "card_validate" => checks::handle_card_validate(params.arguments),
        "cron_translate" => checks::handle_cron_translate(params.arguments),
        "ascii_encode" => encoding::handle_ascii_encode(params.arguments),
        "ascii_decode" => encoding::handle_ascii_decode(params.arguments),
        "morse_translate" => encoding::handle_morse_translate(params.arguments),
        "hmac_sign" => encoding::handle_hmac_sign(params.arguments),
        "text_stats" => text::handle_text_stats(params.arguments),
        "text_case" => text::handle_text_case(params.arguments),
        "text_frequency" => text::handle_text_frequency(params.arguments),
        "number_parity" => number::handle_number_parity(params.arguments),
        "number_powers" => number::handle_number_powers(params.arguments),
        "percent_calculate" => percent::handle_percent_calculate(params.arguments),
        _ => Err(JsonRpcError::new(
            JsonRpcError::INVALID_PARAMS,
            format!("Unknown tool: {}", params.name),
        )),
    }
}

pub fn print_tools() -> Result<()> {
    let mut table = new_table();
    table.add_row(prettytable::row!["Tool", "Description"]);

    for tool in tool_definitions() {
        let summary = tool.description.split(". ").next().unwrap_or_default();
        table.add_row(prettytable::row![tool.name, summary]);
    }

    println!("{table}");
    Ok(())
}
