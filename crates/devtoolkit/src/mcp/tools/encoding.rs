use serde::Deserialize;

use devtoolkit_core::signature::SignatureEncoding;

use super::{parse_arguments, tool_output, JsonRpcError};
use crate::morse::Direction;
use crate::prelude::Error;

pub fn handle_ascii_encode(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct EncodeArgs {
        text: String,
    }

    let args: EncodeArgs = parse_arguments(arguments)?;
    tool_output(Ok::<_, Error>(crate::ascii::encode_data(&args.text)))
}

pub fn handle_ascii_decode(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct DecodeArgs {
        input: String,
        separator: Option<String>,
    }

    let args: DecodeArgs = parse_arguments(arguments)?;
    tool_output(crate::ascii::decode_data(
        &args.input,
        args.separator.as_deref(),
    ))
}

pub fn handle_morse_translate(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct MorseArgs {
        input: String,
        direction: Option<Direction>,
    }

    let args: MorseArgs = parse_arguments(arguments)?;
    let direction = args.direction.unwrap_or(Direction::Encode);
    tool_output(Ok::<_, Error>(crate::morse::morse_data(
        &args.input,
        direction,
    )))
}

pub fn handle_hmac_sign(
    arguments: Option<serde_json::Value>,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct HmacArgs {
        message: String,
        secret: String,
        encoding: Option<SignatureEncoding>,
    }

    let args: HmacArgs = parse_arguments(arguments)?;
    tool_output(crate::hmac::hmac_data(
        &args.message,
        &args.secret,
        args.encoding.unwrap_or_default(),
    ))
}
