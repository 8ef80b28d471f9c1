use crate::prelude::{eprintln, println, *};
use serde::Serialize;

use devtoolkit_core::ascii::{decode_text, encode_text, EncodedText};

#[derive(Debug, clap::Parser)]
#[command(name = "ascii")]
#[command(about = "Text to binary/hex character codes and back")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Encode text as binary and hex codes
    #[clap(name = "encode")]
    Encode(EncodeOptions),

    /// Decode binary or hex codes back into text
    #[clap(name = "decode")]
    Decode(DecodeOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct EncodeOptions {
    /// Text to encode
    text: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct DecodeOptions {
    /// Binary (8 digits) or hex (2 digits) codes, separated or contiguous
    input: String,

    /// Separator between codes; when absent the input is split on whitespace
    #[arg(short, long)]
    separator: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
pub struct DecodedText {
    pub text: String,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Encode(options) => {
            if global.verbose {
                eprintln!("Encoding {} characters", options.text.chars().count());
            }

            let encoded = encode_data(&options.text);
            if options.json {
                println!("{}", to_json(&encoded)?);
            } else {
                println!("{encoded}");
            }
        }
        Commands::Decode(options) => {
            let decoded = decode_data(&options.input, options.separator.as_deref())?;
            if options.json {
                println!("{}", to_json(&decoded)?);
            } else {
                println!("{}", decoded.text);
            }
        }
    }

    Ok(())
}

pub fn encode_data(text: &str) -> EncodedText {
    encode_text(text)
}

pub fn decode_data(input: &str, separator: Option<&str>) -> Result<DecodedText, Error> {
    let text = decode_text(input, separator)?;
    log::debug!("decoded {} characters", text.chars().count());
    Ok(DecodedText { text })
}
