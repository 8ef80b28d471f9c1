use crate::prelude::{eprintln, println, *};
use serde::Serialize;

use devtoolkit_core::morse::{morse_to_text, text_to_morse};

#[derive(Debug, clap::Parser)]
#[command(name = "morse")]
#[command(about = "Morse code translator")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Translate text to Morse code; words are separated by ` / `
    #[clap(name = "encode")]
    Encode(MorseOptions),

    /// Translate Morse code to uppercase text
    #[clap(name = "decode")]
    Decode(MorseOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct MorseOptions {
    /// Input to translate
    #[arg(allow_hyphen_values = true)]
    input: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encode,
    Decode,
}

#[derive(Debug, Serialize)]
pub struct MorseOutput {
    pub direction: Direction,
    pub input: String,
    pub output: String,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let (direction, options) = match app.command {
        Commands::Encode(options) => (Direction::Encode, options),
        Commands::Decode(options) => (Direction::Decode, options),
    };

    if global.verbose {
        eprintln!("{direction:?}: {} characters", options.input.chars().count());
    }

    let output = morse_data(&options.input, direction);

    if options.json {
        println!("{}", to_json(&output)?);
    } else {
        println!("{}", output.output);
    }

    Ok(())
}

pub fn morse_data(input: &str, direction: Direction) -> MorseOutput {
    let output = match direction {
        Direction::Encode => text_to_morse(input),
        Direction::Decode => morse_to_text(input),
    };

    MorseOutput {
        direction,
        input: input.to_string(),
        output,
    }
}
