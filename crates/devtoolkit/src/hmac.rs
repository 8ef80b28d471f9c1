use crate::prelude::{eprintln, println, *};
use serde::Serialize;

use devtoolkit_core::signature::{hmac_sha256, SignatureEncoding};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Encoding {
    Hex,
    Base64,
}

impl From<Encoding> for SignatureEncoding {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Hex => SignatureEncoding::Hex,
            Encoding::Base64 => SignatureEncoding::Base64,
        }
    }
}

#[derive(Debug, clap::Args, Clone)]
pub struct HmacOptions {
    /// Message to sign
    message: String,

    /// Secret key
    #[arg(short, long, env = "DEVTOOLKIT_HMAC_SECRET", hide_env_values = true)]
    secret: String,

    /// Signature encoding
    #[arg(short, long, value_enum, default_value = "hex")]
    encoding: Encoding,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
pub struct SignatureOutput {
    pub algorithm: &'static str,
    pub encoding: SignatureEncoding,
    pub signature: String,
}

pub fn run(options: HmacOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Signing {} bytes", options.message.len());
    }

    let output = hmac_data(&options.message, &options.secret, options.encoding.into())?;

    if options.json {
        println!("{}", to_json(&output)?);
    } else {
        println!("{}", output.signature);
    }

    Ok(())
}

pub fn hmac_data(
    message: &str,
    secret: &str,
    encoding: SignatureEncoding,
) -> Result<SignatureOutput, Error> {
    Ok(SignatureOutput {
        algorithm: "HMAC-SHA256",
        encoding,
        signature: hmac_sha256(message, secret, encoding)?,
    })
}
