//! HMAC-SHA256 message signatures.

use base64::Engine;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("Please enter both message and secret key.")]
    MissingInput,

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureEncoding {
    #[default]
    Hex,
    Base64,
}

/// Sign `message` with `secret`; blank message or secret is rejected
pub fn hmac_sha256(
    message: &str,
    secret: &str,
    encoding: SignatureEncoding,
) -> Result<String, SignatureError> {
    if message.trim().is_empty() || secret.trim().is_empty() {
        return Err(SignatureError::MissingInput);
    }

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| SignatureError::InvalidKey(e.to_string()))?;
    mac.update(message.as_bytes());
    let digest = mac.finalize().into_bytes();

    Ok(match encoding {
        SignatureEncoding::Hex => digest.iter().map(|b| format!("{b:02x}")).collect(),
        SignatureEncoding::Base64 => base64::engine::general_purpose::STANDARD.encode(digest),
    })
}
