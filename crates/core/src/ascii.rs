//! Conversions between text and its binary / hexadecimal character codes.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AsciiError {
    #[error("Invalid input for the selected mode: '{0}' is neither binary nor hex")]
    InvalidPart(String),

    #[error("Character code {0} is not a valid character")]
    InvalidCodePoint(u32),
}

/// Binary and hex renderings of the same text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedText {
    pub binary: String,
    pub hex: String,
}

impl fmt::Display for EncodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Binary:\n{}\n\nHex:\n{}", self.binary, self.hex)
    }
}

/// Encode each character as 8-digit binary and 2-digit uppercase hex codes
pub fn encode_text(text: &str) -> EncodedText {
    let codes: Vec<u32> = text.chars().map(u32::from).collect();

    EncodedText {
        binary: codes
            .iter()
            .map(|code| format!("{code:08b}"))
            .collect::<Vec<_>>()
            .join(" "),
        hex: codes
            .iter()
            .map(|code| format!("{code:02X}"))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn is_binary(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c == '0' || c == '1')
}

fn split_parts(input: &str, separator: Option<&str>) -> Vec<String> {
    let trimmed = input.trim();

    if let Some(separator) = separator.filter(|s| !s.is_empty()) {
        return trimmed.split(separator).map(str::to_string).collect();
    }

    let contiguous: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    let width = if is_binary(&contiguous) { 8 } else { 2 };

    contiguous
        .chars()
        .collect::<Vec<_>>()
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Decode binary or hex character codes back into text.
///
/// With a separator the input is split on it. Without one, whitespace is
/// removed and the remainder is read in 8-digit chunks when it is pure
/// binary, 2-digit chunks otherwise. Each part is binary when it only holds
/// `0` and `1`, hex otherwise.
pub fn decode_text(input: &str, separator: Option<&str>) -> Result<String, AsciiError> {
    split_parts(input, separator)
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let radix = if is_binary(part) { 2 } else { 16 };
            let code = u32::from_str_radix(part, radix)
                .map_err(|_| AsciiError::InvalidPart(part.to_string()))?;
            char::from_u32(code).ok_or(AsciiError::InvalidCodePoint(code))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_text() {
        let encoded = encode_text("Hi");
        assert_eq!(encoded.binary, "01001000 01101001");
        assert_eq!(encoded.hex, "48 69");
    }

    #[test]
    fn test_encode_text_display() {
        assert_eq!(encode_text("A").to_string(), "Binary:\n01000001\n\nHex:\n41");
    }

    #[test]
    fn test_encode_empty() {
        let encoded = encode_text("");
        assert_eq!(encoded.binary, "");
        assert_eq!(encoded.hex, "");
    }

    #[test]
    fn test_decode_binary_with_spaces() {
        assert_eq!(decode_text("01001000 01101001", None).unwrap(), "Hi");
    }

    #[test]
    fn test_decode_contiguous_binary() {
        assert_eq!(decode_text("0100100001101001", None).unwrap(), "Hi");
    }

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_text("48 69", None).unwrap(), "Hi");
        assert_eq!(decode_text("4869", None).unwrap(), "Hi");
        assert_eq!(decode_text("4a", None).unwrap(), "J");
    }

    #[test]
    fn test_decode_with_separator() {
        assert_eq!(decode_text("48,69,21", Some(",")).unwrap(), "Hi!");
        assert_eq!(decode_text("1001000|1101001", Some("|")).unwrap(), "Hi");
    }

    #[test]
    fn test_decode_separator_skips_empty_parts() {
        assert_eq!(decode_text("48,,69,", Some(",")).unwrap(), "Hi");
    }

    #[test]
    fn test_decode_invalid_part() {
        assert_eq!(
            decode_text("zz", None).unwrap_err(),
            AsciiError::InvalidPart("zz".to_string())
        );
    }

    #[test]
    fn test_decode_invalid_code_point() {
        assert_eq!(
            decode_text("D800", Some(" ")).unwrap_err(),
            AsciiError::InvalidCodePoint(0xD800)
        );
    }

    #[test]
    fn test_round_trip_text() {
        let encoded = encode_text("Rust!");
        assert_eq!(decode_text(&encoded.hex, None).unwrap(), "Rust!");
        assert_eq!(decode_text(&encoded.binary, None).unwrap(), "Rust!");
    }
}
