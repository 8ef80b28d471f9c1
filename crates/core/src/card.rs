//! Credit card number checks: Luhn checksum, brand detection and masking.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

pub const MIN_CARD_DIGITS: usize = 13;
pub const MAX_CARD_DIGITS: usize = 19;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("Enter a card number to validate")]
    Empty,
}

/// Card network, matched in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Diners,
    Jcb,
    Unknown,
}

static BRAND_PATTERNS: LazyLock<Vec<(CardBrand, Regex)>> = LazyLock::new(|| {
    [
        (CardBrand::Visa, r"^4[0-9]{12}(?:[0-9]{3})?$"),
        (CardBrand::Mastercard, r"^5[1-5][0-9]{14}$"),
        (CardBrand::Amex, r"^3[47][0-9]{13}$"),
        (CardBrand::Discover, r"^6(?:011|5[0-9]{2})[0-9]{12}$"),
        (CardBrand::Diners, r"^3[0689][0-9]{11}$"),
        (CardBrand::Jcb, r"^(?:2131|1800|35\d{3})\d{11}$"),
    ]
    .into_iter()
    .map(|(brand, pattern)| (brand, Regex::new(pattern).expect("card brand regex")))
    .collect()
});

impl CardBrand {
    pub fn display_name(self) -> &'static str {
        match self {
            CardBrand::Visa => "Visa",
            CardBrand::Mastercard => "Mastercard",
            CardBrand::Amex => "American Express",
            CardBrand::Discover => "Discover",
            CardBrand::Diners => "Diners Club",
            CardBrand::Jcb => "JCB",
            CardBrand::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Validation summary for a single card number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardReport {
    pub brand: CardBrand,
    pub brand_name: String,
    pub masked_number: String,
    pub length: usize,
    pub valid: bool,
}

/// Keep only the ASCII digits of the input
pub fn clean_card_number(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Luhn checksum over the digits of `input`.
///
/// Numbers with fewer than 13 or more than 19 digits never pass.
pub fn luhn_check(input: &str) -> bool {
    let digits = clean_card_number(input);
    if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len()) {
        return false;
    }

    let sum: u32 = digits
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(idx, digit)| {
            if idx % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    sum % 10 == 0
}

pub fn identify_brand(input: &str) -> CardBrand {
    let digits = clean_card_number(input);
    BRAND_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(&digits))
        .map(|(brand, _)| *brand)
        .unwrap_or(CardBrand::Unknown)
}

/// Group digits in blocks of four: `4111 1111 1111 1111`
pub fn format_card_number(input: &str) -> String {
    let digits = clean_card_number(input);
    digits
        .as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formatted number with every digit except the last four replaced by `*`
pub fn mask_card_number(input: &str) -> String {
    let formatted = format_card_number(input);
    let total = formatted.chars().filter(char::is_ascii_digit).count();
    let visible_from = total.saturating_sub(4);

    let mut seen = 0;
    formatted
        .chars()
        .map(|c| {
            if !c.is_ascii_digit() {
                return c;
            }
            seen += 1;
            if seen > visible_from {
                c
            } else {
                '*'
            }
        })
        .collect()
}

pub fn validate_card(input: &str) -> Result<CardReport, CardError> {
    let digits = clean_card_number(input);
    if digits.is_empty() {
        return Err(CardError::Empty);
    }

    let brand = identify_brand(&digits);

    Ok(CardReport {
        brand,
        brand_name: brand.display_name().to_string(),
        masked_number: mask_card_number(&digits),
        length: digits.len(),
        valid: luhn_check(&digits),
    })
}
