//! Integer parity and square/cube helpers.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    #[error("Please enter a number.")]
    Empty,

    #[error("Invalid input. Please enter a valid number.")]
    Invalid,

    #[error("This tool only works with whole numbers (integers).")]
    NotInteger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn explanation(self) -> &'static str {
        match self {
            Parity::Even => "This number is divisible by 2 with no remainder.",
            Parity::Odd => "This number leaves a remainder of 1 when divided by 2.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParityReport {
    pub number: f64,
    pub parity: Parity,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Powers {
    pub number: f64,
    pub square: f64,
    pub cube: f64,
}

/// Parse a trimmed decimal number; blank is `Empty`, non-finite is `Invalid`
pub fn parse_number_input(input: &str) -> Result<f64, NumberError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NumberError::Empty);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(NumberError::Invalid)
}

pub fn check_parity(input: &str) -> Result<ParityReport, NumberError> {
    let number = parse_number_input(input)?;
    if number.fract() != 0.0 {
        return Err(NumberError::NotInteger);
    }

    let parity = if number % 2.0 == 0.0 {
        Parity::Even
    } else {
        Parity::Odd
    };

    Ok(ParityReport {
        number,
        parity,
        explanation: parity.explanation().to_string(),
    })
}

pub fn square_and_cube(input: &str) -> Result<Powers, NumberError> {
    let number = parse_number_input(input)?;

    Ok(Powers {
        number,
        square: number * number,
        cube: number * number * number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_input() {
        assert_eq!(parse_number_input(" 42 "), Ok(42.0));
        assert_eq!(parse_number_input("-1.5e2"), Ok(-150.0));
        assert_eq!(parse_number_input("  "), Err(NumberError::Empty));
        assert_eq!(parse_number_input("12abc"), Err(NumberError::Invalid));
        assert_eq!(parse_number_input("inf"), Err(NumberError::Invalid));
    }

    #[test]
    fn test_check_parity() {
        assert_eq!(check_parity("10").unwrap().parity, Parity::Even);
        assert_eq!(check_parity("0").unwrap().parity, Parity::Even);
        assert_eq!(check_parity("-7").unwrap().parity, Parity::Odd);
        assert_eq!(check_parity("4.0").unwrap().parity, Parity::Even);
    }

    #[test]
    fn test_check_parity_rejects_fractions() {
        assert_eq!(check_parity("2.5"), Err(NumberError::NotInteger));
        assert_eq!(
            NumberError::NotInteger.to_string(),
            "This tool only works with whole numbers (integers)."
        );
    }

    #[test]
    fn test_parity_explanation() {
        let report = check_parity("3").unwrap();
        assert_eq!(
            report.explanation,
            "This number leaves a remainder of 1 when divided by 2."
        );
    }

    #[test]
    fn test_square_and_cube() {
        let powers = square_and_cube("-3").unwrap();
        assert_eq!(powers.square, 9.0);
        assert_eq!(powers.cube, -27.0);

        let powers = square_and_cube("1.5").unwrap();
        assert_eq!(powers.square, 2.25);
        assert_eq!(powers.cube, 3.375);

        assert_eq!(square_and_cube("x"), Err(NumberError::Invalid));
    }
}
