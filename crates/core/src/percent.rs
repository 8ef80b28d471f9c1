//! Percentage calculations: percent of a number, ratio as percent, and change.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PercentError {
    #[error("Please enter valid numbers.")]
    InvalidNumber,

    #[error("Please enter valid numbers. {0} cannot be zero.")]
    ZeroDivisor(&'static str),
}

/// Outcome of one of the three calculations, rendered as a sentence
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PercentResult {
    PercentOf { percent: f64, number: f64, value: f64 },
    Ratio { part: f64, whole: f64, value: f64 },
    Change { old: f64, new: f64, value: f64 },
}

impl PercentResult {
    pub fn value(&self) -> f64 {
        match self {
            PercentResult::PercentOf { value, .. }
            | PercentResult::Ratio { value, .. }
            | PercentResult::Change { value, .. } => *value,
        }
    }
}

impl fmt::Display for PercentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentResult::PercentOf {
                percent,
                number,
                value,
            } => write!(f, "{percent}% of {number} = {value:.2}"),
            PercentResult::Ratio { part, whole, value } => {
                write!(f, "{part} is {value:.2}% of {whole}")
            }
            PercentResult::Change { value, .. } if *value > 0.0 => {
                write!(f, "Increased by {value:.2}%")
            }
            PercentResult::Change { value, .. } => write!(f, "Decreased by {:.2}%", value.abs()),
        }
    }
}

fn ensure_finite(values: &[f64]) -> Result<(), PercentError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(PercentError::InvalidNumber)
    }
}

/// `percent`% of `number`
pub fn percent_of(percent: f64, number: f64) -> Result<PercentResult, PercentError> {
    ensure_finite(&[percent, number])?;
    Ok(PercentResult::PercentOf {
        percent,
        number,
        value: percent / 100.0 * number,
    })
}

/// What percent `part` is of `whole`
pub fn percent_ratio(part: f64, whole: f64) -> Result<PercentResult, PercentError> {
    ensure_finite(&[part, whole])?;
    if whole == 0.0 {
        return Err(PercentError::ZeroDivisor("Whole"));
    }
    Ok(PercentResult::Ratio {
        part,
        whole,
        value: part / whole * 100.0,
    })
}

/// Relative change from `old` to `new`, in percent
pub fn percent_change(old: f64, new: f64) -> Result<PercentResult, PercentError> {
    ensure_finite(&[old, new])?;
    if old == 0.0 {
        return Err(PercentError::ZeroDivisor("Old value"));
    }
    Ok(PercentResult::Change {
        old,
        new,
        value: (new - old) / old * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        let result = percent_of(12.5, 80.0).unwrap();
        assert_eq!(result.value(), 10.0);
        assert_eq!(result.to_string(), "12.5% of 80 = 10.00");
    }

    #[test]
    fn test_percent_ratio() {
        let result = percent_ratio(20.0, 80.0).unwrap();
        assert_eq!(result.to_string(), "20 is 25.00% of 80");
    }

    #[test]
    fn test_percent_ratio_zero_whole() {
        assert_eq!(
            percent_ratio(1.0, 0.0).unwrap_err(),
            PercentError::ZeroDivisor("Whole")
        );
    }

    #[test]
    fn test_percent_change_increase() {
        assert_eq!(
            percent_change(40.0, 60.0).unwrap().to_string(),
            "Increased by 50.00%"
        );
    }

    #[test]
    fn test_percent_change_decrease_and_flat() {
        assert_eq!(
            percent_change(80.0, 60.0).unwrap().to_string(),
            "Decreased by 25.00%"
        );
        assert_eq!(
            percent_change(10.0, 10.0).unwrap().to_string(),
            "Decreased by 0.00%"
        );
    }

    #[test]
    fn test_percent_change_zero_old() {
        assert!(percent_change(0.0, 5.0).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(
            percent_of(f64::NAN, 1.0).unwrap_err(),
            PercentError::InvalidNumber
        );
        assert_eq!(
            percent_change(1.0, f64::INFINITY).unwrap_err(),
            PercentError::InvalidNumber
        );
    }
}
