//! Plain-English descriptions of standard 5-field cron expressions.

/// Field units in expression order: minute hour day-of-month month weekday
pub const FIELD_UNITS: [&str; 5] = ["minute", "hour", "day of month", "month", "weekday"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CronError {
    #[error("Please enter a standard 5-field cron expression.")]
    FieldCount(usize),

    #[error("Invalid {unit} field: '{field}'")]
    InvalidField { unit: String, field: String },
}

fn plural(n: u32) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}

fn parse_value(field: &str, raw: &str, unit: &str) -> Result<u32, CronError> {
    raw.trim().parse::<u32>().map_err(|_| CronError::InvalidField {
        unit: unit.to_string(),
        field: field.to_string(),
    })
}

/// Describe a single cron field for the given unit.
///
/// Tokens that are not steps, lists, ranges or numbers (`MON`, `L`, `?`) are
/// echoed back unchanged.
pub fn describe_field(field: &str, unit: &str) -> Result<String, CronError> {
    if field == "*" {
        return Ok(format!("every {unit}"));
    }

    if let Some(step) = field.strip_prefix("*/") {
        let n = parse_value(field, step, unit)?;
        return Ok(format!("every {n} {unit}{}", plural(n)));
    }

    if field.contains(',') {
        return Ok(format!("at {}", field.split(',').collect::<Vec<_>>().join(", ")));
    }

    if let Some((from, to)) = field.split_once('-') {
        let from = parse_value(field, from, unit)?;
        let to = parse_value(field, to, unit)?;
        return Ok(format!("from {from} to {to} {unit}s"));
    }

    if field.parse::<f64>().is_ok_and(f64::is_finite) {
        let suffix = if field == "1" { "" } else { "s" };
        return Ok(format!("at {field} {unit}{suffix}"));
    }

    Ok(field.to_string())
}

/// Translate a cron expression into a sentence
pub fn translate_cron(expression: &str) -> Result<String, CronError> {
    let parts: Vec<&str> = expression.split_whitespace().collect();
    let &[minute, hour, day, month, weekday] = parts.as_slice() else {
        return Err(CronError::FieldCount(parts.len()));
    };

    let rest_is_wildcard = [hour, day, month, weekday].iter().all(|f| *f == "*");

    if rest_is_wildcard {
        if let Some(step) = minute.strip_prefix("*/") {
            let n = parse_value(minute, step, FIELD_UNITS[0])?;
            return Ok(format!("Every {n} minute{}.", plural(n)));
        }
        if minute == "0" {
            return Ok("Every hour at minute 0.".to_string());
        }
    }

    let descriptions = parts
        .iter()
        .zip(FIELD_UNITS)
        .map(|(field, unit)| describe_field(field, unit))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!("{}.", descriptions.join(", ")))
}
