use crate::prelude::{eprintln, println, *};
use serde::Serialize;

use devtoolkit_core::cron::translate_cron;

#[derive(Debug, clap::Args, Clone)]
pub struct CronOptions {
    /// Five whitespace separated fields: minute hour day-of-month month weekday
    #[arg(required = true, num_args = 1..)]
    expression: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
pub struct CronOutput {
    pub expression: String,
    pub description: String,
}

pub fn run(options: CronOptions, global: crate::Global) -> Result<()> {
    let expression = options.expression.join(" ");

    if global.verbose {
        eprintln!("Translating '{expression}'");
    }

    let output = cron_data(&expression)?;

    if options.json {
        println!("{}", to_json(&output)?);
    } else {
        println!("{}", output.description);
    }

    Ok(())
}

pub fn cron_data(expression: &str) -> Result<CronOutput, Error> {
    let description = translate_cron(expression)?;

    Ok(CronOutput {
        expression: expression.trim().to_string(),
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cron_data_shortcut() {
        let output = cron_data(" */5 * * * * ").unwrap();
        assert_eq!(output.expression, "*/5 * * * *");
        assert_eq!(output.description, "Every 5 minutes.");
    }

    #[test]
    fn test_cron_data_field_count() {
        let err = cron_data("* * *").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter a standard 5-field cron expression."
        );
    }
}
