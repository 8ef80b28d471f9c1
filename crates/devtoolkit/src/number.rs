use crate::prelude::{eprintln, println, *};
use colored::Colorize;

use devtoolkit_core::number::{check_parity, square_and_cube, Parity, ParityReport, Powers};

#[derive(Debug, clap::Parser)]
#[command(name = "number")]
#[command(about = "Even/odd checks, squares and cubes")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Check whether a whole number is even or odd
    #[clap(name = "parity", allow_negative_numbers = true)]
    Parity { number: String },

    /// Square and cube a number
    #[clap(name = "powers", allow_negative_numbers = true)]
    Powers { number: String },
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Calculating {:?}", app.command);
    }

    match app.command {
        Commands::Parity { number } => {
            let report = parity_data(&number)?;
            if app.json {
                println!("{}", to_json(&report)?);
            } else {
                println!("{}", format_parity_text(&report));
            }
        }
        Commands::Powers { number } => {
            let powers = powers_data(&number)?;
            if app.json {
                println!("{}", to_json(&powers)?);
            } else {
                print!("{}", format_powers_text(&powers));
            }
        }
    }

    Ok(())
}

pub fn parity_data(number: &str) -> Result<ParityReport, Error> {
    Ok(check_parity(number)?)
}

pub fn powers_data(number: &str) -> Result<Powers, Error> {
    Ok(square_and_cube(number)?)
}

fn format_parity_text(report: &ParityReport) -> String {
    let label = match report.parity {
        Parity::Even => "Even".bright_green().bold(),
        Parity::Odd => "Odd".bright_yellow().bold(),
    };

    format!("{} is {label}\n{}", report.number, report.explanation)
}

fn format_powers_text(powers: &Powers) -> String {
    let mut table = new_table();
    table.add_row(prettytable::row!["Number", powers.number]);
    table.add_row(prettytable::row!["Square", powers.square]);
    table.add_row(prettytable::row!["Cube", powers.cube]);
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_data() {
        let report = parity_data("-12").unwrap();
        assert_eq!(report.parity, Parity::Even);
        assert!(format_parity_text(&report).starts_with("-12 is "));
    }

    #[test]
    fn test_parity_data_errors() {
        assert_eq!(
            parity_data("").unwrap_err().to_string(),
            "Please enter a number."
        );
        assert!(matches!(parity_data("7.1"), Err(Error::Number(_))));
    }

    #[test]
    fn test_powers_data() {
        let powers = powers_data("12").unwrap();
        assert_eq!(powers.square, 144.0);
        assert_eq!(powers.cube, 1728.0);
        let text = format_powers_text(&powers);
        assert!(text.contains("144"));
        assert!(text.contains("1728"));
    }
}
