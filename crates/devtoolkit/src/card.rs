use crate::prelude::{eprintln, println, *};
use colored::Colorize;

use devtoolkit_core::card::{validate_card, CardReport};

#[derive(Debug, clap::Args, Clone)]
pub struct CardOptions {
    /// Card number; spaces and dashes are ignored
    #[clap(env = "DEVTOOLKIT_CARD_NUMBER")]
    number: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(options: CardOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Validating {} characters of input", options.number.len());
    }

    let report = card_data(&options.number)?;

    if options.json {
        println!("{}", to_json(&report)?);
    } else {
        println!("{}", format_card_text(&report));
    }

    Ok(())
}

pub fn card_data(number: &str) -> Result<CardReport, Error> {
    Ok(validate_card(number)?)
}

fn format_card_text(report: &CardReport) -> String {
    let status = if report.valid {
        "Valid".bright_green().bold()
    } else {
        "Invalid".bright_red().bold()
    };

    let mut table = new_table();
    table.add_row(prettytable::row!["Number", report.masked_number]);
    table.add_row(prettytable::row!["Brand", report.brand_name]);
    table.add_row(prettytable::row!["Length", report.length]);

    format!("{status} card number\n\n{table}")
}
