use crate::prelude::{eprintln, println, *};

use devtoolkit_core::percent::{percent_change, percent_of, percent_ratio, PercentResult};

#[derive(Debug, clap::Parser)]
#[command(name = "percent")]
#[command(about = "Percentage calculator")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// X% of Y
    #[clap(name = "of", allow_negative_numbers = true)]
    Of { percent: f64, number: f64 },

    /// X is what percent of Y
    #[clap(name = "ratio", allow_negative_numbers = true)]
    Ratio { part: f64, whole: f64 },

    /// Percent change from X to Y
    #[clap(name = "change", allow_negative_numbers = true)]
    Change { old: f64, new: f64 },
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Calculating {:?}", app.command);
    }

    let result = percent_data(&app.command)?;

    if app.json {
        println!("{}", to_json(&result)?);
    } else {
        println!("{result}");
    }

    Ok(())
}

pub fn percent_data(command: &Commands) -> Result<PercentResult, Error> {
    let result = match *command {
        Commands::Of { percent, number } => percent_of(percent, number)?,
        Commands::Ratio { part, whole } => percent_ratio(part, whole)?,
        Commands::Change { old, new } => percent_change(old, new)?,
    };
    Ok(result)
}
