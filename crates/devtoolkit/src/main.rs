use crate::prelude::*;
use clap::Parser;

mod ascii;
mod card;
mod clamp;
mod cron;
mod error;
mod hmac;
mod mcp;
mod morse;
mod number;
mod percent;
mod prelude;
mod shades;
mod text;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Small developer utilities: fluid CSS clamp() values, card checks, cron, encoders and more"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "DEVTOOLKIT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Generate a fluid CSS clamp() value between two viewport widths
    Clamp(crate::clamp::ClampOptions),

    /// Validate a credit card number with the Luhn algorithm
    Card(crate::card::CardOptions),

    /// Translate a 5-field cron expression into plain English
    Cron(crate::cron::CronOptions),

    /// Convert text to binary/hex character codes and back
    Ascii(crate::ascii::App),

    /// Generate lighter or darker shades of a HEX color
    Shades(crate::shades::ShadesOptions),

    /// Translate text to Morse code and back
    Morse(crate::morse::App),

    /// Text statistics, readability, case detection and word frequency
    Text(crate::text::App),

    /// Even/odd checks, squares and cubes
    Number(crate::number::App),

    /// Percentage calculator
    Percent(crate::percent::App),

    /// Generate an HMAC-SHA256 signature
    Hmac(crate::hmac::HmacOptions),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    log::debug!("dispatching {:?}", app.command);

    match app.command {
        SubCommands::Clamp(options) => crate::clamp::run(options, app.global),
        SubCommands::Card(options) => crate::card::run(options, app.global),
        SubCommands::Cron(options) => crate::cron::run(options, app.global),
        SubCommands::Ascii(sub_app) => crate::ascii::run(sub_app, app.global),
        SubCommands::Shades(options) => crate::shades::run(options, app.global),
        SubCommands::Morse(sub_app) => crate::morse::run(sub_app, app.global),
        SubCommands::Text(sub_app) => crate::text::run(sub_app, app.global),
        SubCommands::Number(sub_app) => crate::number::run(sub_app, app.global),
        SubCommands::Percent(sub_app) => crate::percent::run(sub_app, app.global),
        SubCommands::Hmac(options) => crate::hmac::run(options, app.global),
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
