use devtoolkit_core::{
    ascii::AsciiError, card::CardError, clamp::ClampError, color::ColorError, cron::CronError,
    number::NumberError, percent::PercentError, signature::SignatureError,
};

/// Input rejected by one of the tools.
///
/// The message is the user-facing one from the core; the MCP server reports
/// these as tool results with `isError` set rather than as protocol errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Clamp(#[from] ClampError),

    #[error(transparent)]
    Card(#[from] CardError),

    #[error(transparent)]
    Cron(#[from] CronError),

    #[error(transparent)]
    Ascii(#[from] AsciiError),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Number(#[from] NumberError),

    #[error(transparent)]
    Percent(#[from] PercentError),

    #[error(transparent)]
    Signature(#[from] SignatureError),
}
