use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use serde::Serialize;

use devtoolkit_core::color::{
    build_shades, clean_hex, shades_to_css, Shade, ShadeMode, DEFAULT_BASE_HEX,
    DEFAULT_SHADE_PERCENT,
};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Mode {
    Lighten,
    Darken,
}

impl From<Mode> for ShadeMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Lighten => ShadeMode::Lighten,
            Mode::Darken => ShadeMode::Darken,
        }
    }
}

#[derive(Debug, clap::Args, Clone)]
pub struct ShadesOptions {
    /// Base color as #rrggbb or #rgb
    #[arg(default_value = DEFAULT_BASE_HEX)]
    hex: String,

    /// Strength of the strongest shade, 1 to 100
    #[arg(short, long, default_value_t = DEFAULT_SHADE_PERCENT)]
    percent: f64,

    /// Mix towards white or black
    #[arg(short, long, value_enum, default_value = "lighten")]
    mode: Mode,

    /// Print the shades as CSS custom properties
    #[arg(long, conflicts_with = "json")]
    css: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
pub struct ShadesOutput {
    pub base: String,
    pub mode: ShadeMode,
    pub percent: f64,
    pub shades: Vec<Shade>,
}

impl ShadesOutput {
    pub fn to_css(&self) -> String {
        shades_to_css(&self.base, &self.shades)
    }
}

pub fn run(options: ShadesOptions, global: crate::Global) -> Result<()> {
    let output = shades_data(&options.hex, options.percent, options.mode.into())?;

    if global.verbose {
        eprintln!(
            "{} {} shades of {}",
            output.shades.len(),
            if matches!(output.mode, ShadeMode::Lighten) { "lighter" } else { "darker" },
            output.base
        );
    }

    if options.json {
        println!("{}", to_json(&output)?);
    } else if options.css {
        println!("{}", output.to_css());
    } else {
        print!("{}", format_shades_text(&output));
    }

    Ok(())
}

pub fn shades_data(hex: &str, percent: f64, mode: ShadeMode) -> Result<ShadesOutput, Error> {
    let shades = build_shades(hex, percent, mode)?;
    let base = clean_hex(hex).unwrap_or_else(|| hex.to_string());

    Ok(ShadesOutput {
        base,
        mode,
        percent,
        shades,
    })
}

fn format_shades_text(output: &ShadesOutput) -> String {
    let mut table = new_table();
    table.add_row(prettytable::row!["Weight", "HEX", "RGB", "HSL"]);

    for shade in &output.shades {
        table.add_row(prettytable::row![
            format!("{}%", shade.weight),
            shade.hex,
            shade.rgb.to_css(),
            shade.hsl
        ]);
    }

    format!("{} {}\n\n{}", "Base:".bright_white().bold(), output.base, table)
}
