use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use serde::Serialize;

use devtoolkit_core::clamp::{
    build_clamp_expression, parse_clamp_inputs, FluidRange, OutputUnit, DEFAULT_MAX_SIZE,
    DEFAULT_MAX_VIEWPORT, DEFAULT_MIN_SIZE, DEFAULT_MIN_VIEWPORT,
};

pub const DEFAULT_PROPERTY: &str = "font-size";

#[derive(Debug, clap::Args, Clone)]
pub struct ClampOptions {
    /// Size at the minimum viewport, in px
    #[arg(long, default_value_t = DEFAULT_MIN_SIZE.to_string(), allow_hyphen_values = true)]
    pub min_size: String,

    /// Size at the maximum viewport, in px
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE.to_string(), allow_hyphen_values = true)]
    pub max_size: String,

    /// Viewport width where interpolation starts, in px
    #[arg(long, default_value_t = DEFAULT_MIN_VIEWPORT.to_string(), allow_hyphen_values = true)]
    pub min_viewport: String,

    /// Viewport width where interpolation ends, in px
    #[arg(long, default_value_t = DEFAULT_MAX_VIEWPORT.to_string(), allow_hyphen_values = true)]
    pub max_viewport: String,

    /// Output unit: px or rem (1rem = 16px)
    #[arg(short, long, env = "DEVTOOLKIT_UNIT", default_value = "px")]
    pub unit: String,

    /// CSS property used for the printed declaration
    #[arg(short, long, env = "DEVTOOLKIT_PROPERTY", default_value = DEFAULT_PROPERTY)]
    pub property: String,

    /// Viewport widths (comma separated, px) to preview the resolved size at
    #[arg(long, value_delimiter = ',')]
    pub preview: Vec<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Raw generator inputs, shared by the CLI and the MCP tool
#[derive(Debug, Clone)]
pub struct ClampRequest {
    pub min_size: String,
    pub max_size: String,
    pub min_viewport: String,
    pub max_viewport: String,
    pub unit: String,
    pub property: String,
    pub preview: Vec<f64>,
}

impl From<ClampOptions> for ClampRequest {
    fn from(options: ClampOptions) -> Self {
        Self {
            min_size: options.min_size,
            max_size: options.max_size,
            min_viewport: options.min_viewport,
            max_viewport: options.max_viewport,
            unit: options.unit,
            property: options.property,
            preview: options.preview,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewPoint {
    pub viewport: f64,
    pub size_px: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClampOutput {
    pub expression: String,
    pub declaration: String,
    pub unit: OutputUnit,
    pub fluid: bool,
    pub slope_vw: f64,
    pub intercept_px: f64,
    pub range: FluidRange,
    pub preview: Vec<PreviewPoint>,
}

pub fn run(options: ClampOptions, global: crate::Global) -> Result<()> {
    let json = options.json;
    let output = clamp_data(options.into())?;

    if global.verbose {
        eprintln!(
            "slope: {}px per vw, intercept: {}px",
            output.slope_vw, output.intercept_px
        );
    }

    if json {
        println!("{}", to_json(&output)?);
    } else {
        print!("{}", format_clamp_text(&output));
    }

    Ok(())
}

/// Validate the raw inputs and build the expression
pub fn clamp_data(request: ClampRequest) -> Result<ClampOutput, Error> {
    let range = parse_clamp_inputs(
        &request.min_size,
        &request.max_size,
        &request.min_viewport,
        &request.max_viewport,
    )?;
    let unit: OutputUnit = request.unit.parse()?;
    let expression = build_clamp_expression(&range, unit);

    log::debug!("built {expression} from {range:?}");

    let preview = request
        .preview
        .iter()
        .map(|viewport| PreviewPoint {
            viewport: *viewport,
            size_px: range.size_at(*viewport),
        })
        .collect();

    Ok(ClampOutput {
        expression: expression.to_string(),
        declaration: expression.declaration(&request.property),
        unit,
        fluid: expression.is_fluid(),
        slope_vw: range.slope_vw(),
        intercept_px: range.intercept_px(),
        range,
        preview,
    })
}

fn format_clamp_text(output: &ClampOutput) -> String {
    let mut result = String::new();
    let size = output.range.size();
    let viewport = output.range.viewport();

    result.push_str(&format!("{}\n", output.declaration.bright_green().bold()));
    result.push_str(&format!(
        "\n{} {}px → {}px between {}px and {}px viewports ({})\n",
        "Range:".bright_white().bold(),
        size.min_size,
        size.max_size,
        viewport.min_viewport,
        viewport.max_viewport,
        output.unit
    ));

    if !output.fluid {
        result.push_str(&format!(
            "{}\n",
            "Sizes are equal, emitting a fixed value.".yellow()
        ));
    }

    if !output.preview.is_empty() {
        let mut table = new_table();
        table.add_row(prettytable::row!["Viewport", "Resolved size"]);
        for point in &output.preview {
            table.add_row(prettytable::row![
                format!("{}px", point.viewport),
                format!("{:.2}px", point.size_px)
            ]);
        }
        result.push_str(&format!("\n{}\n", "Preview:".bright_white().bold()));
        result.push_str(&table.to_string());
    }

    result
}
