//! Fluid `clamp()` expression synthesis.
//!
//! Builds a CSS value of the form `clamp(MIN, calc(SLOPEvw + INTERCEPT), MAX)`
//! that grows linearly from `min_size` at `min_viewport` to `max_size` at
//! `max_viewport`, and stays clamped outside that range.
//!
//! Validation and formula are kept apart: [`FluidRange::new`] (or
//! [`parse_clamp_inputs`] for raw text fields) is the only way to obtain a
//! [`FluidRange`], and [`build_clamp_expression`] is total over it.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Pixels per rem, the CSS default root font size.
pub const REM_BASE_PX: f64 = 16.0;

/// Slopes below this magnitude collapse the expression into a fixed size.
pub const DEGENERATE_SLOPE_EPSILON: f64 = 1e-6;

pub const DEFAULT_MIN_SIZE: f64 = 16.0;
pub const DEFAULT_MAX_SIZE: f64 = 24.0;
pub const DEFAULT_MIN_VIEWPORT: f64 = 320.0;
pub const DEFAULT_MAX_VIEWPORT: f64 = 1200.0;

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("numeric prefix regex")
});

/// Validation failures surfaced to the user before the builder runs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClampError {
    #[error("Please provide valid numeric values.")]
    NonNumeric,

    #[error("Minimum viewport must be less than maximum viewport.")]
    ViewportOrder,

    #[error("Font sizes must be positive.")]
    NonPositiveSize,

    #[error("Unknown output unit '{0}', expected 'px' or 'rem'")]
    UnknownUnit(String),
}

/// Size range in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeSpec {
    pub min_size: f64,
    pub max_size: f64,
}

/// Viewport width range in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportRange {
    pub min_viewport: f64,
    pub max_viewport: f64,
}

impl Default for SizeSpec {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl Default for ViewportRange {
    fn default() -> Self {
        Self {
            min_viewport: DEFAULT_MIN_VIEWPORT,
            max_viewport: DEFAULT_MAX_VIEWPORT,
        }
    }
}

/// Unit family used to render the expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputUnit {
    #[default]
    Px,
    Rem,
}

impl OutputUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            OutputUnit::Px => "px",
            OutputUnit::Rem => "rem",
        }
    }

    /// Convert a pixel quantity into this unit
    pub fn from_px(self, px: f64) -> f64 {
        match self {
            OutputUnit::Px => px,
            OutputUnit::Rem => px / REM_BASE_PX,
        }
    }
}

impl FromStr for OutputUnit {
    type Err = ClampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = s.trim();
        if unit.eq_ignore_ascii_case("px") {
            Ok(OutputUnit::Px)
        } else if unit.eq_ignore_ascii_case("rem") {
            Ok(OutputUnit::Rem)
        } else {
            Err(ClampError::UnknownUnit(unit.to_string()))
        }
    }
}

impl fmt::Display for OutputUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A size range paired with a viewport range that passed validation.
///
/// Invariants: every value is finite, both sizes are strictly positive and
/// `min_viewport < max_viewport`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FluidRange {
    size: SizeSpec,
    viewport: ViewportRange,
}

impl Default for FluidRange {
    fn default() -> Self {
        Self {
            size: SizeSpec::default(),
            viewport: ViewportRange::default(),
        }
    }
}

impl FluidRange {
    /// Validate a size/viewport pair.
    ///
    /// Checks run in a fixed order: non-finite values first, then viewport
    /// ordering, then size sign.
    pub fn new(size: SizeSpec, viewport: ViewportRange) -> Result<Self, ClampError> {
        let values = [
            size.min_size,
            size.max_size,
            viewport.min_viewport,
            viewport.max_viewport,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ClampError::NonNumeric);
        }

        if viewport.min_viewport >= viewport.max_viewport {
            return Err(ClampError::ViewportOrder);
        }

        if size.min_size <= 0.0 || size.max_size <= 0.0 {
            return Err(ClampError::NonPositiveSize);
        }

        Ok(Self { size, viewport })
    }

    pub fn size(&self) -> SizeSpec {
        self.size
    }

    pub fn viewport(&self) -> ViewportRange {
        self.viewport
    }

    /// Size change per `vw` (1% of the viewport width), in pixels
    pub fn slope_vw(&self) -> f64 {
        (self.size.max_size - self.size.min_size)
            / (self.viewport.max_viewport - self.viewport.min_viewport)
            * 100.0
    }

    /// Size the linear term takes at a viewport width of zero, in pixels
    pub fn intercept_px(&self) -> f64 {
        self.size.min_size - (self.slope_vw() * self.viewport.min_viewport) / 100.0
    }

    pub fn is_fixed(&self) -> bool {
        self.slope_vw().abs() < DEGENERATE_SLOPE_EPSILON
    }

    /// Pixel size the generated expression resolves to at `viewport`.
    ///
    /// Follows CSS `clamp(MIN, VAL, MAX) = max(MIN, min(VAL, MAX))`, so MIN wins
    /// when a shrinking range puts it above MAX.
    pub fn size_at(&self, viewport: f64) -> f64 {
        if self.is_fixed() {
            return self.size.min_size;
        }

        let preferred = self.slope_vw() * viewport / 100.0 + self.intercept_px();
        self.size.min_size.max(preferred.min(self.size.max_size))
    }
}

/// Rendered CSS length value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ClampExpression {
    /// Degenerate slope: a single literal such as `16px`
    Fixed { value: String },
    /// `clamp(min, preferred, max)`
    Fluid {
        min: String,
        preferred: String,
        max: String,
    },
}

impl ClampExpression {
    /// Full declaration, e.g. `font-size: clamp(...);`
    pub fn declaration(&self, property: &str) -> String {
        format!("{property}: {self};")
    }

    pub fn is_fluid(&self) -> bool {
        matches!(self, ClampExpression::Fluid { .. })
    }
}

impl fmt::Display for ClampExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClampExpression::Fixed { value } => f.write_str(value),
            ClampExpression::Fluid {
                min,
                preferred,
                max,
            } => write!(f, "clamp({min}, {preferred}, {max})"),
        }
    }
}

/// Build the `clamp()` expression for a validated range
pub fn build_clamp_expression(range: &FluidRange, unit: OutputUnit) -> ClampExpression {
    let suffix = unit.suffix();
    let size = range.size();

    if range.is_fixed() {
        return ClampExpression::Fixed {
            value: format!("{}{suffix}", format_number(unit.from_px(size.min_size))),
        };
    }

    // The vw coefficient is px per viewport percent and scales with the other terms.
    let slope = format_number(unit.from_px(range.slope_vw()));
    let intercept = format_number(unit.from_px(range.intercept_px()));

    ClampExpression::Fluid {
        min: format!("{}{suffix}", format_number(unit.from_px(size.min_size))),
        preferred: format!("calc({slope}vw + {intercept}{suffix})"),
        max: format!("{}{suffix}", format_number(unit.from_px(size.max_size))),
    }
}

/// Render a number with at most 4 decimals and no trailing zeros.
///
/// `1.5000` becomes `1.5`, `2.0000` becomes `2`. Exact ties at the fifth
/// decimal round away from zero, and a value that rounds to zero is `0`.
pub fn format_number(value: f64) -> String {
    let value = if is_decimal_tie(value) {
        (value * 10_000.0).round() / 10_000.0
    } else {
        value
    };

    let fixed = format!("{value:.4}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

// Only multiples of 1/32 can sit exactly halfway between two 4-decimal values.
fn is_decimal_tie(value: f64) -> bool {
    (value * 32.0).fract() == 0.0 && (value * 10_000.0).fract().abs() == 0.5
}

/// Parse a user-entered number, accepting a leading numeric prefix (`"16px"`)
pub fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let number = match raw.parse::<f64>() {
        Ok(value) => value,
        Err(_) => NUMERIC_PREFIX.find(raw)?.as_str().parse::<f64>().ok()?,
    };

    number.is_finite().then_some(number)
}

/// Parse and validate the four raw text fields of the generator
pub fn parse_clamp_inputs(
    min_size: &str,
    max_size: &str,
    min_viewport: &str,
    max_viewport: &str,
) -> Result<FluidRange, ClampError> {
    let parse = |raw: &str| parse_number(raw).ok_or(ClampError::NonNumeric);

    let size = SizeSpec {
        min_size: parse(min_size)?,
        max_size: parse(max_size)?,
    };
    let viewport = ViewportRange {
        min_viewport: parse(min_viewport)?,
        max_viewport: parse(max_viewport)?,
    };

    FluidRange::new(size, viewport)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min_size: f64, max_size: f64, min_viewport: f64, max_viewport: f64) -> FluidRange {
        FluidRange::new(
            SizeSpec { min_size, max_size },
            ViewportRange {
                min_viewport,
                max_viewport,
            },
        )
        .unwrap()
    }

    fn fluid_parts(expression: &ClampExpression) -> (String, String, String) {
        match expression {
            ClampExpression::Fluid {
                min,
                preferred,
                max,
            } => (min.clone(), preferred.clone(), max.clone()),
            ClampExpression::Fixed { value } => panic!("expected fluid expression, got {value}"),
        }
    }

    /// Pull the slope and intercept back out of `calc(<slope>vw + <intercept><unit>)`
    fn calc_terms(preferred: &str, unit: &str) -> (f64, f64) {
        let re = Regex::new(&format!(r"^calc\((-?[\d.]+)vw \+ (-?[\d.]+){unit}\)$")).unwrap();
        let caps = re.captures(preferred).unwrap();
        (caps[1].parse().unwrap(), caps[2].parse().unwrap())
    }

    // ============================================================================
    // build_clamp_expression tests
    // ============================================================================

    #[test]
    fn test_build_px_default_range() {
        let expression = build_clamp_expression(&range(16.0, 24.0, 320.0, 1200.0), OutputUnit::Px);
        assert_eq!(
            expression.to_string(),
            "clamp(16px, calc(0.9091vw + 13.0909px), 24px)"
        );
    }

    #[test]
    fn test_build_rem_default_range() {
        let expression =
            build_clamp_expression(&range(16.0, 24.0, 320.0, 1200.0), OutputUnit::Rem);
        assert_eq!(
            expression.to_string(),
            "clamp(1rem, calc(0.0568vw + 0.8182rem), 1.5rem)"
        );
    }

    #[test]
    fn test_build_equal_sizes_is_fixed_px() {
        let expression = build_clamp_expression(&range(16.0, 16.0, 320.0, 1200.0), OutputUnit::Px);
        assert_eq!(expression.to_string(), "16px");
        assert!(!expression.is_fluid());
    }

    #[test]
    fn test_build_equal_sizes_is_fixed_rem() {
        let expression =
            build_clamp_expression(&range(20.0, 20.0, 320.0, 1200.0), OutputUnit::Rem);
        assert_eq!(expression.to_string(), "1.25rem");
    }

    #[test]
    fn test_build_fixed_has_no_wrappers() {
        for unit in [OutputUnit::Px, OutputUnit::Rem] {
            let css = build_clamp_expression(&range(18.0, 18.0, 400.0, 900.0), unit).to_string();
            assert!(!css.contains("clamp("));
            assert!(!css.contains("calc("));
        }
    }

    #[test]
    fn test_build_tiny_slope_below_epsilon_is_fixed() {
        // slope = 1e-9 / 1000 * 100 = 1e-10
        let expression =
            build_clamp_expression(&range(16.0, 16.000_000_001, 0.0, 1000.0), OutputUnit::Px);
        assert_eq!(expression.to_string(), "16px");
    }

    #[test]
    fn test_build_negative_intercept() {
        let expression = build_clamp_expression(&range(10.0, 50.0, 400.0, 800.0), OutputUnit::Px);
        assert_eq!(
            expression.to_string(),
            "clamp(10px, calc(10vw + -30px), 50px)"
        );
    }

    #[test]
    fn test_build_shrinking_range() {
        let expression = build_clamp_expression(&range(24.0, 16.0, 320.0, 1200.0), OutputUnit::Px);
        assert_eq!(
            expression.to_string(),
            "clamp(24px, calc(-0.9091vw + 26.9091px), 16px)"
        );
    }

    #[test]
    fn test_build_rem_tie_rounds_away_from_zero() {
        // slope 0.5vw px -> 0.03125 rem per vw
        let expression = build_clamp_expression(&range(16.0, 20.0, 400.0, 1200.0), OutputUnit::Rem);
        assert_eq!(
            expression.to_string(),
            "clamp(1rem, calc(0.0313vw + 0.875rem), 1.25rem)"
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let r = range(14.0, 22.0, 375.0, 1440.0);
        let first = build_clamp_expression(&r, OutputUnit::Rem).to_string();
        let second = build_clamp_expression(&r, OutputUnit::Rem).to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_line_passes_through_breakpoints() {
        let r = range(16.0, 24.0, 320.0, 1200.0);
        let (_, preferred, _) = fluid_parts(&build_clamp_expression(&r, OutputUnit::Px));
        let (slope, intercept) = calc_terms(&preferred, "px");

        let at_min = slope * 320.0 / 100.0 + intercept;
        let at_max = slope * 1200.0 / 100.0 + intercept;
        assert!((at_min - 16.0).abs() < 1e-3, "at_min = {at_min}");
        assert!((at_max - 24.0).abs() < 1e-3, "at_max = {at_max}");
    }

    #[test]
    fn test_build_rem_components_are_px_over_16() {
        let r = range(18.0, 40.0, 360.0, 1280.0);
        let (px_min, px_pref, px_max) = fluid_parts(&build_clamp_expression(&r, OutputUnit::Px));
        let (rem_min, rem_pref, rem_max) =
            fluid_parts(&build_clamp_expression(&r, OutputUnit::Rem));

        let number = |s: &str, unit: &str| s.trim_end_matches(unit).parse::<f64>().unwrap();
        assert!((number(&rem_min, "rem") - number(&px_min, "px") / 16.0).abs() < 1e-4);
        assert!((number(&rem_max, "rem") - number(&px_max, "px") / 16.0).abs() < 1e-4);

        let (px_slope, px_intercept) = calc_terms(&px_pref, "px");
        let (rem_slope, rem_intercept) = calc_terms(&rem_pref, "rem");
        assert!((rem_slope - px_slope / 16.0).abs() < 1e-4);
        assert!((rem_intercept - px_intercept / 16.0).abs() < 1e-4);
    }

    #[test]
    fn test_declaration() {
        let expression = build_clamp_expression(&range(16.0, 16.0, 320.0, 1200.0), OutputUnit::Px);
        assert_eq!(expression.declaration("font-size"), "font-size: 16px;");
    }

    #[test]
    fn test_expression_serializes_with_kind_tag() {
        let expression = build_clamp_expression(&range(16.0, 16.0, 320.0, 1200.0), OutputUnit::Px);
        let json = serde_json::to_value(&expression).unwrap();
        assert_eq!(json["kind"], "fixed");
        assert_eq!(json["value"], "16px");
    }

    // ============================================================================
    // FluidRange tests
    // ============================================================================

    #[test]
    fn test_range_rejects_equal_viewports() {
        let result = FluidRange::new(
            SizeSpec::default(),
            ViewportRange {
                min_viewport: 800.0,
                max_viewport: 800.0,
            },
        );
        assert_eq!(result.unwrap_err(), ClampError::ViewportOrder);
    }

    #[test]
    fn test_range_rejects_inverted_viewports() {
        let result = FluidRange::new(
            SizeSpec::default(),
            ViewportRange {
                min_viewport: 1200.0,
                max_viewport: 320.0,
            },
        );
        assert_eq!(result.unwrap_err(), ClampError::ViewportOrder);
    }

    #[test]
    fn test_range_rejects_non_positive_sizes() {
        for (min_size, max_size) in [(0.0, 24.0), (16.0, 0.0), (-4.0, 24.0), (16.0, -1.0)] {
            let result = FluidRange::new(SizeSpec { min_size, max_size }, ViewportRange::default());
            assert_eq!(result.unwrap_err(), ClampError::NonPositiveSize);
        }
    }

    #[test]
    fn test_range_viewport_checked_before_sizes() {
        let result = FluidRange::new(
            SizeSpec {
                min_size: -1.0,
                max_size: 24.0,
            },
            ViewportRange {
                min_viewport: 500.0,
                max_viewport: 500.0,
            },
        );
        assert_eq!(result.unwrap_err(), ClampError::ViewportOrder);
    }

    #[test]
    fn test_range_rejects_non_finite() {
        let result = FluidRange::new(
            SizeSpec {
                min_size: f64::NAN,
                max_size: 24.0,
            },
            ViewportRange::default(),
        );
        assert_eq!(result.unwrap_err(), ClampError::NonNumeric);

        let result = FluidRange::new(
            SizeSpec::default(),
            ViewportRange {
                min_viewport: 320.0,
                max_viewport: f64::INFINITY,
            },
        );
        assert_eq!(result.unwrap_err(), ClampError::NonNumeric);
    }

    #[test]
    fn test_range_slope_and_intercept() {
        let r = range(16.0, 24.0, 320.0, 1200.0);
        assert!((r.slope_vw() - 0.909_090_9).abs() < 1e-6);
        assert!((r.intercept_px() - 13.090_909).abs() < 1e-5);
    }

    #[test]
    fn test_size_at_clamps_outside_breakpoints() {
        let r = range(16.0, 24.0, 320.0, 1200.0);
        assert_eq!(r.size_at(100.0), 16.0);
        assert_eq!(r.size_at(2000.0), 24.0);
        assert!((r.size_at(760.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_size_at_shrinking_range_min_wins() {
        let r = range(24.0, 16.0, 320.0, 1200.0);
        assert_eq!(r.size_at(320.0), 24.0);
        assert_eq!(r.size_at(1200.0), 24.0);
    }

    #[test]
    fn test_size_at_fixed() {
        let r = range(16.0, 16.0, 320.0, 1200.0);
        assert_eq!(r.size_at(5000.0), 16.0);
    }

    // ============================================================================
    // parse_clamp_inputs tests
    // ============================================================================

    #[test]
    fn test_parse_inputs_valid() {
        let r = parse_clamp_inputs("16", "24", "320", "1200").unwrap();
        assert_eq!(r, FluidRange::default());
    }

    #[test]
    fn test_parse_inputs_numeric_prefix() {
        let r = parse_clamp_inputs(" 16px", "24.0", "320px", "1200").unwrap();
        assert_eq!(r.size().min_size, 16.0);
        assert_eq!(r.viewport().min_viewport, 320.0);
    }

    #[test]
    fn test_parse_inputs_non_numeric() {
        assert_eq!(
            parse_clamp_inputs("abc", "24", "320", "1200").unwrap_err(),
            ClampError::NonNumeric
        );
        assert_eq!(
            parse_clamp_inputs("16", "", "320", "1200").unwrap_err(),
            ClampError::NonNumeric
        );
        assert_eq!(
            parse_clamp_inputs("16", "24", "inf", "1200").unwrap_err(),
            ClampError::NonNumeric
        );
    }

    #[test]
    fn test_parse_inputs_propagates_range_errors() {
        assert_eq!(
            parse_clamp_inputs("16", "24", "1200", "1200").unwrap_err(),
            ClampError::ViewportOrder
        );
        assert_eq!(
            parse_clamp_inputs("0", "24", "320", "1200").unwrap_err(),
            ClampError::NonPositiveSize
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClampError::NonNumeric.to_string(),
            "Please provide valid numeric values."
        );
        assert_eq!(
            ClampError::ViewportOrder.to_string(),
            "Minimum viewport must be less than maximum viewport."
        );
        assert_eq!(
            ClampError::NonPositiveSize.to_string(),
            "Font sizes must be positive."
        );
    }

    // ============================================================================
    // format_number / OutputUnit tests
    // ============================================================================

    #[test]
    fn test_format_number_trims() {
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(10.05), "10.05");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_number_rounds_to_four_places() {
        assert_eq!(format_number(0.909_090_909), "0.9091");
        assert_eq!(format_number(13.090_909), "13.0909");
        assert_eq!(format_number(-0.909_090_909), "-0.9091");
    }

    #[test]
    fn test_format_number_no_negative_zero() {
        assert_eq!(format_number(-0.000_01), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_number_no_scientific_notation() {
        assert_eq!(format_number(1e-7), "0");
        assert_eq!(format_number(123_456_789.0), "123456789");
    }

    #[test]
    fn test_output_unit_from_str() {
        assert_eq!("px".parse::<OutputUnit>().unwrap(), OutputUnit::Px);
        assert_eq!(" REM ".parse::<OutputUnit>().unwrap(), OutputUnit::Rem);
        assert_eq!(
            "em".parse::<OutputUnit>().unwrap_err(),
            ClampError::UnknownUnit("em".to_string())
        );
    }
}
