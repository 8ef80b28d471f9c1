//! HEX color parsing, RGB/HSL conversion and tint/shade palettes.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_BASE_HEX: &str = "#7c3aed";
pub const DEFAULT_SHADE_PERCENT: f64 = 20.0;
pub const SHADE_STEPS: u32 = 10;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("Please enter a valid HEX color (e.g., #7c3aed)")]
    InvalidHex(String),

    #[error("Percentage must be between 1 and 100.")]
    PercentOutOfRange(f64),
}

/// Whether shades move towards white or black
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadeMode {
    #[default]
    Lighten,
    Darken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees, saturation and lightness in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shade {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    /// Percent of the way towards white/black
    pub weight: u32,
}

impl Rgb {
    /// Uppercase `#RRGGBB`
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (h / 6.0, s)
        };

        Hsl {
            h: (h * 360.0).round() as u16,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H:{}° S:{}% L:{}%", self.h, self.s, self.l)
    }
}

/// Normalize user input to lowercase `#rrggbb`, expanding `#rgb` shorthand
pub fn clean_hex(input: &str) -> Option<String> {
    let hex = input.trim().to_lowercase();
    let hex = hex.strip_prefix('#').unwrap_or(&hex);

    let hex = if hex.len() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.to_string()
    };

    (hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())).then(|| format!("#{hex}"))
}

pub fn hex_to_rgb(input: &str) -> Result<Rgb, ColorError> {
    let hex = clean_hex(input).ok_or_else(|| ColorError::InvalidHex(input.to_string()))?;
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::InvalidHex(input.to_string()))
    };

    Ok(Rgb {
        r: channel(1..3)?,
        g: channel(3..5)?,
        b: channel(5..7)?,
    })
}

/// Move each channel towards white (lighten) or black (darken) by `fraction` (0..=1)
pub fn mix_with(rgb: Rgb, fraction: f64, mode: ShadeMode) -> Rgb {
    let target = match mode {
        ShadeMode::Lighten => 255.0,
        ShadeMode::Darken => 0.0,
    };
    let mix = |channel: u8| {
        let channel = f64::from(channel);
        ((target - channel) * fraction + channel).round().clamp(0.0, 255.0) as u8
    };

    Rgb {
        r: mix(rgb.r),
        g: mix(rgb.g),
        b: mix(rgb.b),
    }
}

/// Ten shades stepping proportionally up to `percent`, strongest first
pub fn build_shades(hex: &str, percent: f64, mode: ShadeMode) -> Result<Vec<Shade>, ColorError> {
    let base = hex_to_rgb(hex)?;
    if !(1.0..=100.0).contains(&percent) {
        return Err(ColorError::PercentOutOfRange(percent));
    }

    let mut shades: Vec<Shade> = (1..=SHADE_STEPS)
        .map(|step| {
            let fraction = percent / 100.0 * (f64::from(step) / f64::from(SHADE_STEPS));
            let rgb = mix_with(base, fraction, mode);
            Shade {
                hex: rgb.to_hex(),
                rgb,
                hsl: rgb.to_hsl(),
                weight: (fraction * 100.0).round() as u32,
            }
        })
        .collect();

    shades.reverse();
    Ok(shades)
}

/// Export shades as CSS custom properties on `:root`
pub fn shades_to_css(base_hex: &str, shades: &[Shade]) -> String {
    let vars: Vec<String> = shades
        .iter()
        .map(|shade| {
            format!(
                "  --shade-{}: {}; /* {}, {}, {} */",
                shade.weight * 10,
                shade.hex,
                shade.rgb.r,
                shade.rgb.g,
                shade.rgb.b
            )
        })
        .collect();

    format!(":root {{\n  --base: {base_hex};\n{}\n}}", vars.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_hex() {
        assert_eq!(clean_hex("#7C3AED").as_deref(), Some("#7c3aed"));
        assert_eq!(clean_hex(" fff ").as_deref(), Some("#ffffff"));
        assert_eq!(clean_hex("#abc").as_deref(), Some("#aabbcc"));
        assert_eq!(clean_hex("#abcd"), None);
        assert_eq!(clean_hex("#gggggg"), None);
        assert_eq!(clean_hex(""), None);
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(
            hex_to_rgb("#7c3aed").unwrap(),
            Rgb {
                r: 124,
                g: 58,
                b: 237
            }
        );
        assert!(matches!(hex_to_rgb("nope"), Err(ColorError::InvalidHex(_))));
    }

    #[test]
    fn test_rgb_to_hex_and_css() {
        let rgb = Rgb { r: 255, g: 0, b: 10 };
        assert_eq!(rgb.to_hex(), "#FF000A");
        assert_eq!(rgb.to_css(), "rgb(255, 0, 10)");
    }

    #[test]
    fn test_rgb_to_hsl() {
        assert_eq!(Rgb { r: 255, g: 0, b: 0 }.to_hsl(), Hsl { h: 0, s: 100, l: 50 });
        assert_eq!(
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
            .to_hsl(),
            Hsl { h: 0, s: 0, l: 50 }
        );
        assert_eq!(
            Rgb {
                r: 124,
                g: 58,
                b: 237
            }
            .to_hsl(),
            Hsl {
                h: 262,
                s: 83,
                l: 58
            }
        );
    }

    #[test]
    fn test_mix_with() {
        let black = Rgb { r: 0, g: 0, b: 0 };
        assert_eq!(
            mix_with(black, 0.5, ShadeMode::Lighten),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        let white = Rgb {
            r: 255,
            g: 255,
            b: 255,
        };
        assert_eq!(mix_with(white, 1.0, ShadeMode::Darken), black);
    }

    #[test]
    fn test_build_shades_order_and_weights() {
        let shades = build_shades("#000000", 20.0, ShadeMode::Lighten).unwrap();
        assert_eq!(shades.len(), 10);

        let weights: Vec<u32> = shades.iter().map(|s| s.weight).collect();
        assert_eq!(weights, vec![20, 18, 16, 14, 12, 10, 8, 6, 4, 2]);
        assert_eq!(shades[0].hex, "#333333");
        assert_eq!(shades[9].hex, "#050505");
    }

    #[test]
    fn test_build_shades_darken() {
        let shades = build_shades("#ffffff", 100.0, ShadeMode::Darken).unwrap();
        assert_eq!(shades[0].hex, "#000000");
        assert_eq!(shades[0].weight, 100);
    }

    #[test]
    fn test_build_shades_rejects_percent() {
        assert_eq!(
            build_shades("#ffffff", 0.5, ShadeMode::Lighten).unwrap_err(),
            ColorError::PercentOutOfRange(0.5)
        );
        assert!(build_shades("#ffffff", 101.0, ShadeMode::Lighten).is_err());
    }

    #[test]
    fn test_shades_to_css() {
        let shades = build_shades("#000", 10.0, ShadeMode::Lighten).unwrap();
        let css = shades_to_css("#000000", &shades[..1]);
        assert_eq!(
            css,
            ":root {\n  --base: #000000;\n  --shade-100: #1A1A1A; /* 26, 26, 26 */\n}"
        );
    }
}
