use anyhow::{bail, Result};
use image::Rgb;

/// Named colors accepted by the generator, resolved to their conventional
/// RGB values.
const NAMED_COLORS: &[(&str, Rgb<u8>)] = &[
    ("black", Rgb([0, 0, 0])),
    ("white", Rgb([255, 255, 255])),
    ("red", Rgb([255, 0, 0])),
    ("green", Rgb([0, 128, 0])),
    ("blue", Rgb([0, 0, 255])),
    ("yellow", Rgb([255, 255, 0])),
    ("cyan", Rgb([0, 255, 255])),
    ("magenta", Rgb([255, 0, 255])),
    ("gray", Rgb([128, 128, 128])),
];

/// Parse a color given either as a named color ("blue") or as a "#rrggbb"
/// hex string.
pub fn parse_color(input: &str) -> Result<Rgb<u8>> {
    let trimmed = input.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex_color(hex, input);
    }

    let lowered = trimmed.to_ascii_lowercase();
    for (name, value) in NAMED_COLORS {
        if *name == lowered {
            return Ok(*value);
        }
    }

    bail!("Unknown color name: {}", input);
}

fn parse_hex_color(hex: &str, original: &str) -> Result<Rgb<u8>> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("Malformed hex color: {}", original);
    }

    let r = u8::from_str_radix(&hex[0..2], 16)?;
    let g = u8::from_str_radix(&hex[2..4], 16)?;
    let b = u8::from_str_radix(&hex[4..6], 16)?;

    Ok(Rgb([r, g, b]))
}
