//! Color swatch helpers for product color pickers.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Relative luminance above which a swatch gets an outline so it stays
/// visible on the light card background.
const OUTLINE_LUMINANCE: f64 = 0.8;

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Canonical lowercase `#rrggbb`, or `None` for anything unparseable.
pub fn normalize_hex_color(value: &str) -> Option<String> {
    let (r, g, b) = parse_hex_rgb(value)?;
    Some(format!("#{r:02x}{g:02x}{b:02x}"))
}

/// Whether two swatch values name the same color regardless of case or form.
pub fn same_color(a: &str, b: &str) -> bool {
    match (normalize_hex_color(a), normalize_hex_color(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

/// Light swatches (white, beige) need a visible border.
pub fn swatch_needs_outline(value: &str) -> bool {
    let Some((r, g, b)) = parse_hex_rgb(value) else {
        return false;
    };
    let luminance = (0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)) / 255.0;
    luminance > OUTLINE_LUMINANCE
}
