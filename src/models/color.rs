//! Server color handling and text contrast.
//!
//! Items carry their background color as 6 bare hex digits. Text on top of
//! the card switches between black and white based on perceived luminance.

use ratatui::style::Color;

/// Luminance threshold above which black text is used
const LUMINANCE_THRESHOLD: f32 = 0.5;

/// Parse 6 bare hex digits (no leading `#`) into RGB components.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim();
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Perceived luminance in [0, 1] (ITU-R BT.601 weights).
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    let r = f32::from(r) / 255.0;
    let g = f32::from(g) / 255.0;
    let b = f32::from(b) / 255.0;
    0.299 * r + 0.587 * g + 0.114 * b
}

/// Card background color; unparseable values fall back to the default
/// terminal background rather than failing the render.
pub fn card_color(hex: &str) -> Color {
    match parse_hex(hex) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Reset,
    }
}

/// Black or white, whichever contrasts with the given background.
pub fn text_color(hex: &str) -> Color {
    match parse_hex(hex) {
        Some((r, g, b)) if luminance(r, g, b) > LUMINANCE_THRESHOLD => Color::Black,
        Some(_) => Color::White,
        None => Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_digits() {
        assert_eq!(parse_hex("FF0000"), Some((255, 0, 0)));
        assert_eq!(parse_hex("00ff7f"), Some((0, 255, 127)));
        assert_eq!(parse_hex("#FF0000"), None);
        assert_eq!(parse_hex("FF00"), None);
        assert_eq!(parse_hex("GG0000"), None);
    }

    #[test]
    fn red_card_gets_white_text() {
        // luminance of FF0000 is 0.299, below the threshold
        assert!(luminance(255, 0, 0) < 0.5);
        assert_eq!(text_color("FF0000"), Color::White);
    }

    #[test]
    fn white_card_gets_black_text() {
        assert_eq!(text_color("FFFFFF"), Color::Black);
    }

    #[test]
    fn pure_green_is_bright() {
        // 0.587 on its own clears the threshold
        assert_eq!(text_color("00FF00"), Color::Black);
    }

    #[test]
    fn invalid_color_falls_back() {
        assert_eq!(card_color("not-a-color"), Color::Reset);
        assert_eq!(text_color("not-a-color"), Color::Reset);
    }
}
