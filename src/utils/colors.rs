/// ANSI color helper utilities for terminal output.
use crate::models::Rgba;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

const PALETTE: [(&str, (u8, u8, u8)); 8] = [
    (RED, (205, 49, 49)),
    (GREEN, (13, 188, 121)),
    (YELLOW, (229, 229, 16)),
    (BLUE, (59, 142, 234)),
    (MAGENTA, (188, 63, 188)),
    (CYAN, (17, 168, 205)),
    (WHITE, (229, 229, 229)),
    (GREY, (118, 118, 118)),
];

/// Closest of the eight basic terminal colors to `c` (squared RGB distance).
pub fn nearest_ansi(c: Rgba) -> &'static str {
    let dist = |(r, g, b): (u8, u8, u8)| {
        let dr = c.r as i32 - r as i32;
        let dg = c.g as i32 - g as i32;
        let db = c.b as i32 - b as i32;
        dr * dr + dg * dg + db * db
    };

    PALETTE
        .iter()
        .min_by_key(|(_, rgb)| dist(*rgb))
        .map(|(code, _)| *code)
        .unwrap_or(RESET)
}

/// Wrap `text` in the ANSI color closest to `c`.
pub fn paint(text: &str, c: Rgba) -> String {
    format!("{}{}{}", nearest_ansi(c), text, RESET)
}

/// Returns GREY for an empty field and RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() => RESET,
        _ => GREY,
    }
}
