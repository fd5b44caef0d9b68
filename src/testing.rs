//! Helpers for building `.hex` fonts in tests
use std::fmt::Write;

/// Deterministic, mostly distinct row byte for a codepoint
pub fn pattern(codepoint: u32, row: usize) -> u8 {
    (codepoint as usize * 31 + row * 7) as u8
}

/// Builds `.hex` font text with one record per codepoint, in the order given
pub fn hex_font(
    height: usize,
    codepoints: impl IntoIterator<Item = u32>,
    row: impl Fn(u32, usize) -> u8,
) -> String {
    let mut text = String::new();
    for codepoint in codepoints {
        let _ = write!(text, "{codepoint:02X}:");
        for r in 0..height {
            let _ = write!(text, "{:02X}", row(codepoint, r));
        }
        text.push('\n');
    }
    text
}
