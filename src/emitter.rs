//! Writes a glyph table as a C header for SDL_DBGP
//!
//! The header looks like this (for UNSCII-8 and the default prefix):
//!
//! ```c
//! #ifndef DBGP_UNSCII8_H
//! #define DBGP_UNSCII8_H
//!
//! static const unsigned int DBGP_UNSCII8_WIDTH = 8;
//! static const unsigned int DBGP_UNSCII8_HEIGHT = 8;
//! static const unsigned int DBGP_UNSCII8_NB_GLYPHS = 256;
//! static const unsigned char DBGP_UNSCII8[256 * 8] = {0x0, 0x18, ...};
//!
//! #endif // DBGP_UNSCII8_H
//! ```
//!
//! preceded by a comment naming the font and its license.
use crate::config::ConverterConfig;
use crate::errors::{Error, Result};
use crate::table::GlyphTable;
use crate::{GLYPH_COUNT, GLYPH_WIDTH};
use std::io::{self, Write};

/// Writes the header for `table` to `out`. The table must have been built with the height
/// of `config`, whose symbol names every identifier.
pub fn emit<W: Write>(table: &GlyphTable, config: &ConverterConfig, out: &mut W) -> Result<()> {
    let height = table.height();
    if height != config.height {
        return Err(Error::Config(format!(
            "glyph table has {height} rows per glyph but the config asks for {}",
            config.height
        )));
    }
    let symbol = config.symbol();

    writeln!(out, "/*")?;
    writeln!(out, " * Raw data to use with SDL_DBGP. Font is")?;
    writeln!(
        out,
        " * [UNSCII-{height}](https://github.com/viznut/unscii), in the public domain."
    )?;
    writeln!(out, " */")?;
    writeln!(out)?;
    writeln!(out, "#ifndef {symbol}_H")?;
    writeln!(out, "#define {symbol}_H")?;
    writeln!(out)?;

    writeln!(out, "static const unsigned int {symbol}_WIDTH = {GLYPH_WIDTH};")?;
    writeln!(out, "static const unsigned int {symbol}_HEIGHT = {height};")?;
    writeln!(out, "static const unsigned int {symbol}_NB_GLYPHS = {GLYPH_COUNT};")?;

    write!(out, "static const unsigned char {symbol}[{GLYPH_COUNT} * {height}] = {{")?;
    for (i, byte) in table.as_bytes().iter().enumerate() {
        if i > 0 {
            write!(out, ", ")?;
        }
        write!(out, "{byte:#x}")?;
    }
    writeln!(out, "}};")?;

    writeln!(out)?;
    writeln!(out, "#endif // {symbol}_H")?;

    Ok(())
}

/// Renders the header into a string
pub fn render(table: &GlyphTable, config: &ConverterConfig) -> Result<String> {
    let mut out = Vec::new();
    emit(table, config, &mut out)?;
    String::from_utf8(out).map_err(|e| Error::IO(io::Error::new(io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontResource;
    use crate::testing::{hex_font, pattern};
    use std::io::Cursor;

    fn table(height: usize, row: impl Fn(u32, usize) -> u8) -> GlyphTable {
        let text = hex_font(height, 0..256, row);
        GlyphTable::build(&mut FontResource::new(Cursor::new(text)), height).unwrap()
    }

    #[test]
    fn all_zero_font() {
        let header = render(&table(8, |_, _| 0), &ConverterConfig::default()).unwrap();

        assert!(header.contains("static const unsigned int DBGP_UNSCII8_WIDTH = 8;\n"));
        assert!(header.contains("static const unsigned int DBGP_UNSCII8_HEIGHT = 8;\n"));
        assert!(header.contains("static const unsigned int DBGP_UNSCII8_NB_GLYPHS = 256;\n"));

        let zeros = vec!["0x0"; 256 * 8].join(", ");
        let array = format!("static const unsigned char DBGP_UNSCII8[256 * 8] = {{{zeros}}};\n");
        assert!(header.contains(&array));
    }

    #[test]
    fn include_guard_and_provenance() {
        let header = render(&table(8, pattern), &ConverterConfig::default()).unwrap();

        assert!(header.starts_with("/*\n * Raw data to use with SDL_DBGP. Font is\n"));
        assert!(header.contains("[UNSCII-8](https://github.com/viznut/unscii)"));
        assert!(header.contains("#ifndef DBGP_UNSCII8_H\n#define DBGP_UNSCII8_H\n"));
        assert!(header.ends_with("\n#endif // DBGP_UNSCII8_H\n"));
    }

    #[test]
    fn sixteen_rows() {
        let config = ConverterConfig {
            height: 16,
            ..Default::default()
        };
        let header = render(&table(16, pattern), &config).unwrap();

        assert!(header.contains("DBGP_UNSCII16_HEIGHT = 16;"));
        assert!(header.contains("DBGP_UNSCII16_WIDTH = 8;"));
        assert!(header.contains("static const unsigned char DBGP_UNSCII16[256 * 16] = {"));
        assert!(header.contains("[UNSCII-16]"));
    }

    #[test]
    fn custom_prefix() {
        let config = ConverterConfig {
            prefix: "FONT".into(),
            ..Default::default()
        };
        let header = render(&table(8, pattern), &config).unwrap();

        assert!(header.contains("#ifndef FONT8_H"));
        assert!(header.contains("static const unsigned char FONT8[256 * 8] = {"));
        assert!(!header.contains("DBGP_UNSCII"));
    }

    #[test]
    fn height_mismatch_is_rejected() {
        let config = ConverterConfig {
            height: 16,
            ..Default::default()
        };
        let mut out = Vec::new();

        let result = emit(&table(8, pattern), &config, &mut out);

        assert!(matches!(result, Err(Error::Config(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn literals_in_codepoint_row_order() {
        let glyphs = table(8, |c, r| if c == 0 { r as u8 } else { 0xff });
        let header = render(&glyphs, &ConverterConfig::default()).unwrap();

        assert!(header.contains("= {0x0, 0x1, 0x2, 0x3, 0x4, 0x5, 0x6, 0x7, 0xff, 0xff"));
        assert!(header.contains(", 0xff};\n"));
    }
}
