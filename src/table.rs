use crate::config::check_height;
use crate::errors::{Error, Result};
use crate::font::FontResource;
use crate::glyph::decode_glyph;
use crate::GLYPH_COUNT;
use log::{debug, warn};
use std::io::{BufRead, Seek};

/// Decoded bitmaps of codepoints 0..256, stored row by row in codepoint order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphTable {
    height: usize,
    data: Vec<u8>,
}

impl GlyphTable {
    /// Looks up and decodes every codepoint in 0..256. Fails on the first codepoint that is
    /// missing or cannot be decoded, so a table is either complete or not built at all.
    pub fn build<R: BufRead + Seek>(font: &mut FontResource<R>, height: usize) -> Result<Self> {
        check_height(height)?;

        let mut data = Vec::with_capacity(GLYPH_COUNT * height);

        for codepoint in 0..GLYPH_COUNT as u32 {
            let Some(glyph) = font.find_glyph(codepoint)? else {
                return Err(Error::MissingGlyph { codepoint });
            };

            if glyph.len() > height * 2 {
                warn!(
                    "glyph for U+{codepoint:04X} has {} hex digits, only the first {} are used",
                    glyph.len(),
                    height * 2
                );
            }

            let rows =
                decode_glyph(&glyph, height).map_err(|source| Error::Decode { codepoint, source })?;
            data.extend_from_slice(&rows);
        }

        debug!("built glyph table: {GLYPH_COUNT} glyphs of {height} rows");

        Ok(Self { height, data })
    }

    /// Number of rows per glyph
    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows of the given codepoint
    pub fn glyph(&self, codepoint: usize) -> Option<&[u8]> {
        let start = codepoint.checked_mul(self.height)?;
        self.data.get(start..start + self.height)
    }

    /// All rows of all glyphs, codepoint 0 row 0 first
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
