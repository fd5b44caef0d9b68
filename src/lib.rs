//! Converts UNSCII `.hex` bitmap fonts (<https://github.com/viznut/unscii>) into C headers
//! that can be used by SDL_DBGP. Only the first 256 codepoints are exported.
//!
//! The conversion is a single pass: every codepoint in 0..256 is looked up in the `.hex` file
//! and decoded into a [`GlyphTable`], which is then written out by the [`emitter`].
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufWriter, Seek, Write};
use std::path::Path;

pub mod config;
pub mod emitter;
pub mod errors;
pub mod font;
pub mod glyph;
pub mod table;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ConverterConfig;
pub use errors::{Error, Result};
pub use font::FontResource;
pub use table::GlyphTable;

/// Width in pixels of every glyph. Each row is stored in a single byte.
pub const GLYPH_WIDTH: usize = 8;
/// Number of glyphs exported (codepoints 0..256)
pub const GLYPH_COUNT: usize = 256;

/// Converts the `.hex` font read from `input` and writes the header to `output`. Nothing is
/// written unless every glyph could be decoded.
pub fn convert<R, W>(input: R, output: &mut W, config: &ConverterConfig) -> Result<GlyphTable>
where
    R: BufRead + Seek,
    W: Write,
{
    config.validate()?;

    let mut font = FontResource::new(input);
    let table = GlyphTable::build(&mut font, config.height)?;
    emitter::emit(&table, config, output)?;

    Ok(table)
}

/// Converts the `.hex` file at `input` into a header at `output`. The output file is only
/// created once the complete glyph table has been built, so a failed run leaves no file behind.
pub fn convert_file(input: &Path, output: &Path, config: &ConverterConfig) -> Result<()> {
    config.validate()?;

    let mut font = FontResource::open(input)?;
    let table = GlyphTable::build(&mut font, config.height)?;
    drop(font);

    let file = File::create(output).map_err(|source| Error::Open {
        path: output.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    emitter::emit(&table, config, &mut out)?;
    out.flush()?;

    debug!(
        "wrote {} glyph bytes for {} to {}",
        table.as_bytes().len(),
        config.symbol(),
        output.display()
    );

    Ok(())
}
