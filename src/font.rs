//! Reading of UNSCII `.hex` font files
//!
//! A `.hex` file holds one glyph per line in the form `<codepoint-hex>:<glyph-hex>`. Records
//! are not guaranteed to be sorted, so every lookup scans the file from its first line.
use crate::errors::{Error, Result};
use log::trace;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

/// A single `<codepoint>:<glyph>` line of a `.hex` file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphRecord {
    pub codepoint: u32,
    /// Raw hex encoded bitmap, one byte (two digits) per row
    pub glyph: String,
}

/// Parses a single record. `line_nr` is 1-based and only used for error reporting.
pub fn parse_record(line: &str, line_nr: usize) -> Result<GlyphRecord> {
    let Some((code, glyph)) = line.split_once(':') else {
        return Err(Error::MalformedRecord {
            line: line_nr,
            reason: "missing ':' separator".into(),
        });
    };

    let code = code.trim();
    if let Some(c) = code.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(Error::MalformedRecord {
            line: line_nr,
            reason: format!("invalid codepoint '{code}': unexpected character {c:?}"),
        });
    }
    let codepoint = u32::from_str_radix(code, 16).map_err(|e| Error::MalformedRecord {
        line: line_nr,
        reason: format!("invalid codepoint '{code}': {e}"),
    })?;

    Ok(GlyphRecord {
        codepoint,
        glyph: glyph.trim().to_string(),
    })
}

/// A `.hex` font that can be scanned repeatedly from the start
pub struct FontResource<R> {
    reader: R,
    /// Line buffer reused between reads
    line: String,
}

impl FontResource<BufReader<File>> {
    /// Opens the `.hex` file at the given path
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead + Seek> FontResource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    /// Resets the read position back to the first line
    pub fn rewind(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        Ok(())
    }

    /// Returns the glyph string of the first record matching `codepoint`, or `None` when no
    /// record matches. Lines after the match are not read.
    pub fn find_glyph(&mut self, codepoint: u32) -> Result<Option<String>> {
        self.rewind()?;

        let mut line_nr = 0;
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                trace!("codepoint U+{codepoint:04X} not found after {line_nr} lines");
                return Ok(None);
            }
            line_nr += 1;

            if self.line.trim().is_empty() {
                continue;
            }

            let record = parse_record(&self.line, line_nr)?;
            if record.codepoint == codepoint {
                trace!("codepoint U+{codepoint:04X} found on line {line_nr}");
                return Ok(Some(record.glyph));
            }
        }
    }
}
