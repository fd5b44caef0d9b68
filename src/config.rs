use crate::errors::{Error, Result};

/// Rows per glyph of UNSCII-8
pub const DEFAULT_HEIGHT: usize = 8;
/// Largest supported number of rows per glyph
pub const MAX_HEIGHT: usize = 255;
/// Identifier prefix expected by SDL_DBGP
pub const DEFAULT_PREFIX: &str = "DBGP_UNSCII";

/// ConverterConfig holds the configuration for a conversion run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Number of rows (and thus bytes) per glyph. 8 for UNSCII-8, 16 for UNSCII-16
    pub height: usize,
    /// Prefix of every generated identifier. The height is appended to it so headers for
    /// different font sizes can be included side by side.
    pub prefix: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl ConverterConfig {
    /// Checks that the configuration can produce a usable header
    pub fn validate(&self) -> Result<()> {
        check_height(self.height)?;

        match self.prefix.chars().next() {
            None => return Err(Error::Config("identifier prefix is empty".into())),
            Some(c) if c.is_ascii_digit() => {
                return Err(Error::Config(format!(
                    "identifier prefix '{}' starts with a digit",
                    self.prefix
                )))
            }
            _ => {}
        }

        if !self
            .prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(Error::Config(format!(
                "identifier prefix '{}' is not a valid C identifier",
                self.prefix
            )));
        }

        Ok(())
    }

    /// Identifier stem for the generated header, e.g. `DBGP_UNSCII16`
    #[must_use]
    pub fn symbol(&self) -> String {
        format!("{}{}", self.prefix, self.height)
    }
}

/// Rejects row counts outside 1..=MAX_HEIGHT
pub fn check_height(height: usize) -> Result<()> {
    if height == 0 {
        return Err(Error::Config("glyph height must be at least 1".into()));
    }
    if height > MAX_HEIGHT {
        return Err(Error::Config(format!(
            "glyph height {height} exceeds the maximum of {MAX_HEIGHT}"
        )));
    }
    Ok(())
}
