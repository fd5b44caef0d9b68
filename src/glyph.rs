use crate::errors::DecodeError;
use hex::FromHexError;

/// Decodes the first `height` rows of a hex encoded glyph. Every row is one byte written as
/// two hex digits, most significant digit first. Any digits beyond `2 * height` are ignored.
pub fn decode_glyph(glyph: &str, height: usize) -> Result<Vec<u8>, DecodeError> {
    let Some(len) = height.checked_mul(2) else {
        return Err(DecodeError::new("glyph height too large", 0));
    };

    let digits = glyph.as_bytes();
    if digits.len() < len {
        return Err(DecodeError::new(
            &format!("glyph has {} hex digits, expected {}", digits.len(), len),
            digits.len(),
        ));
    }

    let mut rows = vec![0; height];
    hex::decode_to_slice(&digits[..len], &mut rows).map_err(|e| match e {
        FromHexError::InvalidHexCharacter { c, index } => {
            DecodeError::new(&format!("invalid hex digit {c:?}"), index)
        }
        other => DecodeError::new(&other.to_string(), 0),
    })?;

    Ok(rows)
}
