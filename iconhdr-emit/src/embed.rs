//! Glyph-binary-to-source embedding.
//!
//! Runs independently per glyph file, not per IR: a variant with two TTF
//! files produces two embedded headers.

use std::fmt::Write;

use thiserror::Error;

/// Bytes rendered per source line inside the array braces.
const BYTES_PER_LINE: usize = 16;

/// Failure to turn a glyph payload into a byte-array literal.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// The glyph payload had no bytes at all.
    #[error("glyph payload for '{array_name}' is empty")]
    EmptyPayload {
        /// The array the payload was meant to fill.
        array_name: String,
    },
}

/// Sanitize a glyph filename into the embedded C array identifier,
/// e.g. "fa-solid-900.ttf" → "s_fa_solid_900_ttf".
pub fn array_name(output_filename: &str) -> String {
    let stem = output_filename
        .strip_suffix(".ttf")
        .unwrap_or(output_filename);
    format!("s_{}_ttf", stem.replace('-', "_").replace(' ', ""))
}

/// Render `glyph_bytes` as a fixed-size C byte-array literal.
///
/// The declaration is sized exactly to the payload; bytes are lowercase
/// two-hex-digit `0x` literals, comma-separated, [`BYTES_PER_LINE`] per
/// line, wrapped in braces.
///
/// # Errors
///
/// Returns [`EmbeddingError`] when the payload is empty.
pub fn embed(glyph_bytes: &[u8], array_name: &str) -> Result<String, EmbeddingError> {
    if glyph_bytes.is_empty() {
        return Err(EmbeddingError::EmptyPayload {
            array_name: array_name.to_string(),
        });
    }

    let mut out = format!(
        "static const uint8_t {array_name}[{}] = \n{{",
        glyph_bytes.len()
    );
    for (i, byte) in glyph_bytes.iter().enumerate() {
        if i % BYTES_PER_LINE == 0 {
            out.push_str("\n\t");
        }
        let _ = write!(out, "0x{byte:02x}, ");
    }
    out.push_str("\n};\n\n");
    Ok(out)
}

/// Full glyph header artifact: banner, include guard, embedded array.
///
/// The array declaration needs `uint8_t`, hence the `<stdint.h>` note in the
/// banner.
///
/// # Errors
///
/// Returns [`EmbeddingError`] when the payload is empty.
pub fn glyph_header(
    glyph_bytes: &[u8],
    source_location: &str,
    array_name: &str,
) -> Result<String, EmbeddingError> {
    let mut out = format!(
        "// Generated by iconhdr\n\
         // from {source_location}\n\
         // Requires #include <stdint.h>\n\
         #pragma once\n\n"
    );
    out.push_str(&embed(glyph_bytes, array_name)?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_name_sanitizes_filename() {
        assert_eq!(array_name("fa-solid-900.ttf"), "s_fa_solid_900_ttf");
        assert_eq!(array_name("fa brands 400.ttf"), "s_fabrands400_ttf");
        assert_eq!(array_name("plain"), "s_plain_ttf");
    }

    #[test]
    fn test_embed_17_bytes_spans_two_lines() {
        let bytes: Vec<u8> = (0u8..17).collect();
        let text = embed(&bytes, "s_test_ttf").unwrap();

        let body = text
            .split_once('{')
            .unwrap()
            .1
            .split_once('}')
            .unwrap()
            .0;
        let lines: Vec<&str> = body.lines().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(lines.len(), 2, "16 bytes then 1 byte: {text}");
        assert_eq!(lines[0].matches("0x").count(), 16);
        assert_eq!(lines[1].matches("0x").count(), 1);
    }

    #[test]
    fn test_embed_declaration_sized_to_payload() {
        let bytes = vec![0xabu8; 20];
        let text = embed(&bytes, "s_test_ttf").unwrap();
        assert!(text.starts_with("static const uint8_t s_test_ttf[20] = "));
        assert!(text.contains("0xab, "));
        assert!(text.ends_with("\n};\n\n"));
    }

    #[test]
    fn test_embed_lowercase_two_digit_hex() {
        let text = embed(&[0x00, 0x0f, 0xff], "s_test_ttf").unwrap();
        assert!(text.contains("0x00, 0x0f, 0xff, "));
    }

    #[test]
    fn test_embed_empty_payload_rejected() {
        let err = embed(&[], "s_test_ttf").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("s_test_ttf"), "Error should name the array: {msg}");
    }

    #[test]
    fn test_glyph_header_wraps_array() {
        let text = glyph_header(&[1, 2, 3], "fa-solid-900.ttf", "s_fa_solid_900_ttf").unwrap();
        assert!(text.starts_with("// Generated by iconhdr\n"));
        assert!(text.contains("// from fa-solid-900.ttf\n"));
        assert!(text.contains("#pragma once\n"));
        assert!(text.contains("<stdint.h>"));
        assert!(text.contains("static const uint8_t s_fa_solid_900_ttf[3] = "));
    }

    #[test]
    fn test_glyph_header_empty_payload_rejected() {
        assert!(glyph_header(&[], "fa-solid-900.ttf", "s_fa_solid_900_ttf").is_err());
    }
}
