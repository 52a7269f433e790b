//! Folds a raw metadata document into an intermediate representation.

use std::collections::HashSet;

use serde::Deserialize;
use serde_yaml_ng::Value;

use crate::descriptor::FontVariantDescriptor;
use crate::error::MalformedDocumentError;
use crate::ir::{ASCII_EXCLUSION_MAX, IconEntry, IntermediateRepresentation, UNICODE_MAX};

/// Per-icon fields of the metadata document that matter here.
///
/// Real documents carry more (labels, search terms, change history); unknown
/// fields are ignored.
#[derive(Debug, Deserialize)]
struct IconMetadata {
    styles: Vec<String>,
    unicode: String,
}

/// Parse `raw_document` and fold it into an IR for `descriptor`.
///
/// The document must be a YAML mapping of icon key → metadata object with
/// `styles` (sequence of tags) and `unicode` (bare hex string). Only entries
/// with at least one style in `descriptor.included_styles` become icons;
/// entries in the placeholder range (at or below [`ASCII_EXCLUSION_MAX`])
/// are not icons at all and never enter the IR; duplicates on the exact
/// `(key, codepoint)` pair collapse to one entry.
/// Icon order is document order. The three boundary codepoints are folded in
/// the same pass, at most once per distinct icon.
///
/// IRs of different variants are fully independent: an icon invisible to
/// this variant contributes nothing here even if another variant picks it up.
///
/// # Errors
///
/// Returns [`MalformedDocumentError`] when the document is not valid YAML,
/// its top level is not a mapping, or an entry lacks the expected
/// `styles`/`unicode` shape.
pub fn build_ir(
    raw_document: &[u8],
    descriptor: &FontVariantDescriptor,
) -> Result<IntermediateRepresentation, MalformedDocumentError> {
    let document: Value = serde_yaml_ng::from_slice(raw_document)?;
    let mapping = document
        .as_mapping()
        .ok_or(MalformedDocumentError::NotAMapping)?;

    let mut font_min = UNICODE_MAX;
    let mut font_max_16 = 0u32;
    let mut font_max = 0u32;
    let mut icons: Vec<IconEntry> = Vec::new();
    let mut seen: HashSet<(String, u32)> = HashSet::new();

    for (key, value) in mapping {
        let name = key.as_str().ok_or_else(|| MalformedDocumentError::NonStringKey {
            key: format!("{key:?}"),
        })?;
        let metadata: IconMetadata =
            serde_yaml_ng::from_value(value.clone()).map_err(|source| {
                MalformedDocumentError::Entry {
                    key: name.to_string(),
                    source,
                }
            })?;
        let codepoint = parse_codepoint(&metadata.unicode).ok_or_else(|| {
            MalformedDocumentError::BadCodepoint {
                key: name.to_string(),
                unicode: metadata.unicode.clone(),
            }
        })?;

        if codepoint <= ASCII_EXCLUSION_MAX {
            // Placeholder codepoint (ASCII/Latin-1 range), not a real icon.
            log::debug!("skipping placeholder entry '{name}' (U+{codepoint:04x})");
            continue;
        }

        for style in &metadata.styles {
            if !descriptor.includes_style(style) {
                continue;
            }
            if !seen.insert((name.to_string(), codepoint)) {
                continue;
            }

            if codepoint < font_min {
                font_min = codepoint;
            }
            if codepoint <= 0xffff && codepoint > font_max_16 {
                font_max_16 = codepoint;
            }
            if codepoint > font_max {
                font_max = codepoint;
            }
            icons.push(IconEntry {
                name: name.to_string(),
                codepoint,
            });
        }
    }

    log::info!(
        "built IR for {}: {} icons, min 0x{font_min:04x}, max16 0x{font_max_16:04x}, max 0x{font_max:04x}",
        descriptor.display_name,
        icons.len()
    );

    Ok(IntermediateRepresentation {
        descriptor: descriptor.clone(),
        font_min,
        font_max_16,
        font_max,
        icons,
    })
}

/// Normalize a metadata `unicode` field (bare hex, variable length) to a
/// Unicode scalar.
///
/// Zero-padding to four digits never changes the numeric value, so the field
/// is parsed directly; values that are not scalars (out of range or in the
/// surrogate gap) are rejected.
fn parse_codepoint(unicode: &str) -> Option<u32> {
    let value = u32::from_str_radix(unicode.trim(), 16).ok()?;
    char::from_u32(value).map(|_| value)
}
