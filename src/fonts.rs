//! The built-in Font Awesome 6 variant table.
//!
//! Sibling variants are configuration rows, not types: free vs pro differ in
//! metadata location, brand vs non-brand in styles and boundary code.

use iconhdr_ir::{FontVariantDescriptor, GlyphFile};

/// Toggle for the optional TTF-to-header embedding stage.
pub const EMBED_GLYPHS: bool = false;

const FA6_METADATA_URL: &str =
    "https://github.com/FortAwesome/Font-Awesome/raw/6.x/metadata/icons.yml";
const FA6_REGULAR_TTF_URL: &str =
    "https://github.com/FortAwesome/Font-Awesome/blob/6.x/webfonts/fa-regular-400.ttf";
const FA6_SOLID_TTF_URL: &str =
    "https://github.com/FortAwesome/Font-Awesome/blob/6.x/webfonts/fa-solid-900.ttf";
const FA6_BRANDS_TTF_URL: &str =
    "https://github.com/FortAwesome/Font-Awesome/blob/5.x/webfonts/fa-brands-400.ttf";

fn glyph(style_code: &str, output_filename: &str, source_location: &str) -> GlyphFile {
    GlyphFile {
        style_code: style_code.to_string(),
        output_filename: output_filename.to_string(),
        source_location: source_location.to_string(),
    }
}

fn styles(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|s| s.to_string()).collect()
}

/// All configured Font Awesome 6 variants, in processing order.
pub fn font_awesome_variants() -> Vec<FontVariantDescriptor> {
    vec![
        // Font Awesome 6 — regular and solid styles, fetched from GitHub.
        FontVariantDescriptor {
            display_name: "Font Awesome 6".to_string(),
            short_code: "FA".to_string(),
            boundary_code: None,
            source_location: FA6_METADATA_URL.to_string(),
            glyph_files: vec![
                glyph("FAR", "fa-regular-400.ttf", FA6_REGULAR_TTF_URL),
                glyph("FAS", "fa-solid-900.ttf", FA6_SOLID_TTF_URL),
            ],
            included_styles: styles(&["regular", "solid"]),
        },
        // Font Awesome 6 Brands — boundary symbols get the FAB code so brand
        // and non-brand headers can be included together.
        FontVariantDescriptor {
            display_name: "Font Awesome 6 Brands".to_string(),
            short_code: "FA".to_string(),
            boundary_code: Some("FAB".to_string()),
            source_location: FA6_METADATA_URL.to_string(),
            glyph_files: vec![glyph("FAB", "fa-brands-400.ttf", FA6_BRANDS_TTF_URL)],
            included_styles: styles(&["brands"]),
        },
        // Font Awesome 6 Pro — same styles as free, metadata and TTFs read
        // from the working directory (the pro assets are not public).
        FontVariantDescriptor {
            display_name: "Font Awesome 6 Pro".to_string(),
            short_code: "FA".to_string(),
            boundary_code: None,
            source_location: "icons.yml".to_string(),
            glyph_files: vec![
                glyph("FAR", "fa-regular-400.ttf", "fa-regular-400.ttf"),
                glyph("FAS", "fa-solid-900.ttf", "fa-solid-900.ttf"),
            ],
            included_styles: styles(&["regular", "solid"]),
        },
        // Font Awesome 6 Pro Brands.
        FontVariantDescriptor {
            display_name: "Font Awesome 6 Pro Brands".to_string(),
            short_code: "FA".to_string(),
            boundary_code: Some("FAB".to_string()),
            source_location: "icons.yml".to_string(),
            glyph_files: vec![glyph("FAB", "fa-brands-400.ttf", "fa-brands-400.ttf")],
            included_styles: styles(&["brands"]),
        },
    ]
}
