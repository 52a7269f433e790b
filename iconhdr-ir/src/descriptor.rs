//! Static font-variant configuration.
//!
//! Variants are plain data rows; sibling variants (brand vs non-brand, free
//! vs pro) differ only in a handful of fields, and one shared
//! [`crate::builder::build_ir`] handles all of them.

/// One physical glyph binary (TTF) belonging to a font variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphFile {
    /// Uppercase style code used in the `FONT_ICON_FILE_NAME_*` symbol
    /// (e.g. "FAS" for the solid file).
    pub style_code: String,
    /// Filename the consuming project is expected to ship
    /// (e.g. "fa-solid-900.ttf").
    pub output_filename: String,
    /// Where the TTF bytes come from: URL or local path.
    pub source_location: String,
}

/// Static description of one font variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontVariantDescriptor {
    /// Human-readable font identifier, e.g. "Font Awesome 6 Brands".
    pub display_name: String,
    /// Uppercase abbreviation used as the macro prefix for icon symbols,
    /// e.g. "FA".
    pub short_code: String,
    /// Override of `short_code` for the boundary (min/max) symbols only.
    ///
    /// Sibling variants sharing one consuming codebase (brand vs non-brand)
    /// use this to keep their boundary symbols distinct while icon symbols
    /// keep the common prefix.
    pub boundary_code: Option<String>,
    /// Metadata document location: URL or local path.
    pub source_location: String,
    /// Glyph binaries belonging to this variant, in declaration order.
    pub glyph_files: Vec<GlyphFile>,
    /// Style tags whose icons belong to this variant (set semantics).
    pub included_styles: Vec<String>,
}

impl FontVariantDescriptor {
    /// The abbreviation used for boundary symbol names.
    ///
    /// Falls back to `short_code` when no dedicated boundary code is set.
    pub fn boundary_code(&self) -> &str {
        self.boundary_code.as_deref().unwrap_or(&self.short_code)
    }

    /// Whether `style` selects icons for this variant.
    pub fn includes_style(&self, style: &str) -> bool {
        self.included_styles.iter().any(|s| s == style)
    }
}
