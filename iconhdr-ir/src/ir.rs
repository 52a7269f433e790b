//! The normalized representation built from one metadata document.

use crate::descriptor::FontVariantDescriptor;

/// Largest legal Unicode scalar value.
///
/// Also the initial `font_min`: a variant whose `font_min` is still this
/// value after building matched no icon at all.
pub const UNICODE_MAX: u32 = 0x10ffff;

/// Codepoints at or below this value are placeholders in the source metadata
/// (ASCII and Latin-1 range) and never contribute to `font_min`.
pub const ASCII_EXCLUSION_MAX: u32 = 0x0127;

/// One icon: metadata key plus Unicode scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconEntry {
    /// Kebab-case identifier from the metadata document, e.g. "circle-user".
    pub name: String,
    /// Unicode scalar value of the glyph.
    pub codepoint: u32,
}

/// Normalized view of one font variant, ready for emission.
///
/// Built once per variant by [`crate::builder::build_ir`], read-only from
/// then on. Carries a copy of the originating descriptor so emitters need no
/// separate lookup for naming fields or glyph-file declarations.
#[derive(Debug, Clone)]
pub struct IntermediateRepresentation {
    /// The variant this IR was built for.
    pub descriptor: FontVariantDescriptor,
    /// Smallest icon codepoint above [`ASCII_EXCLUSION_MAX`], or
    /// [`UNICODE_MAX`] when the variant matched no such icon.
    pub font_min: u32,
    /// Largest icon codepoint representable in a 16-bit code unit, or 0.
    pub font_max_16: u32,
    /// Largest icon codepoint with no upper restriction, or 0.
    pub font_max: u32,
    /// Icons in document traversal order, deduplicated on
    /// `(name, codepoint)`. Not sorted.
    pub icons: Vec<IconEntry>,
}

impl IntermediateRepresentation {
    /// Whether the variant matched no icon at all.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
