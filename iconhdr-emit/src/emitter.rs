//! The per-target-language formatting contract.

use iconhdr_ir::{IconEntry, IntermediateRepresentation};

/// Formats one intermediate representation into one target syntax.
///
/// The four hooks are invoked in fixed order by [`Emitter::convert`] and
/// their outputs concatenated; that ordering is the whole behavioral surface
/// of an emitter. The IR is passed explicitly into every call — emitters
/// hold no per-conversion state of their own.
pub trait Emitter {
    /// Human-readable target name, for logging.
    fn language_name(&self) -> &'static str;

    /// Artifact filename for `ir`: a fixed template filled with the
    /// variant's display name, spaces removed.
    fn file_name(&self, ir: &IntermediateRepresentation) -> String;

    /// Banner, include-guard equivalent, and the per-glyph-file filename
    /// declarations derived from the IR's glyph-file list.
    fn prelude(&self, ir: &IntermediateRepresentation) -> String;

    /// Exactly three lines defining the min / max-16 / max boundary symbols,
    /// named with the variant's boundary code and a fixed tag, values as
    /// lowercase hex with a `0x` prefix.
    fn boundary_lines(&self, ir: &IntermediateRepresentation) -> String;

    /// One line defining the symbol for `icon`.
    fn icon_line(&self, ir: &IntermediateRepresentation, icon: &IconEntry) -> String;

    /// Closing content; empty for most targets.
    fn epilogue(&self, _ir: &IntermediateRepresentation) -> String {
        String::new()
    }

    /// Whether this target also gets per-glyph-file embedded byte-array
    /// headers when glyph embedding is enabled.
    fn embeds_glyphs(&self) -> bool {
        false
    }

    /// Full artifact text: prelude, boundaries, every icon in IR order,
    /// epilogue.
    fn convert(&self, ir: &IntermediateRepresentation) -> String {
        let mut out = self.prelude(ir);
        out.push_str(&self.boundary_lines(ir));
        for icon in &ir.icons {
            out.push_str(&self.icon_line(ir, icon));
        }
        out.push_str(&self.epilogue(ir));
        log::info!(
            "converted {} for {}",
            ir.descriptor.display_name,
            self.language_name()
        );
        out
    }
}
