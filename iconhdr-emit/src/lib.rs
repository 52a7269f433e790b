//! Emitters for the iconhdr generator.
//!
//! [`Emitter`] is the per-target-language formatting contract: four hooks
//! (prelude, boundary lines, per-icon line, epilogue) concatenated in fixed
//! order by the provided `convert`. [`CHeaderEmitter`] implements it for
//! C/C++ preprocessor macros. The glyph embedding stage
//! ([`embed`]/[`glyph_header`]) runs independently per glyph file, turning
//! raw TTF bytes into a fixed-size byte-array literal.
//!
//! Adding a target syntax means implementing [`Emitter`]; nothing upstream
//! of the IR changes.

pub mod c_header;
pub mod embed;
pub mod emitter;

pub use c_header::CHeaderEmitter;
pub use embed::{EmbeddingError, array_name, embed, glyph_header};
pub use emitter::Emitter;
