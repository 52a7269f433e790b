//! Data model and IR builder for the iconhdr generator.
//!
//! A [`FontVariantDescriptor`] names one font variant: where its metadata
//! document lives, which macro prefixes it uses, which glyph binaries belong
//! to it, and which style tags select its icons. [`build_ir`] folds the
//! variant's metadata document into an [`IntermediateRepresentation`] with
//! the three derived boundary codepoints. The IR is plain read-only data;
//! any number of emitters may consume it.

pub mod builder;
pub mod descriptor;
pub mod error;
pub mod ir;

pub use builder::build_ir;
pub use descriptor::{FontVariantDescriptor, GlyphFile};
pub use error::MalformedDocumentError;
pub use ir::{ASCII_EXCLUSION_MAX, IconEntry, IntermediateRepresentation, UNICODE_MAX};
