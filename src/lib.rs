//! iconhdr — icon-font header generator.
//!
//! One-shot batch tool: for each configured font variant, fetch its metadata
//! document, build the intermediate representation, and write one header per
//! active emitter; optionally embed each variant's TTF glyph files as
//! byte-array headers. Failures are isolated per unit of work — a dead URL
//! or malformed document skips that unit and the batch keeps going.

pub mod fonts;
pub mod pipeline;

pub use pipeline::{BatchSummary, run_batch};
